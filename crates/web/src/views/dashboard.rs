//! Landing dashboards for the two roles.

use philagri_core::Peso;

use crate::models::{Crop, ExpensePoint, HarvestPoint, Order, Product, SalesPoint, Task};
use crate::queries::catalog::{listings_for, top_rated};
use crate::queries::farm::{
    CropSummary, MachineSummary, TaskSummary, WorkerSummary, crop_summary, machine_summary,
    open_tasks, task_summary, worker_summary,
};
use crate::queries::orders::{Party, orders_for, total_price};
use crate::store::EntityStore;

/// Open tasks listed on the farm dashboard.
pub const FARM_OPEN_TASKS: usize = 4;

/// Recent orders listed per side on the marketplace dashboard.
pub const RECENT_ORDERS: usize = 3;

/// Featured products on the marketplace dashboard.
pub const FEATURED_PRODUCTS: usize = 4;

#[derive(Debug, Clone)]
pub struct FarmOverview<'a> {
    pub workers: WorkerSummary,
    pub crops: CropSummary,
    pub machines: MachineSummary,
    pub tasks: TaskSummary,
    pub open_tasks: Vec<&'a Task>,
    pub crop_list: &'a [Crop],
    pub harvest_trend: &'a [HarvestPoint],
    pub expense_breakdown: &'a [ExpensePoint],
}

impl<'a> FarmOverview<'a> {
    #[must_use]
    pub fn from_store(store: &'a EntityStore) -> Self {
        Self {
            workers: worker_summary(store.workers()),
            crops: crop_summary(store.crops()),
            machines: machine_summary(store.machines()),
            tasks: task_summary(store.tasks()),
            open_tasks: open_tasks(store.tasks(), FARM_OPEN_TASKS),
            crop_list: store.crops(),
            harvest_trend: store.harvest_trend(),
            expense_breakdown: store.expense_breakdown(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketplaceOverview<'a> {
    pub listings: Vec<&'a Product>,
    pub active_listings: usize,
    pub purchases: Vec<&'a Order>,
    pub sales: Vec<&'a Order>,
    pub total_spent: Peso,
    pub total_earned: Peso,
    pub featured: Vec<&'a Product>,
    pub sales_trend: &'a [SalesPoint],
}

impl<'a> MarketplaceOverview<'a> {
    #[must_use]
    pub fn from_store(store: &'a EntityStore) -> Self {
        let listings = listings_for(store.products(), store.seller_id());
        let purchases = orders_for(store.orders(), Party::Buyer, store.buyer_id());
        let sales = orders_for(store.orders(), Party::Seller, store.seller_id());
        Self {
            active_listings: listings.iter().filter(|p| p.available).count(),
            total_spent: total_price(purchases.iter().copied()),
            total_earned: total_price(sales.iter().copied()),
            featured: top_rated(store.products(), FEATURED_PRODUCTS),
            sales_trend: store.sales_trend(),
            listings,
            purchases,
            sales,
        }
    }

    #[must_use]
    pub fn recent_purchases(&self) -> &[&'a Order] {
        &self.purchases[..self.purchases.len().min(RECENT_ORDERS)]
    }

    #[must_use]
    pub fn recent_sales(&self) -> &[&'a Order] {
        &self.sales[..self.sales.len().min(RECENT_ORDERS)]
    }
}
