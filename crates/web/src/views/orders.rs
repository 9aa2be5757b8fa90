//! Purchases and sales for the current marketplace user.
//!
//! Only sales can change status here; the seller drives fulfilment.

use philagri_core::{OrderStatus, Peso, UserId};

use super::ViewError;
use crate::models::Order;
use crate::queries::orders::{Party, active_orders, filter_by_status, orders_for, total_price};
use crate::store::EntityStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBoard {
    purchases: Vec<Order>,
    sales: Vec<Order>,
}

impl OrderBoard {
    #[must_use]
    pub fn from_store(store: &EntityStore) -> Self {
        let partition = |party: Party, id: &UserId| -> Vec<Order> {
            orders_for(store.orders(), party, id)
                .into_iter()
                .cloned()
                .collect()
        };
        Self {
            purchases: partition(Party::Buyer, store.buyer_id()),
            sales: partition(Party::Seller, store.seller_id()),
        }
    }

    #[must_use]
    pub fn purchases(&self) -> &[Order] {
        &self.purchases
    }

    #[must_use]
    pub fn sales(&self) -> &[Order] {
        &self.sales
    }

    #[must_use]
    pub fn purchases_with(&self, status: Option<OrderStatus>) -> Vec<&Order> {
        filter_by_status(&self.purchases, status)
    }

    #[must_use]
    pub fn sales_with(&self, status: Option<OrderStatus>) -> Vec<&Order> {
        filter_by_status(&self.sales, status)
    }

    /// Purchases not yet delivered or cancelled.
    #[must_use]
    pub fn active_purchases(&self) -> Vec<&Order> {
        active_orders(&self.purchases)
    }

    #[must_use]
    pub fn total_spent(&self) -> Peso {
        total_price(&self.purchases)
    }

    #[must_use]
    pub fn total_earned(&self) -> Peso {
        total_price(&self.sales)
    }

    /// Advance or cancel one of the seller's orders.
    ///
    /// # Errors
    ///
    /// `UnknownId` if no sale has `id`, `Transition` if the lifecycle does not
    /// allow moving to `to`.
    pub fn update_sale_status(mut self, id: &str, to: OrderStatus) -> Result<Self, ViewError> {
        let order = self
            .sales
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ViewError::unknown("order", id))?;
        order.status = order.status.transition_to(to)?;
        tracing::debug!(order_id = %order.id, status = %order.status, "Sale status updated");
        Ok(self)
    }
}
