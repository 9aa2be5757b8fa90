//! The in-memory entity store.
//!
//! Built once from the seed fixtures at startup and shared read-only behind
//! the application state. Lookups by id return `Option`; a missing record is
//! never an error.

mod seed;

use philagri_core::{ProductId, UserId};

use crate::models::{
    Crop, ExpensePoint, Fertilizer, HarvestPoint, Machine, Message, Order, Product, Review,
    SalesPoint, Task, User, Worker,
};

/// Party id that marketplace views treat as "me, the buyer".
pub const CURRENT_BUYER_ID: &str = "b1";

/// Party id that marketplace views treat as "me, the seller".
pub const CURRENT_SELLER_ID: &str = "s1";

/// Read-only seed collections.
#[derive(Debug, Clone)]
pub struct EntityStore {
    products: Vec<Product>,
    orders: Vec<Order>,
    messages: Vec<Message>,
    reviews: Vec<Review>,
    user: User,
    workers: Vec<Worker>,
    crops: Vec<Crop>,
    machines: Vec<Machine>,
    fertilizers: Vec<Fertilizer>,
    tasks: Vec<Task>,
    harvest_trend: Vec<HarvestPoint>,
    expense_breakdown: Vec<ExpensePoint>,
    sales_trend: Vec<SalesPoint>,
    buyer_id: UserId,
    seller_id: UserId,
}

impl EntityStore {
    /// Build the store from the bundled fixtures.
    #[must_use]
    pub fn seed() -> Self {
        let store = Self {
            products: seed::products(),
            orders: seed::orders(),
            messages: seed::messages(),
            reviews: seed::reviews(),
            user: seed::user(),
            workers: seed::workers(),
            crops: seed::crops(),
            machines: seed::machines(),
            fertilizers: seed::fertilizers(),
            tasks: seed::tasks(),
            harvest_trend: seed::harvest_trend(),
            expense_breakdown: seed::expense_breakdown(),
            sales_trend: seed::sales_trend(),
            buyer_id: UserId::new(CURRENT_BUYER_ID),
            seller_id: UserId::new(CURRENT_SELLER_ID),
        };
        tracing::debug!(
            products = store.products.len(),
            orders = store.orders.len(),
            messages = store.messages.len(),
            tasks = store.tasks.len(),
            "Entity store seeded"
        );
        store
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// The demo account as seeded (role is tracked in the session context).
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    #[must_use]
    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }

    #[must_use]
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    #[must_use]
    pub fn fertilizers(&self) -> &[Fertilizer] {
        &self.fertilizers
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn harvest_trend(&self) -> &[HarvestPoint] {
        &self.harvest_trend
    }

    #[must_use]
    pub fn expense_breakdown(&self) -> &[ExpensePoint] {
        &self.expense_breakdown
    }

    #[must_use]
    pub fn sales_trend(&self) -> &[SalesPoint] {
        &self.sales_trend
    }

    /// The buyer identity used by purchase-side views.
    #[must_use]
    pub const fn buyer_id(&self) -> &UserId {
        &self.buyer_id
    }

    /// The seller identity used by listing and sales views.
    #[must_use]
    pub const fn seller_id(&self) -> &UserId {
        &self.seller_id
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Reviews left for a product, in store order.
    #[must_use]
    pub fn reviews_for(&self, product_id: &ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| &r.product_id == product_id)
            .collect()
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::seed()
    }
}
