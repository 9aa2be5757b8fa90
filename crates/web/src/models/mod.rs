//! Domain models for the farm and marketplace dashboards.
//!
//! Every record here is an immutable seed value. Views that "change" a record
//! work on their own copies (see [`crate::views`]).

pub mod farm;
pub mod marketplace;
pub mod session;
pub mod trend;
pub mod user;

pub use farm::{Crop, Fertilizer, Machine, Task, Worker};
pub use marketplace::{Message, Order, Product, Review};
pub use session::keys as session_keys;
pub use trend::{ExpensePoint, HarvestPoint, SalesPoint};
pub use user::User;
