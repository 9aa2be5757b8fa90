//! Derivation functions: pure, read-only queries over seed records.
//!
//! Every function takes borrowed records and returns borrowed results in the
//! input's relative order unless it documents a sort. Nothing here mutates
//! its input, so calling a query twice with the same input yields the same
//! output.

pub mod catalog;
pub mod farm;
pub mod messages;
pub mod orders;

pub use catalog::{BrowseFilter, BrowseSort, CategoryFilter, browse, sort_products, top_rated};
pub use messages::{Contact, contacts, conversation};
pub use orders::{Party, filter_by_status, orders_for, total_price};
