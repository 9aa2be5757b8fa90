//! Time-series handed to the charting surface as plain data.

use philagri_core::Peso;
use serde::{Deserialize, Serialize};

/// Monthly harvest output in kilograms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestPoint {
    pub month: String,
    pub harvest: u32,
}

/// Expense total for one cost category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensePoint {
    pub category: String,
    pub amount: Peso,
}

/// Monthly marketplace revenue and order count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub revenue: Peso,
    pub orders: u32,
}
