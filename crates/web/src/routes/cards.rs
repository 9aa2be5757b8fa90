//! Small display types shared by several pages.

use philagri_core::Peso;

use crate::models::{ExpensePoint, HarvestPoint, SalesPoint};

/// Headline number on a dashboard or list page.
#[derive(Debug, Clone)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub detail: String,
}

impl StatCard {
    pub fn new(label: &'static str, value: impl ToString, detail: impl Into<String>) -> Self {
        Self {
            label,
            value: value.to_string(),
            detail: detail.into(),
        }
    }
}

/// One row of a trend table (charts are out of scope, the series is shown as
/// data).
#[derive(Debug, Clone)]
pub struct TrendRow {
    pub label: String,
    pub value: String,
    pub extra: Option<String>,
}

impl From<&HarvestPoint> for TrendRow {
    fn from(point: &HarvestPoint) -> Self {
        Self {
            label: point.month.clone(),
            value: format!("{} kg", point.harvest),
            extra: None,
        }
    }
}

impl From<&ExpensePoint> for TrendRow {
    fn from(point: &ExpensePoint) -> Self {
        Self {
            label: point.category.clone(),
            value: point.amount.display(),
            extra: None,
        }
    }
}

impl From<&SalesPoint> for TrendRow {
    fn from(point: &SalesPoint) -> Self {
        Self {
            label: point.month.clone(),
            value: point.revenue.display(),
            extra: Some(format!("{} orders", point.orders)),
        }
    }
}

/// Peso amount without decimals, as shown on stat cards.
#[must_use]
pub fn whole_pesos(amount: Peso) -> String {
    amount
        .display()
        .strip_suffix(".00")
        .map_or_else(|| amount.display(), str::to_owned)
}
