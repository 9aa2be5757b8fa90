//! Peso amounts using decimal arithmetic.
//!
//! Every price, order total, daily rate and fertilizer cost in the seed store
//! is a non-negative amount of Philippine pesos. Sums accumulate exactly in
//! [`Decimal`] and are only rounded when formatted for display.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency symbol used for display.
pub const PESO_SIGN: char = '₱';

/// Error constructing a [`Peso`] amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PesoError {
    #[error("amount must not be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative amount of pesos.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Peso(Decimal);

impl Peso {
    /// Zero pesos.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an amount, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns `PesoError::Negative` if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PesoError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PesoError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create an amount from a whole number of pesos.
    #[must_use]
    pub fn whole(pesos: u32) -> Self {
        Self(Decimal::from(pesos))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply a unit price by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format for display with two decimals and thousands separators
    /// (e.g. `₱8,600.00`).
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{rounded:.2}");
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("{PESO_SIGN}{}.{fraction}", group_thousands(whole))
    }
}

impl fmt::Display for Peso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl TryFrom<Decimal> for Peso {
    type Error = PesoError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Peso> for Decimal {
    fn from(peso: Peso) -> Self {
        peso.0
    }
}

impl Add for Peso {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Peso {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Peso> for Peso {
    fn sum<I: Iterator<Item = &'a Peso>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Insert `,` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
