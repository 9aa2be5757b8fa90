//! Product browsing: search filter, sorting, top-N and listing aggregates.
//!
//! The browse filter is four independent predicates ANDed together, so the
//! order in which they are applied never changes the result set.

use philagri_core::{Peso, UserId};
use rust_decimal::Decimal;

use crate::models::Product;

/// Category options offered by the browse page, `all` first.
pub const CATEGORIES: &[&str] = &["all", "rice & grains", "fruits", "vegetables", "poultry & eggs"];

/// Default upper bound of the browse price slider.
pub const DEFAULT_MAX_PRICE: u32 = 300;

/// Minimum rating for the buyer "recommended" strip.
pub const RECOMMENDED_MIN_RATING: Decimal = Decimal::from_parts(47, 0, 0, false, 1);

/// Category predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Case-insensitive exact match on the category name.
    Named(String),
}

impl CategoryFilter {
    /// Parse a form value; empty and `all` (any case) mean every category.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(value.to_owned())
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name.to_lowercase() == category.to_lowercase(),
        }
    }

    /// Form value for re-rendering the select box.
    #[must_use]
    pub fn as_form_value(&self) -> String {
        match self {
            Self::All => "all".to_owned(),
            Self::Named(name) => name.to_lowercase(),
        }
    }
}

/// Browse page filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseFilter {
    /// Case-insensitive substring of name or description; empty matches all.
    pub query: String,
    pub category: CategoryFilter,
    /// Inclusive lower price bound.
    pub min_price: Peso,
    /// Inclusive upper price bound.
    pub max_price: Peso,
}

impl Default for BrowseFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            min_price: Peso::ZERO,
            max_price: Peso::whole(DEFAULT_MAX_PRICE),
        }
    }
}

impl BrowseFilter {
    #[must_use]
    pub fn matches_query(&self, product: &Product) -> bool {
        let needle = self.query.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn matches_category(&self, product: &Product) -> bool {
        self.category.matches(&product.category)
    }

    #[must_use]
    pub fn matches_price(&self, product: &Product) -> bool {
        self.min_price <= product.price && product.price <= self.max_price
    }

    /// All four predicates, including availability.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && product.available
    }
}

/// Browse ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseSort {
    PriceLow,
    PriceHigh,
    #[default]
    Rating,
    Name,
}

impl BrowseSort {
    pub const ALL: [Self; 4] = [Self::Rating, Self::PriceLow, Self::PriceHigh, Self::Name];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
            Self::Name => "Name",
        }
    }
}

impl std::str::FromStr for BrowseSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            _ => Err(format!("invalid sort: {s}")),
        }
    }
}

/// Products matching every predicate of `filter`, in input order.
#[must_use]
pub fn browse<'a, I>(products: I, filter: &BrowseFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().filter(|p| filter.matches(p)).collect()
}

/// Only the category predicate.
#[must_use]
pub fn filter_category<'a, I>(products: I, category: &CategoryFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| category.matches(&p.category))
        .collect()
}

/// Only the inclusive price-range predicate.
#[must_use]
pub fn filter_price<'a, I>(products: I, min: Peso, max: Peso) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| min <= p.price && p.price <= max)
        .collect()
}

/// Stable sort; equal keys keep their input order.
#[must_use]
pub fn sort_products(mut products: Vec<&Product>, sort: BrowseSort) -> Vec<&Product> {
    match sort {
        BrowseSort::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
        BrowseSort::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
        BrowseSort::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
        BrowseSort::Name => products.sort_by_cached_key(|p| p.name.to_lowercase()),
    }
    products
}

/// The `n` highest-rated products; ties keep store order.
#[must_use]
pub fn top_rated<'a, I>(products: I, n: usize) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut ranked = sort_products(products.into_iter().collect(), BrowseSort::Rating);
    ranked.truncate(n);
    ranked
}

/// Products rated at least `min_rating`, best first, at most `n`.
#[must_use]
pub fn recommended<'a, I>(products: I, min_rating: Decimal, n: usize) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    top_rated(
        products.into_iter().filter(|p| p.rating >= min_rating),
        n,
    )
}

/// Listings owned by `seller_id`, in store order.
#[must_use]
pub fn listings_for<'a, I>(products: I, seller_id: &UserId) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| &p.seller_id == seller_id)
        .collect()
}

/// Mean rating, rounded to one decimal. `None` for no products.
#[must_use]
pub fn average_rating<'a, I>(products: I) -> Option<Decimal>
where
    I: IntoIterator<Item = &'a Product>,
{
    let (sum, count) = products
        .into_iter()
        .fold((Decimal::ZERO, 0u32), |(sum, count), p| (sum + p.rating, count + 1));
    (count > 0).then(|| (sum / Decimal::from(count)).round_dp(1))
}
