//! The seller's own listings, with availability toggling and removal.

use rust_decimal::Decimal;

use super::ViewError;
use crate::models::Product;
use crate::queries::catalog::{average_rating, listings_for};
use crate::store::EntityStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsBoard {
    products: Vec<Product>,
}

impl ListingsBoard {
    /// Listings belonging to the store's current seller.
    #[must_use]
    pub fn from_store(store: &EntityStore) -> Self {
        Self {
            products: listings_for(store.products(), store.seller_id())
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.products.iter().filter(|p| p.available).count()
    }

    #[must_use]
    pub fn average_rating(&self) -> Option<Decimal> {
        average_rating(&self.products)
    }

    /// Flip a listing between available and unavailable.
    ///
    /// # Errors
    ///
    /// `UnknownId` if the seller has no listing with `id`.
    pub fn toggle_availability(mut self, id: &str) -> Result<Self, ViewError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ViewError::unknown("listing", id))?;
        product.available = !product.available;
        Ok(self)
    }

    /// Drop a listing from the board.
    ///
    /// # Errors
    ///
    /// `UnknownId` if the seller has no listing with `id`.
    pub fn remove(mut self, id: &str) -> Result<Self, ViewError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(ViewError::unknown("listing", id));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> ListingsBoard {
        ListingsBoard::from_store(&EntityStore::seed())
    }

    #[test]
    fn test_only_current_seller_listings() {
        let board = board();
        let ids: Vec<&str> = board.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(board.active_count(), 2);
    }

    #[test]
    fn test_toggle_twice_restores_availability() {
        let toggled = board().toggle_availability("4");
        assert_eq!(toggled.as_ref().map(ListingsBoard::active_count), Ok(1));

        let restored = toggled.and_then(|b| b.toggle_availability("4"));
        assert_eq!(restored, Ok(board()));
    }

    #[test]
    fn test_remove_listing() {
        let board = board().remove("1");
        assert_eq!(board.as_ref().map(|b| b.products().len()), Ok(1));
    }

    #[test]
    fn test_listing_of_another_seller_is_unknown() {
        assert!(matches!(
            board().toggle_availability("2"),
            Err(ViewError::UnknownId { kind: "listing", .. })
        ));
        assert!(board().remove("2").is_err());
    }

    #[test]
    fn test_average_rating_survives_removal_of_everything() {
        let empty = board().remove("1").and_then(|b| b.remove("4"));
        assert_eq!(empty.map(|b| b.average_rating()), Ok(None));
    }
}
