//! Quantity selection on the product page.

use philagri_core::{Peso, ProductId};

use crate::models::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit: String,
    pub unit_price: Peso,
    pub quantity: u32,
    pub max_quantity: u32,
}

impl OrderDraft {
    /// Draft for one unit.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self::with_quantity(product, 1)
    }

    /// Draft for `requested` units, clamped to `1..=product.quantity`.
    #[must_use]
    pub fn with_quantity(product: &Product, requested: u32) -> Self {
        let max_quantity = product.quantity.max(1);
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            unit: product.unit.clone(),
            unit_price: product.price,
            quantity: requested.clamp(1, max_quantity),
            max_quantity,
        }
    }

    #[must_use]
    pub fn total(&self) -> Peso {
        self.unit_price.times(self.quantity)
    }

    /// Confirmation shown once the order is placed.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Order placed for {} {} of {}!",
            self.quantity, self.unit, self.product_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;

    fn rice() -> Product {
        EntityStore::seed()
            .product("1")
            .cloned()
            .unwrap_or_else(|| panic!("seed product 1 missing"))
    }

    #[test]
    fn test_total_is_unit_price_times_quantity() {
        let draft = OrderDraft::with_quantity(&rice(), 20);
        assert_eq!(draft.total(), Peso::whole(1000));
        assert_eq!(
            draft.confirmation(),
            "Order placed for 20 kg of Premium Rice (Sinandomeng)!"
        );
    }

    #[test]
    fn test_quantity_is_clamped_to_stock() {
        let product = rice();
        assert_eq!(OrderDraft::with_quantity(&product, 0).quantity, 1);
        assert_eq!(OrderDraft::with_quantity(&product, 9_999).quantity, 5000);
        assert_eq!(OrderDraft::new(&product).quantity, 1);
    }
}
