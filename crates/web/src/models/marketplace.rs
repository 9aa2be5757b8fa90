//! Marketplace records: listings, orders, messages and reviews.

use philagri_core::{MessageId, OrderId, OrderStatus, Peso, ProductId, ReviewId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Price per `unit`.
    pub price: Peso,
    /// Units in stock.
    pub quantity: u32,
    pub unit: String,
    pub description: String,
    pub image: String,
    pub seller_id: UserId,
    pub seller_name: String,
    pub location: String,
    /// Average rating, one decimal place, 0.0 to 5.0.
    pub rating: Decimal,
    pub review_count: u32,
    pub available: bool,
}

/// A purchase between a buyer and a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub buyer_id: UserId,
    pub buyer_name: String,
    pub seller_id: UserId,
    pub seller_name: String,
    pub quantity: u32,
    pub total_price: Peso,
    pub status: OrderStatus,
    pub order_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

/// A direct message between two marketplace parties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub sender_name: String,
    pub receiver_id: UserId,
    pub receiver_name: String,
    pub content: String,
    /// ISO-8601 local timestamp (`2026-02-24T10:30:00`).
    pub timestamp: String,
    pub read: bool,
}

impl Message {
    /// Whether `party` sent or received this message.
    #[must_use]
    pub fn involves(&self, party: &UserId) -> bool {
        &self.sender_id == party || &self.receiver_id == party
    }
}

/// A buyer's review of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub seller_id: UserId,
    pub buyer_id: UserId,
    pub buyer_name: String,
    /// Star rating from 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub date: String,
}
