use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::money;

/// Raised when a stored label does not name a known enum variant.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Possible lifecycle states of an order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Order has been placed but not yet picked up.
    Pending,
    /// Order is being packed.
    Processing,
    /// Order left the warehouse.
    Shipped,
    /// Order reached the customer.
    Delivered,
    /// Order was cancelled before fulfilment.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<OrderStatus> for &'static str {
    fn from(value: OrderStatus) -> Self {
        value.as_str()
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = UnknownVariant;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "order status",
                value: value.to_string(),
            })
    }
}

/// Order header. Serialized as one row of `orders.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier of the order.
    #[serde(rename = "order_id")]
    pub id: i32,
    /// Customer who placed the order.
    pub customer_id: i32,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Current lifecycle status.
    pub status: OrderStatus,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_zip: String,
    /// Sum of the subtotals of every item on the order, in cents.
    #[serde(rename = "total_amount", with = "money::decimal")]
    pub total_cents: i64,
}

/// Order line. Serialized as one row of `order_items.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Unique identifier of the line.
    #[serde(rename = "order_item_id")]
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    /// Units ordered, always at least one.
    pub quantity: i32,
    /// Product price captured when the order was placed, in cents.
    #[serde(rename = "unit_price", with = "money::decimal")]
    pub unit_price_cents: i64,
    /// `quantity * unit_price_cents`.
    #[serde(rename = "subtotal", with = "money::decimal")]
    pub subtotal_cents: i64,
}

impl OrderItem {
    /// Build a line whose subtotal is derived from quantity and unit price.
    pub fn new(
        id: i32,
        order_id: i32,
        product_id: i32,
        quantity: i32,
        unit_price_cents: i64,
    ) -> Self {
        Self {
            id,
            order_id,
            product_id,
            quantity,
            unit_price_cents,
            subtotal_cents: i64::from(quantity) * unit_price_cents,
        }
    }
}
