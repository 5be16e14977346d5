use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::money;

/// Catalogue item. Serialized as one row of `products.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier of the product.
    #[serde(rename = "product_id")]
    pub id: i32,
    /// Display name, possibly carrying a brand prefix and variant number.
    #[serde(rename = "product_name")]
    pub name: String,
    /// Longer description shown to shoppers.
    pub description: String,
    /// Current unit price in cents.
    #[serde(rename = "price", with = "money::decimal")]
    pub price_cents: i64,
    /// Category the product belongs to.
    pub category_id: i32,
    /// Units currently in stock.
    pub stock_quantity: i32,
    /// Date the product was listed.
    pub created_date: NaiveDate,
}
