//! Rows produced by the read-only reports over a loaded store.

use serde::Serialize;

use crate::domain::money;

/// Orders placed and completed payments received per customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSpending {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub total_orders: i64,
    #[serde(rename = "total_spent", serialize_with = "money::decimal::serialize")]
    pub total_spent_cents: i64,
}

/// Store-wide spending totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpendingSummary {
    pub total_customers: i64,
    pub customers_with_orders: i64,
    pub total_orders: i64,
    #[serde(rename = "total_revenue", serialize_with = "money::decimal::serialize")]
    pub total_revenue_cents: i64,
    /// Completed revenue divided by the number of orders, rounded down to a cent.
    #[serde(
        rename = "average_order_value",
        serialize_with = "money::decimal::serialize"
    )]
    pub average_order_value_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSales {
    pub product_id: i32,
    pub product_name: String,
    pub category_name: String,
    pub quantity_sold: i64,
    #[serde(rename = "revenue", serialize_with = "money::decimal::serialize")]
    pub revenue_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRevenue {
    pub category_id: i32,
    pub category_name: String,
    pub orders: i64,
    pub items_sold: i64,
    #[serde(rename = "revenue", serialize_with = "money::decimal::serialize")]
    pub revenue_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRevenue {
    /// `YYYY-MM`.
    pub month: String,
    pub orders: i64,
    #[serde(rename = "revenue", serialize_with = "money::decimal::serialize")]
    pub revenue_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table: String,
    pub rows: i64,
}
