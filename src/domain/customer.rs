use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shopper account. Serialized as one row of `customers.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier of the customer.
    #[serde(rename = "customer_id")]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique email address stored in lowercase.
    pub email: String,
    pub phone: String,
    /// Street line of the postal address.
    pub address: String,
    pub city: String,
    /// Two-letter state abbreviation.
    pub state: String,
    pub zip_code: String,
    pub country: String,
    /// Date the customer signed up.
    pub registration_date: NaiveDate,
}
