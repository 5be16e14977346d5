use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::money;
use crate::domain::order::UnknownVariant;

/// Payment instrument used for an attempt.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "PayPal")]
    PayPal,
    #[serde(rename = "Apple Pay")]
    ApplePay,
    #[serde(rename = "Google Pay")]
    GooglePay,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::PayPal,
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
        PaymentMethod::BankTransfer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::GooglePay => "Google Pay",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl From<PaymentMethod> for &'static str {
    fn from(value: PaymentMethod) -> Self {
        value.as_str()
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = UnknownVariant;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "payment method",
                value: value.to_string(),
            })
    }
}

/// Outcome of a payment attempt.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Completed,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

impl From<PaymentStatus> for &'static str {
    fn from(value: PaymentStatus) -> Self {
        value.as_str()
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = UnknownVariant;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "payment status",
                value: value.to_string(),
            })
    }
}

/// Payment attempt against an order. Serialized as one row of `payments.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier of the payment.
    #[serde(rename = "payment_id")]
    pub id: i32,
    /// Order the payment settles.
    pub order_id: i32,
    pub payment_method: PaymentMethod,
    /// Date of the attempt, never before the order date.
    pub payment_date: NaiveDate,
    /// Charged amount in cents; equals the order total when completed.
    #[serde(rename = "amount", with = "money::decimal")]
    pub amount_cents: i64,
    pub payment_status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_labels_match_serde_names() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
            assert_eq!(PaymentMethod::try_from(method.as_str()), Ok(method));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = PaymentStatus::try_from("Chargeback").unwrap_err();
        assert_eq!(err.to_string(), "unknown payment status `Chargeback`");
    }
}
