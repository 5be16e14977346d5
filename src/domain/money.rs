//! Fixed-point money helpers.
//!
//! Amounts are stored as a signed count of cents everywhere in the crate and
//! only become decimal text at the CSV boundary, where they are rendered with
//! exactly two fractional digits (`1234` <-> `"12.34"`).

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Fractional digits of every amount.
const CENTS_SCALE: u32 = 2;

/// Errors produced when parsing decimal amounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("`{0}` is not a decimal amount")]
    Malformed(String),
    #[error("`{0}` has more than two fractional digits")]
    TooPrecise(String),
    #[error("`{0}` does not fit into a cents amount")]
    Overflow(String),
}

/// Cents as a two-digit decimal.
pub fn to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, CENTS_SCALE)
}

/// Formats a cents amount as a decimal string with two fractional digits.
pub fn format_cents(cents: i64) -> String {
    to_decimal(cents).to_string()
}

/// Parses a decimal string such as `12.3`, `12.34` or `12` into cents.
pub fn parse_cents(value: &str) -> Result<i64, MoneyError> {
    let amount = Decimal::from_str_exact(value.trim())
        .map_err(|_| MoneyError::Malformed(value.to_string()))?;
    if amount.scale() > CENTS_SCALE {
        return Err(MoneyError::TooPrecise(value.to_string()));
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| MoneyError::Overflow(value.to_string()))
}

/// Display adapter used by the report renderer.
pub struct Cents(pub i64);

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_cents(self.0))
    }
}

/// `serde(with = ...)` module rendering cents as decimal text.
pub mod decimal {
    use super::*;

    pub fn serialize<S>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&to_decimal(*cents), serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_cents(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_with_two_digits() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(99999), "999.99");
        assert_eq!(format_cents(-1250), "-12.50");
    }

    #[test]
    fn parses_decimal_text() {
        assert_eq!(parse_cents("12.34"), Ok(1234));
        assert_eq!(parse_cents("12.3"), Ok(1230));
        assert_eq!(parse_cents("12"), Ok(1200));
        assert_eq!(parse_cents(" 0.07 "), Ok(7));
        assert_eq!(parse_cents("-3.10"), Ok(-310));
    }

    #[test]
    fn rejects_bad_amounts() {
        assert!(matches!(parse_cents("abc"), Err(MoneyError::Malformed(_))));
        assert!(matches!(parse_cents(""), Err(MoneyError::Malformed(_))));
        assert!(matches!(parse_cents("1.234"), Err(MoneyError::TooPrecise(_))));
        assert!(matches!(
            parse_cents("99999999999999999999"),
            Err(MoneyError::Overflow(_))
        ));
    }

    #[test]
    fn serializes_as_decimal_string() {
        #[derive(Serialize)]
        struct Row {
            #[serde(with = "decimal")]
            amount: i64,
        }

        let json = serde_json::to_string(&Row { amount: 1050 }).unwrap();

        assert_eq!(json, r#"{"amount":"10.50"}"#);
    }

    #[test]
    fn display_respects_width() {
        assert_eq!(format!("{:>8}", Cents(1050)), "   10.50");
    }
}
