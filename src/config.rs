//! Validated knobs for the generation phases.

use chrono::NaiveDate;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::generator::catalog::CATEGORY_NAMES;

/// Default seed shared by every phase of a run.
pub const DEFAULT_SEED: u64 = 42;

/// Upper bound for the category count; names come from a fixed catalogue.
const MAX_CATEGORIES: usize = CATEGORY_NAMES.len();

/// Row ids are `i32`, so no table may outgrow it.
const MAX_ROWS: usize = i32::MAX as usize;

/// Date every relative range is anchored to, so output never depends on the wall clock.
pub fn default_as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
}

/// Errors raised when a configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Validation failures from the `validator` crate.
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Target counts and ranges for the reference, customer and order generators.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_item_bounds"))]
pub struct GenerationConfig {
    /// Seed of the run's random generator.
    pub seed: u64,
    /// Last date any generated record may carry.
    pub as_of: NaiveDate,
    #[validate(range(min = 1, max = MAX_CATEGORIES))]
    pub categories: usize,
    #[validate(range(min = 1, max = MAX_ROWS))]
    pub products: usize,
    #[validate(range(min = 1, max = MAX_ROWS))]
    pub customers: usize,
    #[validate(range(max = MAX_ROWS))]
    pub orders: usize,
    #[validate(range(min = 1))]
    pub min_order_items: usize,
    #[validate(range(min = 1))]
    pub max_order_items: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            as_of: default_as_of(),
            categories: 15,
            products: 200,
            customers: 500,
            orders: 1000,
            min_order_items: 1,
            max_order_items: 5,
        }
    }
}

impl GenerationConfig {
    /// Run validation, handing the config back when it is usable.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}

fn validate_item_bounds(config: &GenerationConfig) -> Result<(), ValidationError> {
    if config.min_order_items > config.max_order_items {
        return Err(ValidationError::new("order_item_bounds")
            .with_message("min_order_items must not exceed max_order_items".into()));
    }
    let max_line_items = config.orders.checked_mul(config.max_order_items);
    if max_line_items.is_none_or(|items| items > MAX_ROWS) {
        return Err(ValidationError::new("order_item_rows")
            .with_message("orders times max_order_items must fit an order item id".into()));
    }
    Ok(())
}

/// How many payment attempts an order receives.
///
/// Most orders are paid in one attempt whose status follows a fixed weighting.
/// With probability `retry_rate` an order instead gets between two and
/// `max_attempts` attempts: all but the last fail and the last completes.
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_retry_rate"))]
pub struct PaymentPolicy {
    /// Seed of the payment phase's random generator.
    pub seed: u64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub retry_rate: f64,
    #[validate(range(min = 1))]
    pub max_attempts: u32,
}

impl Default for PaymentPolicy {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            retry_rate: 0.05,
            max_attempts: 2,
        }
    }
}

impl PaymentPolicy {
    /// Run validation, handing the policy back when it is usable.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}

// NaN slips through range checks.
fn validate_retry_rate(policy: &PaymentPolicy) -> Result<(), ValidationError> {
    if !policy.retry_rate.is_finite() {
        return Err(ValidationError::new("retry_rate")
            .with_message("retry_rate must be a number between 0 and 1".into()));
    }
    Ok(())
}
