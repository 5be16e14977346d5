//! Seeded synthetic data generators.
//!
//! One `StdRng` is seeded per run and passed by `&mut` through every step in
//! dependency order (categories, products, customers, orders), so the same
//! seed and configuration always produce the same dataset.

pub mod catalog;
pub mod customers;
pub mod integrity;
pub mod orders;
pub mod payments;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GenerationConfig, PaymentPolicy};
use crate::domain::Dataset;
use crate::domain::order::Order;
use crate::domain::payment::Payment;
use integrity::{IntegrityError, verify_dataset};

/// Generate categories, products, customers, orders and order items.
///
/// The returned dataset has no payments; those come from
/// [`generate_payment_phase`]. Fails if the dataset breaks any invariant,
/// which would indicate a generator bug.
pub fn generate_dataset(config: &GenerationConfig) -> Result<Dataset, IntegrityError> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let categories = catalog::generate_categories(config);
    let products = catalog::generate_products(&mut rng, config, &categories);
    let customers = customers::generate_customers(&mut rng, config);
    let generated = orders::generate_orders(&mut rng, config, &customers, &products);

    let dataset = Dataset {
        categories,
        products,
        customers,
        orders: generated.orders,
        order_items: generated.items,
        payments: Vec::new(),
    };
    verify_dataset(&dataset)?;

    log::debug!(
        "generated {} categories, {} products, {} customers, {} orders, {} order items",
        dataset.categories.len(),
        dataset.products.len(),
        dataset.customers.len(),
        dataset.orders.len(),
        dataset.order_items.len()
    );
    Ok(dataset)
}

/// Generate the payments of `orders` with a generator seeded from `policy`.
pub fn generate_payment_phase(policy: &PaymentPolicy, orders: &[Order]) -> Vec<Payment> {
    let mut rng = StdRng::seed_from_u64(policy.seed);
    payments::generate_payments(&mut rng, policy, orders)
}

/// Uniform date in `[start, end]`; collapses to `start` when the range is inverted.
pub(crate) fn random_date_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }
    start + Duration::days(rng.gen_range(0..=span))
}
