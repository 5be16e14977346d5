use crate::config::GenerationConfig;
use crate::domain::Dataset;
use crate::files::{DatasetFiles, PAYMENTS_FILE};
use crate::generator::generate_dataset;
use crate::services::ServiceResult;

/// Generate categories, products, customers and orders and write their CSV files.
///
/// Nothing is written when the configuration is invalid or the generated data
/// breaks an invariant. Payments belong to the orders they were generated
/// for, so an existing payments file is removed.
pub fn generate(config: GenerationConfig, files: &DatasetFiles) -> ServiceResult<Dataset> {
    let config = config.validated()?;
    log::info!(
        "generating dataset with seed {} as of {}",
        config.seed,
        config.as_of
    );

    let dataset = generate_dataset(&config)?;
    files.write_dataset(&dataset)?;
    if files.remove_payments()? {
        log::info!("removed {PAYMENTS_FILE} of the previous orders; run payments again");
    }

    log::info!(
        "wrote {} categories, {} products, {} customers, {} orders and {} order items to {}",
        dataset.categories.len(),
        dataset.products.len(),
        dataset.customers.len(),
        dataset.orders.len(),
        dataset.order_items.len(),
        files.dir().display()
    );
    Ok(dataset)
}
