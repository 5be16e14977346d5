use std::path::Path;

use serde::Serialize;

use crate::db::rebuild_store;
use crate::domain::Dataset;
use crate::files::DatasetFiles;
use crate::generator::integrity::find_violations;
use crate::repository::{DatasetWriter, DieselRepository};
use crate::services::ServiceResult;

/// Rows inserted per table by one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub categories: usize,
    pub products: usize,
    pub customers: usize,
    pub orders: usize,
    pub order_items: usize,
    pub payments: usize,
}

/// Insert `dataset` table by table in dependency order.
///
/// Arithmetic inconsistencies are only logged; the store's constraints decide
/// what is accepted. A rejected table stops the load, leaving earlier tables in
/// place.
pub fn load_dataset<W>(repo: &W, dataset: &Dataset) -> ServiceResult<LoadSummary>
where
    W: DatasetWriter + ?Sized,
{
    for violation in find_violations(dataset) {
        log::warn!("{violation}");
    }

    let summary = LoadSummary {
        categories: repo.insert_categories(&dataset.categories)?,
        products: repo.insert_products(&dataset.products)?,
        customers: repo.insert_customers(&dataset.customers)?,
        orders: repo.insert_orders(&dataset.orders)?,
        order_items: repo.insert_order_items(&dataset.order_items)?,
        payments: if dataset.payments.is_empty() {
            log::info!("no payments to load");
            0
        } else {
            repo.insert_payments(&dataset.payments)?
        },
    };

    log::info!(
        "loaded {} categories, {} products, {} customers, {} orders, {} order items, {} payments",
        summary.categories,
        summary.products,
        summary.customers,
        summary.orders,
        summary.order_items,
        summary.payments
    );
    Ok(summary)
}

/// Rebuild the store at `store_path` from the CSV files in `files`.
///
/// Every input file is read before the old store is removed, so a missing
/// file leaves an existing store untouched.
pub fn load_files(files: &DatasetFiles, store_path: &Path) -> ServiceResult<LoadSummary> {
    let dataset = files.read_dataset()?;
    if !files.has_payments() {
        log::warn!("no payments file in {}; loading without payments", files.dir().display());
    }

    let pool = rebuild_store(store_path)?;
    let repo = DieselRepository::new(pool);
    load_dataset(&repo, &dataset)
}
