use crate::config::PaymentPolicy;
use crate::domain::payment::Payment;
use crate::files::{DatasetFiles, PAYMENTS_FILE};
use crate::generator::generate_payment_phase;
use crate::repository::DatasetWriter;
use crate::services::ServiceResult;

/// Generate payments for the orders on disk, write `payments.csv` and refresh
/// the store's payments table when a store is available.
///
/// `store` is `None` when no store has been loaded yet; the file is still
/// written so the next load picks it up.
pub fn generate_payments<W>(
    policy: PaymentPolicy,
    files: &DatasetFiles,
    store: Option<&W>,
) -> ServiceResult<Vec<Payment>>
where
    W: DatasetWriter + ?Sized,
{
    let policy = policy.validated()?;

    let orders = files.read_orders()?;
    log::info!("creating payments for {} orders", orders.len());

    let payments = generate_payment_phase(&policy, &orders);
    files.write_payments(&payments)?;
    log::info!(
        "wrote {} payments to {}",
        payments.len(),
        files.path(PAYMENTS_FILE).display()
    );

    match store {
        Some(store) => {
            let stored = store.replace_payments(&payments)?;
            log::info!("imported {stored} payments into the store");
        }
        None => log::warn!("no store loaded yet; run load to import {PAYMENTS_FILE}"),
    }

    Ok(payments)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::GenerationConfig;
    use crate::files::FileError;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockDatasetWriter;
    use crate::services::ServiceError;
    use crate::services::generate::generate;

    fn generated_files(dir: &TempDir) -> DatasetFiles {
        let files = DatasetFiles::new(dir.path());
        let config = GenerationConfig {
            products: 20,
            customers: 10,
            orders: 25,
            ..GenerationConfig::default()
        };
        generate(config, &files).unwrap();
        files
    }

    #[test]
    fn replaces_stored_payments() {
        let dir = TempDir::new().unwrap();
        let files = generated_files(&dir);

        let mut store = MockDatasetWriter::new();
        store
            .expect_replace_payments()
            .times(1)
            .withf(|payments| payments.len() >= 25)
            .returning(|payments| Ok(payments.len()));

        let payments =
            generate_payments(PaymentPolicy::default(), &files, Some(&store)).unwrap();

        assert!(files.has_payments());
        assert_eq!(files.read_dataset().unwrap().payments, payments);
    }

    #[test]
    fn writes_file_without_store() {
        let dir = TempDir::new().unwrap();
        let files = generated_files(&dir);

        let payments =
            generate_payments::<MockDatasetWriter>(PaymentPolicy::default(), &files, None)
                .unwrap();

        assert!(!payments.is_empty());
        assert!(files.has_payments());
    }

    #[test]
    fn store_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let files = generated_files(&dir);

        let mut store = MockDatasetWriter::new();
        store.expect_replace_payments().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation {
                table: "payments",
                row_id: 1,
                message: "FOREIGN KEY constraint failed".to_string(),
            })
        });

        let result = generate_payments(PaymentPolicy::default(), &files, Some(&store));

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConstraintViolation { row_id: 1, .. }))
        ));
    }

    #[test]
    fn nan_retry_rate_is_rejected_before_generation() {
        let dir = TempDir::new().unwrap();
        let files = generated_files(&dir);
        let policy = PaymentPolicy {
            retry_rate: f64::NAN,
            ..PaymentPolicy::default()
        };

        let result = generate_payments::<MockDatasetWriter>(policy, &files, None);

        assert!(matches!(result, Err(ServiceError::Config(_))));
        assert!(!files.has_payments());
    }

    #[test]
    fn missing_orders_file_fails() {
        let dir = TempDir::new().unwrap();
        let files = DatasetFiles::new(dir.path());

        let result =
            generate_payments::<MockDatasetWriter>(PaymentPolicy::default(), &files, None);

        assert!(matches!(
            result,
            Err(ServiceError::File(FileError::Missing(_)))
        ));
        assert!(!files.has_payments());
    }
}
