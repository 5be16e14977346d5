//! The flat CSV files exchanged between the generation and load steps.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::Trim;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::Dataset;
use crate::domain::order::Order;
use crate::domain::payment::Payment;

pub const CATEGORIES_FILE: &str = "categories.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const ORDERS_FILE: &str = "orders.csv";
pub const ORDER_ITEMS_FILE: &str = "order_items.csv";
pub const PAYMENTS_FILE: &str = "payments.csv";

/// Errors raised while reading or writing dataset files.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to create data directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("input file {} not found; run the generator first", .0.display())]
    Missing(PathBuf),
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: csv::Error },
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: csv::Error },
    #[error("failed to remove {}: {source}", .path.display())]
    Remove { path: PathBuf, source: io::Error },
}

pub type FileResult<T> = Result<T, FileError>;

/// Location of the six entity files inside one data directory.
#[derive(Debug, Clone)]
pub struct DatasetFiles {
    dir: PathBuf,
}

impl DatasetFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Whether a payments file has been produced.
    pub fn has_payments(&self) -> bool {
        self.path(PAYMENTS_FILE).is_file()
    }

    /// Write every entity except payments, in generation order.
    pub fn write_dataset(&self, dataset: &Dataset) -> FileResult<()> {
        self.ensure_dir()?;
        write_records(&self.path(CATEGORIES_FILE), &dataset.categories)?;
        write_records(&self.path(PRODUCTS_FILE), &dataset.products)?;
        write_records(&self.path(CUSTOMERS_FILE), &dataset.customers)?;
        write_records(&self.path(ORDERS_FILE), &dataset.orders)?;
        write_records(&self.path(ORDER_ITEMS_FILE), &dataset.order_items)?;
        Ok(())
    }

    pub fn write_payments(&self, payments: &[Payment]) -> FileResult<()> {
        self.ensure_dir()?;
        write_records(&self.path(PAYMENTS_FILE), payments)
    }

    /// Delete `payments.csv`; returns whether a file was there.
    pub fn remove_payments(&self) -> FileResult<bool> {
        let path = self.path(PAYMENTS_FILE);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(FileError::Remove { path, source }),
        }
    }

    pub fn read_orders(&self) -> FileResult<Vec<Order>> {
        read_records(&self.path(ORDERS_FILE))
    }

    /// Read the full dataset; the payments file is optional.
    pub fn read_dataset(&self) -> FileResult<Dataset> {
        let payments = if self.has_payments() {
            read_records(&self.path(PAYMENTS_FILE))?
        } else {
            Vec::new()
        };

        Ok(Dataset {
            categories: read_records(&self.path(CATEGORIES_FILE))?,
            products: read_records(&self.path(PRODUCTS_FILE))?,
            customers: read_records(&self.path(CUSTOMERS_FILE))?,
            orders: read_records(&self.path(ORDERS_FILE))?,
            order_items: read_records(&self.path(ORDER_ITEMS_FILE))?,
            payments,
        })
    }

    fn ensure_dir(&self) -> FileResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| FileError::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> FileResult<()> {
    let write_err = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    for record in records {
        writer.serialize(record).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|err| write_err(csv::Error::from(err)))?;

    log::debug!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

fn read_records<T: DeserializeOwned>(path: &Path) -> FileResult<Vec<T>> {
    if !path.is_file() {
        return Err(FileError::Missing(path.to_path_buf()));
    }
    let read_err = |source| FileError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(read_err)?;

    let records = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(read_err)?;

    log::debug!("read {} rows from {}", records.len(), path.display());
    Ok(records)
}
