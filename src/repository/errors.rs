use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::order::UnknownVariant;

/// Errors surfaced by the store layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store file or its schema does not exist.
    #[error("store not found at {}; run the loader first", .0.display())]
    StoreMissing(PathBuf),
    /// A stale store file could not be removed before a rebuild.
    #[error("failed to remove {}: {source}", .path.display())]
    Reset { path: PathBuf, source: io::Error },
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("migration failed: {0}")]
    Migration(String),
    /// A row was rejected by a key or check constraint; the table load was rolled back.
    #[error("{table} row {row_id} rejected: {message}")]
    ConstraintViolation {
        table: &'static str,
        row_id: i32,
        message: String,
    },
    /// A stored label no longer maps onto a domain enum.
    #[error("invalid stored value: {0}")]
    InvalidValue(#[from] UnknownVariant),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
