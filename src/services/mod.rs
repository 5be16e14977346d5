//! Orchestration of the command steps: generate, payments, load and report.

use thiserror::Error;

use crate::config::ConfigError;
use crate::files::FileError;
use crate::generator::integrity::IntegrityError;
use crate::repository::errors::RepositoryError;

pub mod generate;
pub mod load;
pub mod payments;
pub mod reports;

/// Failure of one command step.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("generated data is inconsistent: {0}")]
    Integrity(#[from] IntegrityError),
    #[error(transparent)]
    File(#[from] FileError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
