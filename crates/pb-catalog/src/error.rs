//! Error types for pb-catalog.

use pb_behavior::BehaviorError;
use pb_core::PbError;
use pb_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Core(#[from] PbError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error("rate table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;
