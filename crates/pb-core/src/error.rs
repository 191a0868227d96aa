//! Framework error type.
//!
//! Sub-crates define their own error enums (`BehaviorError`, `RegistryError`,
//! …) and wrap `PbError` where configuration or parsing is involved.

use thiserror::Error;

/// The base error type for `pb-core` and configuration handling in sub-crates.
#[derive(Debug, Error)]
pub enum PbError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `pb-*` crates.
pub type PbResult<T> = Result<T, PbError>;
