use pb_core::PbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// `create` was called with a key that has no factory.
    #[error("{registry}: no behavior registered under key {key:?}")]
    UnknownKey {
        registry: String,
        key:      String,
    },

    /// `register` was called with an existing key under `DuplicatePolicy::Reject`.
    #[error("{registry}: key {key:?} is already registered")]
    DuplicateKey {
        registry: String,
        key:      String,
    },

    #[error(transparent)]
    Config(#[from] PbError),
}

impl RegistryError {
    /// The offending key, if the error concerns one.
    pub fn key(&self) -> Option<&str> {
        match self {
            RegistryError::UnknownKey { key, .. } | RegistryError::DuplicateKey { key, .. } => {
                Some(key)
            }
            RegistryError::Config(_) => None,
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;
