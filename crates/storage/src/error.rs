use thiserror::Error;

use stockwise_core::DomainError;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("stored value is invalid: {0}")]
    Invalid(#[from] DomainError),

    #[error("storage lock poisoned")]
    Poisoned,
}
