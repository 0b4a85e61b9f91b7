use thiserror::Error;

use crate::domain::{AccountKey, DomainError};

/// Storage-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Account {0} already exists")]
    AccountExists(AccountKey),

    #[error("Account {0} not found")]
    AccountNotFound(AccountKey),

    #[error("Domain error: {0}")]
    DomainError(#[from] DomainError),
}
