use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{AccountKey, DomainError};
use crate::storage::StorageError;

/// How a caller should read a ledger failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was malformed or named something that does not exist
    InvalidArgument,
    /// The request was well-formed but the account's state refused it
    Operational,
    /// The export file could not be written
    Resource,
}

/// Ledger service errors
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account {0} already exists")]
    DuplicateAccount(AccountKey),

    #[error("Account {0} not found")]
    AccountNotFound(AccountKey),

    #[error("Account {0} needs an owner name")]
    MissingOwnerName(AccountKey),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Failed to write ledger to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateAccount(_) | Self::AccountNotFound(_) | Self::MissingOwnerName(_) => {
                ErrorKind::InvalidArgument
            }
            Self::Domain(DomainError::InvalidAmount) => ErrorKind::InvalidArgument,
            Self::Domain(DomainError::InsufficientFunds | DomainError::Overflow) => {
                ErrorKind::Operational
            }
            Self::Io { .. } => ErrorKind::Resource,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InsufficientFunds))
    }
}

impl From<StorageError> for LedgerError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::AccountExists(key) => Self::DuplicateAccount(key),
            StorageError::AccountNotFound(key) => Self::AccountNotFound(key),
            StorageError::DomainError(e) => Self::Domain(e),
        }
    }
}
