use std::io;
use thiserror::Error;

use crate::engine::LedgerError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Script error: {0}")]
    Script(#[from] IoError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Script aborted after {applied} successful commands")]
    Aborted { applied: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            AppError::InvalidArguments("missing file".to_string()).to_string(),
            "Invalid arguments: missing file"
        );
        assert_eq!(
            AppError::Aborted { applied: 3 }.to_string(),
            "Script aborted after 3 successful commands"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");

        match AppError::from(io_err) {
            AppError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn ledger_error_conversion() {
        let ledger_err = LedgerError::Domain(DomainError::InsufficientFunds);

        match AppError::from(ledger_err) {
            AppError::Ledger(LedgerError::Domain(DomainError::InsufficientFunds)) => {}
            _ => panic!("Expected Ledger error variant"),
        }
    }
}
