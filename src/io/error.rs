use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// IO-level errors for teller script parsing and summary output
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid command type: {0}")]
    InvalidCommandType(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            IoError::InvalidCommandType("transfer".to_string()).to_string(),
            "Invalid command type: transfer"
        );
        assert_eq!(
            IoError::MissingField("amount".to_string()).to_string(),
            "Missing required field: amount"
        );
        assert_eq!(
            IoError::InvalidAmount("xyz".to_string()).to_string(),
            "Invalid amount format: xyz"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");

        match IoError::from(io_err) {
            IoError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }
}
