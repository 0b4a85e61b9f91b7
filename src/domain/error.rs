use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Insufficient funds for withdrawal")]
    InsufficientFunds,

    #[error("Arithmetic overflow")]
    Overflow,
}
