pub mod account;
pub mod amount;
pub mod error;
pub mod key;
pub mod operations;
pub mod transaction;

// Re-export commonly used types
pub use account::Account;
pub use amount::{AmountType, FixedPoint};
pub use error::DomainError;
pub use key::AccountKey;
pub use operations::{apply_deposit, apply_withdrawal, validate_amount};
pub use transaction::{LedgerEntry, TransactionKind};
