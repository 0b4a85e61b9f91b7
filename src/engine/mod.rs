pub mod error;
pub mod ledger;

// Re-export commonly used types
pub use error::{ErrorKind, LedgerError};
pub use ledger::{Ledger, TellerLedger};
