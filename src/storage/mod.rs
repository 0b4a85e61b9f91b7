pub mod concurrent;
pub mod error;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use concurrent::{AccountRecord, ConcurrentLedgerStore};
pub use error::StorageError;
pub use memory::InMemoryLedgerStore;
pub use traits::{LedgerStore, TransactionLog};
