//! Prelude module for convenient imports
//!
//! Import everything you need with: `use atm::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, AccountKey, AmountType, DomainError, FixedPoint, LedgerEntry, TransactionKind,
};

// Storage types
pub use crate::storage::{
    ConcurrentLedgerStore, InMemoryLedgerStore, LedgerStore, StorageError, TransactionLog,
};

// Engine types
pub use crate::engine::{ErrorKind, Ledger, LedgerError, TellerLedger};

// IO types
pub use crate::io::{
    Command, CsvCommandReader, IoError, RawCommandRecord, export_ledger, write_ledger,
    write_summary,
};

// Session types
pub use crate::session::{AbortOnError, ErrorPolicy, ScriptSession, SilentSkip, SkipErrors};

// App types
pub use crate::app::{AppError, CliApp, Config};
