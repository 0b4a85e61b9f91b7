use tracing::{error, warn};

use crate::engine::LedgerError;
use crate::io::IoError;

/// Policy for handling errors while replaying a teller script
pub trait ErrorPolicy {
    /// Handle an IO error (CSV parsing, reading)
    /// Return true to continue processing, false to abort
    fn handle_io_error(&self, error: IoError) -> bool;

    /// Handle a ledger error (refused or malformed operation)
    /// Return true to continue processing, false to abort
    fn handle_ledger_error(&self, error: LedgerError) -> bool;
}

/// Skip errors and continue processing (logged as warnings)
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn handle_io_error(&self, error: IoError) -> bool {
        warn!(%error, "Skipping unreadable command");
        true
    }

    fn handle_ledger_error(&self, error: LedgerError) -> bool {
        warn!(%error, kind = ?error.kind(), "Skipping refused command");
        true
    }
}

/// Abort on first error
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortOnError;

impl ErrorPolicy for AbortOnError {
    fn handle_io_error(&self, error: IoError) -> bool {
        error!(%error, "Aborting on unreadable command");
        false
    }

    fn handle_ledger_error(&self, error: LedgerError) -> bool {
        error!(%error, kind = ?error.kind(), "Aborting on refused command");
        false
    }
}

/// Silent error policy - skip errors without logging
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSkip;

impl ErrorPolicy for SilentSkip {
    fn handle_io_error(&self, _error: IoError) -> bool {
        true
    }

    fn handle_ledger_error(&self, _error: LedgerError) -> bool {
        true
    }
}
