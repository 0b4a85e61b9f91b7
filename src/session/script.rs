use tracing::debug;

use super::policy::ErrorPolicy;
use crate::domain::AmountType;
use crate::engine::{Ledger, LedgerError};
use crate::io::{Command, IoError};
use crate::storage::LedgerStore;

/// Replays teller commands against one ledger
pub struct ScriptSession<A, S, P>
where
    A: AmountType,
    S: LedgerStore<A>,
    P: ErrorPolicy,
{
    ledger: Ledger<A, S>,
    error_policy: P,
    applied: usize,
}

impl<A, S, P> ScriptSession<A, S, P>
where
    A: AmountType,
    S: LedgerStore<A>,
    P: ErrorPolicy,
{
    /// Create a new replay session
    pub fn new(ledger: Ledger<A, S>, error_policy: P) -> Self {
        Self {
            ledger,
            error_policy,
            applied: 0,
        }
    }

    /// Apply a single command to the ledger
    pub fn apply(&mut self, command: Command<A>) -> Result<(), LedgerError> {
        debug!(account = command.account_number(), "Applying command");

        match command {
            Command::Register {
                account_number,
                pin,
                owner_name,
                initial_balance,
            } => self
                .ledger
                .register_account(account_number, pin, owner_name, initial_balance),
            Command::Deposit {
                account_number,
                pin,
                amount,
            } => self.ledger.deposit_cash(account_number, pin, amount),
            Command::Withdrawal {
                account_number,
                pin,
                amount,
            } => self.ledger.withdraw_cash(account_number, pin, amount),
            Command::Print {
                account_number,
                pin,
                path,
            } => self.ledger.print_ledger(path, account_number, pin),
        }
    }

    /// Replay every command in order
    /// Returns true if the script ran to the end (errors skipped per policy)
    /// Returns false if processing was aborted due to error policy
    pub fn run<I>(&mut self, commands: I) -> bool
    where
        I: IntoIterator<Item = Result<Command<A>, IoError>>,
    {
        for result in commands {
            match result {
                Ok(command) => match self.apply(command) {
                    Ok(()) => self.applied += 1,
                    Err(e) => {
                        if !self.error_policy.handle_ledger_error(e) {
                            return false;
                        }
                    }
                },
                Err(e) => {
                    if !self.error_policy.handle_io_error(e) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Number of commands that succeeded so far
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Get a reference to the underlying ledger
    pub fn ledger(&self) -> &Ledger<A, S> {
        &self.ledger
    }

    /// Consume the session and return the ledger
    pub fn into_ledger(self) -> Ledger<A, S> {
        self.ledger
    }
}
