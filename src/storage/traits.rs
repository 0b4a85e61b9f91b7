use super::error::StorageError;
use crate::domain::{Account, AccountKey, AmountType, DomainError, LedgerEntry};

/// Append-only, human-readable history of one account
pub type TransactionLog = Vec<String>;

/// Trait for ledger storage backends
///
/// Every registered key owns exactly one account and one log; the log is
/// created empty by `register` and only grows through `try_update` or
/// `append`.
pub trait LedgerStore<A: AmountType>: Send + Sync {
    /// Insert a new account with an empty log; fails if the key is taken
    fn register(&mut self, key: AccountKey, account: Account<A>) -> Result<(), StorageError>;

    /// Atomic read-modify-write with validation
    ///
    /// On success the returned entry has already been appended to the
    /// account's log. On failure neither the balance nor the log changes.
    fn try_update<F>(
        &mut self,
        key: AccountKey,
        update_fn: F,
    ) -> Result<LedgerEntry<A>, StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<LedgerEntry<A>, DomainError>;

    /// Append a raw line to an existing account's log
    fn append(&mut self, key: AccountKey, line: String) -> Result<(), StorageError>;

    /// Get an account by key (returns clone, not reference)
    fn account(&self, key: AccountKey) -> Option<Account<A>>;

    /// Get an account's log by key (returns clone, not reference)
    fn transaction_log(&self, key: AccountKey) -> Option<TransactionLog>;

    /// Check if an account exists
    fn contains(&self, key: AccountKey) -> bool;

    /// Number of registered accounts
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
