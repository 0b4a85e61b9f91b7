use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::error::StorageError;
use super::traits::{LedgerStore, TransactionLog};
use crate::domain::{Account, AccountKey, AmountType, DomainError, LedgerEntry};

/// Single-owner ledger storage backed by two hash maps
#[derive(Debug, Clone)]
pub struct InMemoryLedgerStore<A: AmountType> {
    accounts: HashMap<AccountKey, Account<A>>,
    transactions: HashMap<AccountKey, TransactionLog>,
}

impl<A: AmountType> InMemoryLedgerStore<A> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            transactions: HashMap::new(),
        }
    }

    /// All registered accounts
    pub fn accounts(&self) -> &HashMap<AccountKey, Account<A>> {
        &self.accounts
    }

    /// All transaction logs
    pub fn transactions(&self) -> &HashMap<AccountKey, TransactionLog> {
        &self.transactions
    }

    /// Mutable access to the transaction logs
    pub fn transactions_mut(&mut self) -> &mut HashMap<AccountKey, TransactionLog> {
        &mut self.transactions
    }
}

impl<A: AmountType> Default for InMemoryLedgerStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AmountType> LedgerStore<A> for InMemoryLedgerStore<A> {
    fn register(&mut self, key: AccountKey, account: Account<A>) -> Result<(), StorageError> {
        match self.accounts.entry(key) {
            Entry::Occupied(_) => Err(StorageError::AccountExists(key)),
            Entry::Vacant(e) => {
                e.insert(account);
                self.transactions.insert(key, TransactionLog::new());
                Ok(())
            }
        }
    }

    fn try_update<F>(
        &mut self,
        key: AccountKey,
        update_fn: F,
    ) -> Result<LedgerEntry<A>, StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<LedgerEntry<A>, DomainError>,
    {
        let account = self
            .accounts
            .get_mut(&key)
            .ok_or(StorageError::AccountNotFound(key))?;

        let entry = update_fn(account)?;
        self.transactions
            .entry(key)
            .or_default()
            .push(entry.to_string());

        Ok(entry)
    }

    fn append(&mut self, key: AccountKey, line: String) -> Result<(), StorageError> {
        if !self.accounts.contains_key(&key) {
            return Err(StorageError::AccountNotFound(key));
        }
        self.transactions.entry(key).or_default().push(line);
        Ok(())
    }

    fn account(&self, key: AccountKey) -> Option<Account<A>> {
        self.accounts.get(&key).cloned()
    }

    fn transaction_log(&self, key: AccountKey) -> Option<TransactionLog> {
        self.transactions.get(&key).cloned()
    }

    fn contains(&self, key: AccountKey) -> bool {
        self.accounts.contains_key(&key)
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
