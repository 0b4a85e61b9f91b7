use std::collections::HashMap;
use std::sync::Arc;

use dashmap::{DashMap, Entry};

use super::error::StorageError;
use super::traits::{LedgerStore, TransactionLog};
use crate::domain::{Account, AccountKey, AmountType, DomainError, LedgerEntry};

/// An account together with its log, guarded by the same shard lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord<A: AmountType> {
    pub account: Account<A>,
    pub log: TransactionLog,
}

/// Concurrent in-memory ledger storage using DashMap
///
/// Balance updates hold the entry's write lock across validation, mutation
/// and log append, so concurrent withdrawals cannot overdraw an account.
pub struct ConcurrentLedgerStore<A: AmountType> {
    records: DashMap<AccountKey, AccountRecord<A>>,
}

impl<A: AmountType> ConcurrentLedgerStore<A> {
    /// Create a new empty concurrent store
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Register through a shared reference
    pub fn insert_account(&self, key: AccountKey, account: Account<A>) -> Result<(), StorageError> {
        match self.records.entry(key) {
            Entry::Occupied(_) => Err(StorageError::AccountExists(key)),
            Entry::Vacant(e) => {
                e.insert(AccountRecord {
                    account,
                    log: TransactionLog::new(),
                });
                Ok(())
            }
        }
    }

    /// Validated update through a shared reference
    pub fn update<F>(&self, key: AccountKey, update_fn: F) -> Result<LedgerEntry<A>, StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<LedgerEntry<A>, DomainError>,
    {
        let mut record = self
            .records
            .get_mut(&key)
            .ok_or(StorageError::AccountNotFound(key))?;

        let entry = update_fn(&mut record.account)?;
        record.log.push(entry.to_string());
        Ok(entry)
    }

    /// Append a raw log line through a shared reference
    pub fn append_line(&self, key: AccountKey, line: String) -> Result<(), StorageError> {
        let mut record = self
            .records
            .get_mut(&key)
            .ok_or(StorageError::AccountNotFound(key))?;
        record.log.push(line);
        Ok(())
    }

    /// Owned copy of every account
    pub fn accounts_snapshot(&self) -> HashMap<AccountKey, Account<A>> {
        self.records
            .iter()
            .map(|r| (*r.key(), r.value().account.clone()))
            .collect()
    }

    /// Owned copy of every transaction log
    pub fn transactions_snapshot(&self) -> HashMap<AccountKey, TransactionLog> {
        self.records
            .iter()
            .map(|r| (*r.key(), r.value().log.clone()))
            .collect()
    }
}

impl<A: AmountType> Default for ConcurrentLedgerStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AmountType> LedgerStore<A> for ConcurrentLedgerStore<A> {
    fn register(&mut self, key: AccountKey, account: Account<A>) -> Result<(), StorageError> {
        self.insert_account(key, account)
    }

    fn try_update<F>(
        &mut self,
        key: AccountKey,
        update_fn: F,
    ) -> Result<LedgerEntry<A>, StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<LedgerEntry<A>, DomainError>,
    {
        self.update(key, update_fn)
    }

    fn append(&mut self, key: AccountKey, line: String) -> Result<(), StorageError> {
        self.append_line(key, line)
    }

    fn account(&self, key: AccountKey) -> Option<Account<A>> {
        self.records.get(&key).map(|r| r.account.clone())
    }

    fn transaction_log(&self, key: AccountKey) -> Option<TransactionLog> {
        self.records.get(&key).map(|r| r.log.clone())
    }

    fn contains(&self, key: AccountKey) -> bool {
        self.records.contains_key(&key)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// Lets several ledgers (one per thread) share the same records
impl<A: AmountType> LedgerStore<A> for Arc<ConcurrentLedgerStore<A>> {
    fn register(&mut self, key: AccountKey, account: Account<A>) -> Result<(), StorageError> {
        self.insert_account(key, account)
    }

    fn try_update<F>(
        &mut self,
        key: AccountKey,
        update_fn: F,
    ) -> Result<LedgerEntry<A>, StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<LedgerEntry<A>, DomainError>,
    {
        self.update(key, update_fn)
    }

    fn append(&mut self, key: AccountKey, line: String) -> Result<(), StorageError> {
        self.append_line(key, line)
    }

    fn account(&self, key: AccountKey) -> Option<Account<A>> {
        (**self).account(key)
    }

    fn transaction_log(&self, key: AccountKey) -> Option<TransactionLog> {
        (**self).transaction_log(key)
    }

    fn contains(&self, key: AccountKey) -> bool {
        (**self).contains(key)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixedPoint, operations};
    use std::thread;

    const KEY: AccountKey = AccountKey::new(4444, 1234);

    #[test]
    fn insert_creates_record_with_empty_log() {
        let store = ConcurrentLedgerStore::new();
        store
            .insert_account(KEY, Account::new("User D", FixedPoint::from_units(100)))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.transaction_log(KEY), Some(TransactionLog::new()));
    }

    #[test]
    fn duplicate_insert_fails() {
        let store = ConcurrentLedgerStore::new();
        store
            .insert_account(KEY, Account::new("User D", FixedPoint::from_units(100)))
            .unwrap();

        let result = store.insert_account(KEY, Account::new("Other", FixedPoint::zero()));

        assert_eq!(result, Err(StorageError::AccountExists(KEY)));
        assert_eq!(store.account(KEY).unwrap().owner_name(), "User D");
    }

    #[test]
    fn update_logs_entry() {
        let store = ConcurrentLedgerStore::new();
        store
            .insert_account(KEY, Account::new("User D", FixedPoint::from_units(100)))
            .unwrap();

        store
            .update(KEY, |acc| operations::apply_deposit(acc, FixedPoint::from_units(50)))
            .unwrap();

        assert_eq!(
            store.transactions_snapshot()[&KEY],
            vec!["Deposit - Amount: $50.00, Updated Balance: $150.00".to_string()]
        );
        assert_eq!(
            store.accounts_snapshot()[&KEY].balance(),
            FixedPoint::from_units(150)
        );
    }

    #[test]
    fn update_unknown_account_fails() {
        let store = ConcurrentLedgerStore::<FixedPoint>::new();

        let result = store.update(KEY, |acc| {
            operations::apply_deposit(acc, FixedPoint::from_units(1))
        });

        assert_eq!(result, Err(StorageError::AccountNotFound(KEY)));
    }

    #[test]
    fn concurrent_withdrawals_never_overdraw() {
        let store = Arc::new(ConcurrentLedgerStore::new());
        store
            .insert_account(KEY, Account::new("User D", FixedPoint::from_units(100)))
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .filter(|_| {
                            store
                                .update(KEY, |acc| {
                                    operations::apply_withdrawal(acc, FixedPoint::from_units(1))
                                })
                                .is_ok()
                        })
                        .count()
                })
            })
            .collect();

        let succeeded: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(succeeded, 100);
        assert_eq!(store.account(KEY).unwrap().balance(), FixedPoint::zero());
        assert_eq!(store.transaction_log(KEY).unwrap().len(), 100);
    }

    #[test]
    fn concurrent_registration_of_same_key_admits_one() {
        let store = Arc::new(ConcurrentLedgerStore::<FixedPoint>::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .insert_account(KEY, Account::new(format!("User {i}"), FixedPoint::zero()))
                        .is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(store.len(), 1);
    }
}
