use std::collections::HashMap;
use std::marker::PhantomData;
use std::path::Path;

use tracing::{debug, info, warn};

use super::error::LedgerError;
use crate::domain::{
    Account, AccountKey, AmountType, DomainError, FixedPoint, apply_deposit, apply_withdrawal,
    validate_amount,
};
use crate::io::export_ledger;
use crate::storage::{InMemoryLedgerStore, LedgerStore, TransactionLog};

/// Teller ledger: account registration, cash movements and ledger export
///
/// All state lives in the store owned by this instance; two ledgers never
/// see each other's accounts.
pub struct Ledger<A, S>
where
    A: AmountType,
    S: LedgerStore<A>,
{
    store: S,
    _phantom: PhantomData<A>,
}

/// Single-owner ledger over cents, the common case
pub type TellerLedger = Ledger<FixedPoint, InMemoryLedgerStore<FixedPoint>>;

impl<A, S> Ledger<A, S>
where
    A: AmountType,
    S: LedgerStore<A>,
{
    /// Create a ledger over the given store
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            _phantom: PhantomData,
        }
    }

    /// Open a new account with an empty transaction log
    pub fn register_account(
        &mut self,
        account_number: u32,
        pin: u32,
        owner_name: impl Into<String>,
        initial_balance: A,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(account_number, pin);
        let owner_name = owner_name.into();

        if owner_name.trim().is_empty() {
            warn!(account = %key, "Rejected registration without owner name");
            return Err(LedgerError::MissingOwnerName(key));
        }
        if initial_balance < A::zero() {
            warn!(account = %key, "Rejected negative opening balance");
            return Err(DomainError::InvalidAmount.into());
        }

        self.store
            .register(key, Account::new(owner_name, initial_balance))
            .inspect_err(|e| warn!(account = %key, error = %e, "Registration refused"))?;

        debug!(
            account = %key,
            balance = %initial_balance.to_decimal_string(),
            "Registered account"
        );
        Ok(())
    }

    /// Withdraw cash; the full balance may be withdrawn
    pub fn withdraw_cash(
        &mut self,
        account_number: u32,
        pin: u32,
        amount: A,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(account_number, pin);
        debug!(account = %key, amount = %amount.to_decimal_string(), "Processing withdrawal");

        validate_amount(amount)?;
        let entry = self
            .store
            .try_update(key, |account| apply_withdrawal(account, amount))
            .inspect_err(|e| warn!(account = %key, error = %e, "Withdrawal refused"))?;

        debug!(
            account = %key,
            balance = %entry.updated_balance.to_decimal_string(),
            "Withdrawal recorded"
        );
        Ok(())
    }

    /// Deposit cash
    pub fn deposit_cash(
        &mut self,
        account_number: u32,
        pin: u32,
        amount: A,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(account_number, pin);
        debug!(account = %key, amount = %amount.to_decimal_string(), "Processing deposit");

        validate_amount(amount)?;
        let entry = self
            .store
            .try_update(key, |account| apply_deposit(account, amount))
            .inspect_err(|e| warn!(account = %key, error = %e, "Deposit refused"))?;

        debug!(
            account = %key,
            balance = %entry.updated_balance.to_decimal_string(),
            "Deposit recorded"
        );
        Ok(())
    }

    /// Write an account's transaction log to `path`, one entry per line
    ///
    /// The file is only created once the account is known to exist, so an
    /// unknown account leaves any existing file untouched.
    pub fn print_ledger(
        &self,
        path: impl AsRef<Path>,
        account_number: u32,
        pin: u32,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(account_number, pin);
        let path = path.as_ref();

        if !self.store.contains(key) {
            return Err(LedgerError::AccountNotFound(key));
        }
        let log = self.store.transaction_log(key).unwrap_or_default();

        export_ledger(path, &log).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(account = %key, path = %path.display(), entries = log.len(), "Ledger exported");
        Ok(())
    }

    /// Append a raw line to an account's log without touching its balance
    pub fn record_line(
        &mut self,
        account_number: u32,
        pin: u32,
        line: impl Into<String>,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(account_number, pin);
        self.store.append(key, line.into())?;
        Ok(())
    }

    /// Current state of one account
    pub fn account(&self, account_number: u32, pin: u32) -> Option<Account<A>> {
        self.store.account(AccountKey::new(account_number, pin))
    }

    /// Current log of one account
    pub fn transaction_log(&self, account_number: u32, pin: u32) -> Option<TransactionLog> {
        self.store
            .transaction_log(AccountKey::new(account_number, pin))
    }

    /// Get reference to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the ledger and return its store
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<A: AmountType> Ledger<A, InMemoryLedgerStore<A>> {
    /// Create an empty single-owner ledger
    pub fn new() -> Self {
        Self::with_store(InMemoryLedgerStore::new())
    }

    /// Every registered account, keyed by (account number, PIN)
    pub fn accounts(&self) -> &HashMap<AccountKey, Account<A>> {
        self.store.accounts()
    }

    /// Every transaction log, keyed by (account number, PIN)
    pub fn transactions(&self) -> &HashMap<AccountKey, TransactionLog> {
        self.store.transactions()
    }

    /// Mutable access to the transaction logs
    pub fn transactions_mut(&mut self) -> &mut HashMap<AccountKey, TransactionLog> {
        self.store.transactions_mut()
    }
}

impl<A: AmountType> Default for Ledger<A, InMemoryLedgerStore<A>> {
    fn default() -> Self {
        Self::new()
    }
}
