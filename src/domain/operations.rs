use super::account::Account;
use super::amount::AmountType;
use super::error::DomainError;
use super::transaction::{LedgerEntry, TransactionKind};

/// Reject zero and negative amounts
pub fn validate_amount<A: AmountType>(amount: A) -> Result<(), DomainError> {
    if amount <= A::zero() {
        return Err(DomainError::InvalidAmount);
    }
    Ok(())
}

/// Apply a deposit to an account
pub fn apply_deposit<A: AmountType>(
    account: &mut Account<A>,
    amount: A,
) -> Result<LedgerEntry<A>, DomainError> {
    validate_amount(amount)?;

    let new_balance = account
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    Ok(LedgerEntry::new(TransactionKind::Deposit, amount, new_balance))
}

/// Apply a withdrawal from an account
///
/// Withdrawing the full balance is allowed and leaves the account at zero.
pub fn apply_withdrawal<A: AmountType>(
    account: &mut Account<A>,
    amount: A,
) -> Result<LedgerEntry<A>, DomainError> {
    validate_amount(amount)?;

    if account.balance() < amount {
        return Err(DomainError::InsufficientFunds);
    }

    let new_balance = account
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    Ok(LedgerEntry::new(
        TransactionKind::Withdrawal,
        amount,
        new_balance,
    ))
}
