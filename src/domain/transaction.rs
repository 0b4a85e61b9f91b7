use std::fmt;

use super::amount::AmountType;

/// Kind of balance movement recorded in a transaction log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Withdrawal,
    Deposit,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Withdrawal => f.write_str("Withdrawal"),
            Self::Deposit => f.write_str("Deposit"),
        }
    }
}

/// A completed balance movement, rendered as one ledger line:
/// `Withdrawal - Amount: $20.00, Updated Balance: $280.30`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry<A: AmountType> {
    pub kind: TransactionKind,
    pub amount: A,
    pub updated_balance: A,
}

impl<A: AmountType> LedgerEntry<A> {
    pub fn new(kind: TransactionKind, amount: A, updated_balance: A) -> Self {
        Self {
            kind,
            amount,
            updated_balance,
        }
    }
}

impl<A: AmountType> fmt::Display for LedgerEntry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Amount: ${}, Updated Balance: ${}",
            self.kind,
            self.amount.to_decimal_string(),
            self.updated_balance.to_decimal_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::FixedPoint;

    #[test]
    fn withdrawal_line_format() {
        let entry = LedgerEntry::new(
            TransactionKind::Withdrawal,
            FixedPoint::from_cents(20_040),
            FixedPoint::from_cents(9_990),
        );

        assert_eq!(
            entry.to_string(),
            "Withdrawal - Amount: $200.40, Updated Balance: $99.90"
        );
    }

    #[test]
    fn deposit_line_format() {
        let entry = LedgerEntry::new(
            TransactionKind::Deposit,
            FixedPoint::from_units(40_000),
            FixedPoint::from_cents(4_009_990),
        );

        assert_eq!(
            entry.to_string(),
            "Deposit - Amount: $40000.00, Updated Balance: $40099.90"
        );
    }

    #[test]
    fn zero_balance_renders_with_cents() {
        let entry = LedgerEntry::new(
            TransactionKind::Withdrawal,
            FixedPoint::from_units(100),
            FixedPoint::zero(),
        );

        assert_eq!(
            entry.to_string(),
            "Withdrawal - Amount: $100.00, Updated Balance: $0.00"
        );
    }
}
