use super::amount::AmountType;

/// Registered account; the balance only changes through the operations module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account<A: AmountType> {
    owner_name: String,
    balance: A,
}

impl<A: AmountType> Account<A> {
    /// Create an account holding the given opening balance
    pub fn new(owner_name: impl Into<String>, balance: A) -> Self {
        Self {
            owner_name: owner_name.into(),
            balance,
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> A {
        self.balance
    }

    pub(crate) fn set_balance(&mut self, amount: A) {
        self.balance = amount;
    }
}
