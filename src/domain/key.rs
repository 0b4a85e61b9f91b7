use std::fmt;

/// Composite account identifier: account number plus PIN
///
/// Two keys are the same account only when both halves match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountKey {
    account_number: u32,
    pin: u32,
}

impl AccountKey {
    pub const fn new(account_number: u32, pin: u32) -> Self {
        Self {
            account_number,
            pin,
        }
    }

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    pub fn pin(&self) -> u32 {
        self.pin
    }
}

impl From<(u32, u32)> for AccountKey {
    fn from((account_number, pin): (u32, u32)) -> Self {
        Self::new(account_number, pin)
    }
}

/// Renders the account number only; the PIN never leaves the key
impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.account_number)
    }
}
