use std::path::PathBuf;

use serde::Deserialize;

use super::error::IoError;
use crate::domain::AmountType;

/// Raw CSV record as read from a teller script
#[derive(Debug, Deserialize)]
pub struct RawCommandRecord {
    #[serde(rename = "type")]
    pub command_type: String,
    pub account: u32,
    pub pin: u32,
    pub amount: Option<String>,
    pub detail: Option<String>,
}

/// One teller operation against the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<A: AmountType> {
    Register {
        account_number: u32,
        pin: u32,
        owner_name: String,
        initial_balance: A,
    },
    Deposit {
        account_number: u32,
        pin: u32,
        amount: A,
    },
    Withdrawal {
        account_number: u32,
        pin: u32,
        amount: A,
    },
    Print {
        account_number: u32,
        pin: u32,
        path: PathBuf,
    },
}

impl<A: AmountType> Command<A> {
    pub fn account_number(&self) -> u32 {
        match self {
            Self::Register { account_number, .. }
            | Self::Deposit { account_number, .. }
            | Self::Withdrawal { account_number, .. }
            | Self::Print { account_number, .. } => *account_number,
        }
    }
}

fn parse_amount<A: AmountType>(raw: String) -> Result<A, IoError> {
    A::from_decimal_str(&raw).map_err(|_| IoError::InvalidAmount(raw))
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

impl RawCommandRecord {
    /// Parse this raw record into a strongly-typed Command
    pub fn parse<A: AmountType>(self) -> Result<Command<A>, IoError> {
        let account_number = self.account;
        let pin = self.pin;

        match self.command_type.trim().to_lowercase().as_str() {
            "register" => {
                let owner_name = non_empty(self.detail).ok_or_else(|| {
                    IoError::MissingField("owner name required for register".to_string())
                })?;
                // Opening balance defaults to zero
                let initial_balance = match non_empty(self.amount) {
                    Some(raw) => parse_amount(raw)?,
                    None => A::zero(),
                };
                Ok(Command::Register {
                    account_number,
                    pin,
                    owner_name,
                    initial_balance,
                })
            }
            "deposit" => {
                let raw = non_empty(self.amount).ok_or_else(|| {
                    IoError::MissingField("amount required for deposit".to_string())
                })?;
                Ok(Command::Deposit {
                    account_number,
                    pin,
                    amount: parse_amount(raw)?,
                })
            }
            "withdrawal" => {
                let raw = non_empty(self.amount).ok_or_else(|| {
                    IoError::MissingField("amount required for withdrawal".to_string())
                })?;
                Ok(Command::Withdrawal {
                    account_number,
                    pin,
                    amount: parse_amount(raw)?,
                })
            }
            "print" => {
                let path = non_empty(self.detail).ok_or_else(|| {
                    IoError::MissingField("output path required for print".to_string())
                })?;
                Ok(Command::Print {
                    account_number,
                    pin,
                    path: PathBuf::from(path),
                })
            }
            _ => Err(IoError::InvalidCommandType(self.command_type)),
        }
    }
}
