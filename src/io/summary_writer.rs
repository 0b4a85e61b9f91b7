use std::io::Write;

use serde::Serialize;

use super::error::IoError;
use crate::domain::{Account, AccountKey, AmountType};

#[derive(Serialize)]
struct SummaryRow<'a> {
    account: u32,
    owner: &'a str,
    balance: String,
}

/// Write `account,owner,balance` rows, ordered by account key
///
/// PINs are not part of the output.
pub fn write_summary<'a, A, I, W>(accounts: I, writer: W) -> Result<(), IoError>
where
    A: AmountType + 'a,
    I: IntoIterator<Item = (&'a AccountKey, &'a Account<A>)>,
    W: Write,
{
    let mut rows: Vec<_> = accounts.into_iter().collect();
    rows.sort_by_key(|(key, _)| **key);

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (key, account) in rows {
        csv_writer.serialize(SummaryRow {
            account: key.account_number(),
            owner: account.owner_name(),
            balance: account.balance().to_decimal_string(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
