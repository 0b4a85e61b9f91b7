use std::fs::File;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;

use csv::{DeserializeRecordsIntoIter, ReaderBuilder, Trim};

use super::error::IoError;
use super::parse::{Command, RawCommandRecord};
use crate::domain::AmountType;

/// Iterator of teller commands read from CSV input
///
/// Expected header: `type,account,pin,amount,detail`. Rows may omit
/// trailing empty columns.
pub struct CsvCommandReader<R: Read, A: AmountType> {
    records: DeserializeRecordsIntoIter<R, RawCommandRecord>,
    _phantom: PhantomData<A>,
}

impl<R: Read, A: AmountType> CsvCommandReader<R, A> {
    /// Create a new command reader over any byte source
    pub fn new(reader: R) -> Self {
        let records = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader)
            .into_deserialize();

        Self {
            records,
            _phantom: PhantomData,
        }
    }
}

impl<A: AmountType> CsvCommandReader<File, A> {
    /// Open a teller script from a file path
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(file))
    }
}

impl<R: Read, A: AmountType> Iterator for CsvCommandReader<R, A> {
    type Item = Result<Command<A>, IoError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|result| result.map_err(IoError::from).and_then(|raw| raw.parse::<A>()))
    }
}
