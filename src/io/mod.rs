pub mod csv_reader;
pub mod error;
pub mod ledger_writer;
pub mod parse;
pub mod summary_writer;

// Re-export commonly used types
pub use csv_reader::CsvCommandReader;
pub use error::IoError;
pub use ledger_writer::{export_ledger, write_ledger};
pub use parse::{Command, RawCommandRecord};
pub use summary_writer::write_summary;
