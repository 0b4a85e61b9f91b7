use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use super::error::AppError;

/// Replay a teller script against a fresh ledger
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "atm")]
#[command(about = "Replay a teller CSV script and print the resulting balances")]
#[command(version)]
pub struct Config {
    /// CSV script with columns type,account,pin,amount,detail
    pub script: PathBuf,

    /// Stop at the first refused command instead of skipping it
    #[arg(long)]
    pub abort_on_error: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse from an argument list (program name first)
    pub fn from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| AppError::InvalidArguments(e.to_string()))
    }

    /// Most detailed level the log subscriber should emit
    pub fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::WARN }
    }
}
