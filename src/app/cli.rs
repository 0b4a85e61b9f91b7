use std::io::{self, BufWriter, Stdout, Write};

use clap::Parser;

use super::config::Config;
use super::error::AppError;

/// Reusable CLI application runner that handles:
/// - Argument parsing into a `Config`
/// - Log subscriber setup (stderr)
/// - Stdout buffering and flushing
/// - Exit codes (0 = success, 1 = error, 2 = bad arguments)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the CLI application and exit the process with its status code
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub fn run<F>(self, main_fn: F) -> !
    where
        F: FnOnce(&Config, &mut BufWriter<Stdout>) -> Result<(), AppError>,
    {
        // clap prints help/version or the usage error itself (exit 0 or 2)
        let config = Config::parse();

        init_tracing(&config);

        let mut writer = BufWriter::new(io::stdout());
        let result = main_fn(&config, &mut writer)
            .and_then(|()| writer.flush().map_err(AppError::from));

        match result {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{}: {}", self.name, e);
                std::process::exit(1);
            }
        }
    }
}

/// Install the fmt subscriber; a second call is a no-op
pub fn init_tracing(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level())
        .with_target(false)
        .try_init();
}
