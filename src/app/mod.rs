pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use cli::{CliApp, init_tracing};
pub use config::Config;
pub use error::AppError;
