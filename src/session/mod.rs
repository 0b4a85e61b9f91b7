pub mod policy;
pub mod script;

// Re-export commonly used types
pub use policy::{AbortOnError, ErrorPolicy, SilentSkip, SkipErrors};
pub use script::ScriptSession;
