/// Module containing environment variable helpers for external callers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing base URL normalization
pub mod url;

pub use config::*;
pub use logger::*;
pub use url::*;
