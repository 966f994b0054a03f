//! Logging setup for Shopfront.
//!
//! Libraries only emit `tracing` events; binaries call [`init`] once at
//! startup to install a subscriber. `RUST_LOG`, when set, takes precedence
//! over the configured level.

mod logging;

pub use logging::{init, LogFormat, LogLevel, LoggingConfig, LoggingError};
