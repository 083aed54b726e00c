//! Error type definitions.

use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for a single WHOIS lookup.
///
/// Callers of [`crate::lookup_address`] never see these; every variant collapses
/// into the transport failure message. They are kept typed for logging and for
/// library users of [`crate::lookup_whois`].
#[derive(Error, Debug)]
pub enum LookupError {
    /// The WHOIS client could not be set up.
    #[error("Failed to create WHOIS client: {0}")]
    ClientInit(String),

    /// The WHOIS client reported a failed query.
    #[error("WHOIS query failed: {0}")]
    Query(String),

    /// The lookup did not complete within the configured budget.
    #[error("WHOIS lookup timed out after {budget:?}")]
    Timeout {
        /// Budget that was exceeded
        budget: Duration,
    },
}

/// Error types for handler event decoding.
#[derive(Error, Debug)]
pub enum EventError {
    /// The event was not valid JSON or had no `address` string.
    #[error("Invalid lookup event: {0}")]
    InvalidEvent(#[from] serde_json::Error),
}
