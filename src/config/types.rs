//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::WHOIS_TIMEOUT_SECS;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace (prints every filter decision)
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use whois_lookup::Config;
///
/// let config = Config {
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.timeout().as_secs(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Overall lookup timeout in seconds
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Lookup timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: WHOIS_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Look up a domain
/// whois_lookup example.com
///
/// # Look up an IP address with a longer timeout
/// whois_lookup 193.0.6.139 --timeout-seconds 15
///
/// # Handler-style invocation
/// whois_lookup --event '{"address":"example.com"}'
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "whois_lookup",
    about = "Looks up a domain or IP address over WHOIS and prints the informative part of the answer."
)]
pub struct Opt {
    /// Domain name or IP address to look up
    #[arg(required_unless_present = "event")]
    pub address: Option<String>,

    /// JSON event of the form {"address": "..."} instead of a positional address
    #[arg(long, conflicts_with = "address")]
    pub event: Option<String>,

    /// Overall lookup timeout in seconds
    #[arg(long, default_value_t = WHOIS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Print the unfiltered server response
    #[arg(long)]
    pub raw: bool,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Config {
            timeout_seconds: opt.timeout_seconds,
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
        }
    }
}
