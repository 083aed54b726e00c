//! whois_lookup library: WHOIS lookups reduced to the informative lines.
//!
//! A lookup fetches the raw answer for a domain or IP address through the
//! `whois-service` client and drops registrar notices, status codes and everything from the
//! DNSSEC line onwards. Answers that are only the RIPE database banner are
//! reported as `ERROR_BAD_ADDRESS`; lookups that fail outright as
//! `Failed to get data on address`.
//!
//! # Example
//!
//! ```no_run
//! use whois_lookup::{lookup_address, Config, ServiceSource};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = Config::default();
//! let text = lookup_address("example.com", &ServiceSource::new(), config.timeout()).await;
//! println!("{}", text);
//! # }
//! ```
//!
//! The filter is usable on its own:
//!
//! ```
//! use whois_lookup::process_data;
//!
//! let raw = "Registrar: Foo\nAddress: 1 Main St\nDNSSEC: unsigned\nignored line";
//! assert_eq!(process_data(raw), "Address: 1 Main St\n");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod handler;
pub mod initialization;
mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{EventError, LookupError};
pub use handler::{handle, handle_json, handle_with, LookupEvent};
pub use whois::{
    classify_line, filter_response, lookup_address, lookup_whois, process_data, FilterObserver,
    FilterOutcome, LineAction, LogObserver, ServiceSource, WhoisSource,
};
