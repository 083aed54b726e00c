//! Configuration constants.
//!
//! This module defines the constants used throughout the application: response
//! sentinels, the filter's trigger markers and the lookup timeout.

// Response sentinels
/// Returned when the WHOIS server could not be reached or did not answer in time.
pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to get data on address";
/// Returned when the response is registry boilerplate instead of a record.
pub const BAD_ADDRESS_SENTINEL: &str = "ERROR_BAD_ADDRESS";

// Filter markers
/// Lines containing this are dropped.
pub const REGISTRAR_MARKER: &str = "Registrar";
/// Lines containing this are dropped.
pub const DOMAIN_STATUS_MARKER: &str = "Domain Status";
/// Everything from the first line containing this onwards is dropped.
pub const DNSSEC_MARKER: &str = "DNSSEC";
/// Printed by the RIPE database when it has no record for the queried address.
pub const RIPE_BOILERPLATE_MARKER: &str = "% This is the RIPE Database query service.";

// Network operation timeouts
/// Overall WHOIS lookup timeout in seconds
/// Most WHOIS queries complete in <2s; 5s fails fast on unresponsive servers
pub const WHOIS_TIMEOUT_SECS: u64 = 5;
