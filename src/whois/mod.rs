//! WHOIS lookup and response filtering.
//!
//! [`lookup_address`] is the end-to-end operation: it fetches the raw answer from
//! a [`WhoisSource`], then reduces it with [`process_data`]. The result is always
//! a string; failures are reported through the sentinels in [`crate::config`].

mod filter;
mod source;
mod types;

use std::time::Duration;

use crate::config::LOOKUP_FAILED_MESSAGE;
use crate::error_handling::LookupError;

pub use filter::{classify_line, filter_response, process_data, FilterObserver, LogObserver};
pub use source::{ServiceSource, WhoisSource};
pub use types::{FilterOutcome, LineAction};

/// Fetches the raw WHOIS response for `address`, bounded by `timeout`.
///
/// # Errors
///
/// Returns `LookupError::Timeout` if the source does not answer within
/// `timeout`, or whatever error the source itself reports.
pub async fn lookup_whois<S>(
    address: &str,
    source: &S,
    timeout: Duration,
) -> Result<String, LookupError>
where
    S: WhoisSource,
{
    log::info!("Starting WHOIS lookup for address: {}", address);

    match tokio::time::timeout(timeout, source.fetch(address)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout { budget: timeout }),
    }
}

/// Looks up `address` and returns the filtered response.
///
/// Returns:
/// - the retained lines of the answer, newline-terminated
/// - `ERROR_BAD_ADDRESS` if the answer is the RIPE not-found banner
/// - `Failed to get data on address` if the lookup failed or timed out
pub async fn lookup_address<S>(address: &str, source: &S, timeout: Duration) -> String
where
    S: WhoisSource,
{
    match lookup_whois(address, source, timeout).await {
        Ok(raw) => {
            log::info!("WHOIS lookup successful for {}", address);
            let outcome = filter_response(&raw, &mut LogObserver);
            if outcome.is_bad_address() {
                log::info!("WHOIS server has no record for {}", address);
            }
            outcome.into_response()
        }
        Err(e) => {
            log::warn!("WHOIS lookup failed for {}: {}", address, e);
            LOOKUP_FAILED_MESSAGE.to_string()
        }
    }
}
