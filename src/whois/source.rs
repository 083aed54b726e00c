//! WHOIS collaborators: where raw responses come from.

use std::future::Future;

use whois_service::WhoisClient;

use crate::error_handling::LookupError;

/// Anything that can turn an address into a raw WHOIS response.
///
/// Each call resolves exactly once, to the full response text or an error.
pub trait WhoisSource {
    /// Fetches the raw WHOIS answer for `address`.
    fn fetch(&self, address: &str) -> impl Future<Output = Result<String, LookupError>> + Send;
}

/// Source backed by the `whois-service` crate.
///
/// The crate picks the right WHOIS server for the address (IANA bootstrap,
/// registry and registrar referrals) and hands back the raw answer text; only
/// that text is used here.
#[derive(Debug, Default, Clone, Copy)]
pub struct ServiceSource;

impl ServiceSource {
    /// Creates a source; the WHOIS client itself is built per lookup.
    pub fn new() -> Self {
        Self
    }
}

impl WhoisSource for ServiceSource {
    async fn fetch(&self, address: &str) -> Result<String, LookupError> {
        // Create a client per lookup; caching stays disabled
        let client = WhoisClient::new_without_cache()
            .await
            .map_err(|e| LookupError::ClientInit(e.to_string()))?;

        let response = client
            .lookup(address)
            .await
            .map_err(|e| LookupError::Query(e.to_string()))?;

        log::debug!(
            "WHOIS answer for {} from {} ({} bytes)",
            address,
            response.whois_server,
            response.raw_data.len()
        );
        Ok(response.raw_data)
    }
}
