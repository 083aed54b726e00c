//! Request handler: adapts an `{"address": "..."}` event to a lookup.
//!
//! Whatever happens during the lookup, the handler produces a result string.
//! Only an undecodable event is an error.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error_handling::EventError;
use crate::whois::{lookup_address, ServiceSource, WhoisSource};

/// Handler input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEvent {
    /// Domain name or IP address to look up
    pub address: String,
}

impl LookupEvent {
    /// Decodes an event from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Handles one event with the given source.
///
/// Surrounding whitespace is trimmed from the address here; sources receive it
/// as is.
pub async fn handle_with<S: WhoisSource>(event: &LookupEvent, source: &S, config: &Config) -> String {
    lookup_address(event.address.trim(), source, config.timeout()).await
}

/// Handles one event with the `whois-service` backed source.
pub async fn handle(event: &LookupEvent, config: &Config) -> String {
    handle_with(event, &ServiceSource::new(), config).await
}

/// Decodes a JSON event and handles it.
///
/// # Errors
///
/// Returns `EventError::InvalidEvent` if `json` is not an object with a string
/// `address` field. Lookup failures are not errors.
pub async fn handle_json(json: &str, config: &Config) -> Result<String, EventError> {
    let event = LookupEvent::from_json(json)?;
    Ok(handle(&event, config).await)
}
