//! Handler behaviour with substitute WHOIS sources.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use whois_lookup::{handle_with, lookup_whois, Config, LookupError, LookupEvent, WhoisSource};

/// Answers every query with a fixed response, or a fixed failure.
struct ScriptedSource {
    response: Option<&'static str>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn answering(response: &'static str) -> Self {
        Self {
            response: Some(response),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl WhoisSource for ScriptedSource {
    async fn fetch(&self, _address: &str) -> Result<String, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.response {
            Some(text) => Ok(text.to_string()),
            None => Err(LookupError::Query("network unreachable".to_string())),
        }
    }
}

/// Remembers every address it was asked for.
#[derive(Default)]
struct RecordingSource {
    seen: Mutex<Vec<String>>,
}

impl WhoisSource for RecordingSource {
    async fn fetch(&self, address: &str) -> Result<String, LookupError> {
        self.seen
            .lock()
            .expect("lock poisoned")
            .push(address.to_string());
        Ok("domain: EXAMPLE.COM\n".to_string())
    }
}

/// Never answers.
struct SilentSource;

impl WhoisSource for SilentSource {
    async fn fetch(&self, _address: &str) -> Result<String, LookupError> {
        std::future::pending::<()>().await;
        Ok(String::new())
    }
}

fn event(address: &str) -> LookupEvent {
    LookupEvent {
        address: address.to_string(),
    }
}

#[tokio::test]
async fn test_transport_failure_returns_fixed_message_once() {
    let source = ScriptedSource::failing();

    let result = handle_with(&event("example.com"), &source, &Config::default()).await;

    assert_eq!(result, "Failed to get data on address");
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_success_returns_filtered_text() {
    let source = ScriptedSource::answering(
        "Registrar: Foo\nDomain Status: active\nAddress: 1 Main St\nDNSSEC: unsigned\nignored line",
    );

    let result = handle_with(&event("example.com"), &source, &Config::default()).await;

    assert_eq!(result, "Address: 1 Main St\n");
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_bad_address_sentinel() {
    let source =
        ScriptedSource::answering("% This is the RIPE Database query service.\nsome other content");

    let result = handle_with(&event("not-an-address"), &source, &Config::default()).await;

    assert_eq!(result, "ERROR_BAD_ADDRESS");
}

#[tokio::test]
async fn test_independent_invocations() {
    let source = ScriptedSource::answering("netname: EXAMPLE\n");
    let config = Config::default();

    let event_a = event("192.0.2.1");
    let event_b = event("198.51.100.1");
    let (a, b) = tokio::join!(
        handle_with(&event_a, &source, &config),
        handle_with(&event_b, &source, &config),
    );

    assert_eq!(a, "netname: EXAMPLE\n");
    assert_eq!(b, "netname: EXAMPLE\n");
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_address_reaches_source_trimmed() {
    let source = RecordingSource::default();

    let result = handle_with(&event("  example.com \t\n"), &source, &Config::default()).await;

    assert_eq!(result, "domain: EXAMPLE.COM\n");
    let seen = source.seen.lock().expect("lock poisoned");
    assert_eq!(seen.as_slice(), ["example.com"]);
}

#[tokio::test]
async fn test_source_receives_address_unmodified() {
    let source = RecordingSource::default();

    lookup_whois(" example.com ", &source, Duration::from_secs(5))
        .await
        .expect("recording source answers");

    let seen = source.seen.lock().expect("lock poisoned");
    assert_eq!(seen.as_slice(), [" example.com "]);
}

#[tokio::test(start_paused = true)]
async fn test_sub_second_timeout_reports_budget() {
    let err = lookup_whois("example.com", &SilentSource, Duration::from_millis(500))
        .await
        .expect_err("silent source must time out");

    assert!(matches!(err, LookupError::Timeout { .. }));
    assert_eq!(err.to_string(), "WHOIS lookup timed out after 500ms");
}

#[tokio::test(start_paused = true)]
async fn test_timeout_is_transport_failure() {
    let config = Config {
        timeout_seconds: 1,
        ..Default::default()
    };

    let result = handle_with(&event("example.com"), &SilentSource, &config).await;

    assert_eq!(result, "Failed to get data on address");
}
