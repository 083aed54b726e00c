//! WHOIS response filtering.
//!
//! A WHOIS answer mixes the record itself with registrar notices, status codes
//! and terms-of-use text. The filter makes one forward pass over the lines:
//!
//! 1. lines mentioning `Registrar` or `Domain Status` are dropped
//! 2. the first `DNSSEC` line ends the record; it and everything after it go
//! 3. the RIPE banner means there is no record at all and the whole answer is
//!    replaced by the bad-address sentinel
//! 4. every other line is kept, in order, with a trailing `\n`
//!
//! Checks run in that order on every line, so a line carrying both `DNSSEC` and
//! the RIPE banner stops the scan rather than rejecting it.

use crate::config::{
    DNSSEC_MARKER, DOMAIN_STATUS_MARKER, REGISTRAR_MARKER, RIPE_BOILERPLATE_MARKER,
};

use super::types::{FilterOutcome, LineAction};

/// Receives every filter decision.
///
/// Closures of the form `|index, line, action| { .. }` implement this trait.
pub trait FilterObserver {
    /// Called once per examined line, before the filter acts on the decision.
    fn on_line(&mut self, index: usize, line: &str, action: LineAction);
}

impl<F> FilterObserver for F
where
    F: FnMut(usize, &str, LineAction),
{
    fn on_line(&mut self, index: usize, line: &str, action: LineAction) {
        self(index, line, action)
    }
}

/// Observer that reports each decision at `trace` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl FilterObserver for LogObserver {
    fn on_line(&mut self, index: usize, line: &str, action: LineAction) {
        log::trace!("line {} {}: {}", index, action.as_str(), line);
    }
}

/// Decides what happens to a single line.
pub fn classify_line(line: &str) -> LineAction {
    if line.contains(REGISTRAR_MARKER) || line.contains(DOMAIN_STATUS_MARKER) {
        LineAction::Skipped
    } else if line.contains(DNSSEC_MARKER) {
        LineAction::Stopped
    } else if line.contains(RIPE_BOILERPLATE_MARKER) {
        LineAction::BadAddress
    } else {
        LineAction::Kept
    }
}

/// Filters a raw WHOIS response, reporting each decision to `observer`.
///
/// Lines are separated by `\n`. A final `\n` does not start another line, so
/// filtering already-filtered text returns it unchanged, and an empty response
/// yields an empty result.
pub fn filter_response<O>(raw: &str, observer: &mut O) -> FilterOutcome
where
    O: FilterObserver + ?Sized,
{
    let mut processed = String::with_capacity(raw.len());

    for (index, line) in raw.split_terminator('\n').enumerate() {
        let action = classify_line(line);
        observer.on_line(index, line, action);

        match action {
            LineAction::Skipped => continue,
            LineAction::Stopped => break,
            LineAction::BadAddress => return FilterOutcome::BadAddress,
            LineAction::Kept => {
                processed.push_str(line);
                processed.push('\n');
            }
        }
    }

    FilterOutcome::Filtered(processed)
}

/// Filters a raw WHOIS response into the string returned to callers.
///
/// Returns the retained lines joined by `\n`, or `ERROR_BAD_ADDRESS` when the
/// response is the RIPE not-found banner. Total over all inputs.
pub fn process_data(raw: &str) -> String {
    filter_response(raw, &mut LogObserver).into_response()
}
