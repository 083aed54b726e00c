//! WHOIS filter result types.

use crate::config::BAD_ADDRESS_SENTINEL;

/// Result of filtering one raw WHOIS response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Retained lines, each terminated by `\n`. May be empty.
    Filtered(String),
    /// The response was registry boilerplate: the address has no record.
    BadAddress,
}

impl FilterOutcome {
    /// Returns the string handed back to callers: the filtered text, or the
    /// bad-address sentinel.
    pub fn into_response(self) -> String {
        match self {
            FilterOutcome::Filtered(text) => text,
            FilterOutcome::BadAddress => BAD_ADDRESS_SENTINEL.to_string(),
        }
    }

    /// Whether the filter recognised a not-found answer.
    pub fn is_bad_address(&self) -> bool {
        matches!(self, FilterOutcome::BadAddress)
    }
}

/// What the filter did with one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Appended to the result
    Kept,
    /// Dropped as registrar or status noise
    Skipped,
    /// DNSSEC line: this and every later line dropped
    Stopped,
    /// Boilerplate marker: whole response rejected
    BadAddress,
}

impl LineAction {
    /// Short label used in trace logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineAction::Kept => "kept",
            LineAction::Skipped => "skipped",
            LineAction::Stopped => "stopped",
            LineAction::BadAddress => "bad address",
        }
    }
}
