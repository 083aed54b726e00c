//! Error handling.
//!
//! Lookup failures are typed here but surface to handler callers only as the
//! transport failure message. Bad-address answers are not errors at all; the
//! filter reports them as a sentinel.

mod types;

// Re-export public API
pub use types::{EventError, InitializationError, LookupError};
