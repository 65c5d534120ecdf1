//! Structured logging for the Hello Stay bot.
//!
//! Handles subscriber setup, log redaction, and per-event dispatch audit records.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{DispatchEvent, DispatchLogEntry, DispatchLogger};
pub use logger::init_logger;
pub use redact::redact_sensitive_data;
