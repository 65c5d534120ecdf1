//! Log Redaction Layer
//!
//! Scrubs phone numbers and access tokens from guest text and error strings
//! prior to logging.

use regex::Regex;
use std::sync::LazyLock;

/// Taiwanese mobile (`0932-828-922`, `+886 932 828 922`) and generic 10-digit numbers.
static TELEPHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+886[-\s]?|0)9\d{2}[-\s]?\d{3}[-\s]?\d{3}|\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9\-\._~+/]+=*").unwrap());

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = TELEPHONE_RE.replace_all(input, "[REDACTED_PHONE]");
    TOKEN_RE.replace_all(&redacted, "[REDACTED_TOKEN]").into_owned()
}
