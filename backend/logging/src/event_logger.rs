//! Dispatch Event Logger
//!
//! One structured record per handled webhook event, emitted under the
//! `dispatch_events` target so the file layer can be filtered to an audit trail.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchEvent {
    /// A reply was sent.
    Replied {
        event_kind: String,
        template: String,
        messages: usize,
    },
    /// No rule matched; nothing was sent.
    Ignored { event_kind: String, detail: String },
    /// Decoding or delivery failed.
    Failed { event_kind: String, error: String },
    /// The batch was dropped before dispatch.
    Rejected { reason: String },
}

impl DispatchEvent {
    fn is_failure(&self) -> bool {
        matches!(self, DispatchEvent::Failed { .. } | DispatchEvent::Rejected { .. })
    }
}

#[derive(Debug, Serialize)]
pub struct DispatchLogEntry {
    /// Source user/group id, if the event carried one.
    pub source: Option<String>,
    /// Delivery time reported by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_at: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
    pub event: DispatchEvent,
}

pub struct DispatchLogger;

impl DispatchLogger {
    /// Records an outcome, redacting free text first.
    pub fn log_event(
        source: Option<&str>,
        received_at: Option<DateTime<Utc>>,
        mut event: DispatchEvent,
    ) -> DispatchLogEntry {
        match &mut event {
            DispatchEvent::Ignored { detail, .. } => *detail = redact_sensitive_data(detail),
            DispatchEvent::Failed { error, .. } => *error = redact_sensitive_data(error),
            DispatchEvent::Rejected { reason } => *reason = redact_sensitive_data(reason),
            DispatchEvent::Replied { .. } => {}
        }

        let entry = DispatchLogEntry {
            source: source.map(str::to_owned),
            received_at,
            timestamp: Utc::now(),
            event,
        };

        if entry.event.is_failure() {
            warn!(target: "dispatch_events", event = ?entry, "Dispatch event");
        } else {
            info!(target: "dispatch_events", event = ?entry, "Dispatch event");
        }
        entry
    }
}
