//! Inbound webhook model.
//!
//! The platform posts `{"destination": ..., "events": [...]}`. Events are kept
//! as raw JSON until [`WebhookEvent::from_value`] decodes them one at a time,
//! so a single odd event never poisons the rest of the batch.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::StayError;

/// Request body delivered to the webhook.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookBody {
    /// Bot user id the events were sent to.
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Option<Vec<Value>>,
}

impl WebhookBody {
    /// The event batch; `null` and a missing key both read as empty.
    pub fn events(&self) -> &[Value] {
        self.events.as_deref().unwrap_or_default()
    }

    pub fn is_verification_ping(&self) -> bool {
        self.events().is_empty()
    }
}

/// Single-use handle authorizing one reply to one event.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplyToken(String);

impl ReplyToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReplyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(6).collect();
        if prefix.len() < self.0.len() {
            write!(f, "{prefix}…")
        } else {
            f.write_str(&prefix)
        }
    }
}

impl fmt::Debug for ReplyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReplyToken({self})")
    }
}

/// Who the event came from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub user_id: Option<String>,
    pub group_id: Option<String>,
    pub room_id: Option<String>,
}

impl Source {
    /// Most specific id available, for log lines.
    pub fn id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .or(self.group_id.as_deref())
            .or(self.room_id.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowEvent {
    /// Absent on `mode: "standby"` deliveries.
    pub reply_token: Option<ReplyToken>,
    pub source: Option<Source>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackEvent {
    pub reply_token: Option<ReplyToken>,
    pub postback: PostbackContent,
    pub source: Option<Source>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostbackContent {
    pub data: String,
    /// Date/time picker results; unused by the bot.
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    pub reply_token: Option<ReplyToken>,
    pub message: MessageContent,
    pub source: Option<Source>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<String>,
    pub text: Option<String>,
}

impl MessageContent {
    /// The text of a `text` message; `None` for stickers, images, etc.
    pub fn text(&self) -> Option<&str> {
        if self.kind == "text" {
            self.text.as_deref()
        } else {
            None
        }
    }
}

/// A decoded inbound event.
#[derive(Debug, Clone)]
pub enum WebhookEvent {
    Follow(FollowEvent),
    Postback(PostbackEvent),
    Message(MessageEvent),
    /// Any event type the bot does not answer (`unfollow`, `join`, `beacon`, ...).
    Unsupported { kind: String },
}

impl WebhookEvent {
    /// Decode one raw event from the batch.
    ///
    /// Unknown event types are not an error; a known type with a missing or
    /// mistyped field is.
    pub fn from_value(value: Value) -> Result<Self, StayError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        let event = match kind.as_str() {
            "follow" => WebhookEvent::Follow(decode(&kind, value)?),
            "postback" => WebhookEvent::Postback(decode(&kind, value)?),
            "message" => WebhookEvent::Message(decode(&kind, value)?),
            _ => WebhookEvent::Unsupported { kind },
        };
        Ok(event)
    }

    /// The platform's event type name.
    pub fn kind(&self) -> &str {
        match self {
            WebhookEvent::Follow(_) => "follow",
            WebhookEvent::Postback(_) => "postback",
            WebhookEvent::Message(_) => "message",
            WebhookEvent::Unsupported { kind } => kind,
        }
    }

    pub fn reply_token(&self) -> Option<&ReplyToken> {
        match self {
            WebhookEvent::Follow(e) => e.reply_token.as_ref(),
            WebhookEvent::Postback(e) => e.reply_token.as_ref(),
            WebhookEvent::Message(e) => e.reply_token.as_ref(),
            WebhookEvent::Unsupported { .. } => None,
        }
    }

    pub fn source(&self) -> Option<&Source> {
        match self {
            WebhookEvent::Follow(e) => e.source.as_ref(),
            WebhookEvent::Postback(e) => e.source.as_ref(),
            WebhookEvent::Message(e) => e.source.as_ref(),
            WebhookEvent::Unsupported { .. } => None,
        }
    }

    /// Delivery time reported by the platform (epoch millis).
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        let millis = match self {
            WebhookEvent::Follow(e) => e.timestamp,
            WebhookEvent::Postback(e) => e.timestamp,
            WebhookEvent::Message(e) => e.timestamp,
            WebhookEvent::Unsupported { .. } => None,
        }?;
        Utc.timestamp_millis_opt(millis).single()
    }
}

fn decode<T: DeserializeOwned>(kind: &str, value: Value) -> Result<T, StayError> {
    serde_json::from_value(value).map_err(|e| StayError::MalformedEvent(format!("{kind}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_events_read_as_empty() {
        let missing: WebhookBody = serde_json::from_value(json!({"destination": "U1"})).unwrap();
        assert!(missing.is_verification_ping());

        let null: WebhookBody = serde_json::from_value(json!({"events": null})).unwrap();
        assert!(null.is_verification_ping());

        let empty: WebhookBody = serde_json::from_value(json!({"events": []})).unwrap();
        assert!(empty.is_verification_ping());
    }

    #[test]
    fn decodes_postback() {
        let event = WebhookEvent::from_value(json!({
            "type": "postback",
            "replyToken": "b60d432864f44d079f6d8efe86cf404b",
            "source": {"type": "user", "userId": "U91eeaf62d901234567890123456789ab"},
            "timestamp": 1462629479859i64,
            "postback": {"data": "FAQ_WIFI"}
        }))
        .unwrap();

        let WebhookEvent::Postback(pb) = &event else {
            panic!("expected postback, got {event:?}");
        };
        assert_eq!(pb.postback.data, "FAQ_WIFI");
        assert_eq!(event.kind(), "postback");
        assert_eq!(
            event.source().and_then(Source::id),
            Some("U91eeaf62d901234567890123456789ab")
        );
        assert!(event.received_at().is_some());
    }

    #[test]
    fn sticker_message_has_no_text() {
        let event = WebhookEvent::from_value(json!({
            "type": "message",
            "replyToken": "tok",
            "message": {"type": "sticker", "id": "1", "packageId": "446", "stickerId": "1988"}
        }))
        .unwrap();

        let WebhookEvent::Message(msg) = event else {
            panic!("expected message");
        };
        assert_eq!(msg.message.text(), None);
    }

    #[test]
    fn unknown_type_is_unsupported_not_error() {
        let event = WebhookEvent::from_value(json!({"type": "unfollow", "source": {"type": "user"}})).unwrap();
        assert!(matches!(&event, WebhookEvent::Unsupported { kind } if kind == "unfollow"));
        assert!(event.reply_token().is_none());
    }

    #[test]
    fn standby_event_without_reply_token_decodes() {
        let event = WebhookEvent::from_value(json!({
            "type": "postback",
            "mode": "standby",
            "postback": {"data": "FAQ_WIFI"},
            "timestamp": 1462629479859i64
        }))
        .unwrap();

        assert_eq!(event.kind(), "postback");
        assert!(event.reply_token().is_none());
    }

    #[test]
    fn postback_without_data_is_malformed() {
        let err = WebhookEvent::from_value(json!({
            "type": "postback",
            "replyToken": "tok",
            "postback": {}
        }))
        .unwrap_err();
        assert!(matches!(err, StayError::MalformedEvent(ref m) if m.starts_with("postback")));
    }

    #[test]
    fn reply_token_is_shortened_in_logs() {
        let token = ReplyToken::new("nHuyWiB7yP5Zw52FIkcQobQuGDXCTA");
        assert_eq!(token.to_string(), "nHuyWi…");
        assert_eq!(format!("{token:?}"), "ReplyToken(nHuyWi…)");
        assert_eq!(ReplyToken::new("abc").to_string(), "abc");
    }
}
