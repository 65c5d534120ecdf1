//! LINE Sender
//!
//! Delivers reply messages through the Messaging API reply endpoint.

use std::time::Duration;

use async_trait::async_trait;
use hellostay_core::{OutboundMessage, ReplySink, ReplyToken, StayError, MAX_REPLY_MESSAGES};
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

const REPLY_PATH: &str = "/v2/bot/message/reply";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest<'a> {
    pub reply_token: &'a str,
    pub messages: &'a [OutboundMessage],
}

pub struct LineReplyClient {
    http: Client,
    endpoint: String,
    access_token: String,
}

impl LineReplyClient {
    pub fn new(
        api_base: &str,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StayError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StayError::Http(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{}{}", api_base.trim_end_matches('/'), REPLY_PATH),
            access_token: access_token.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReplySink for LineReplyClient {
    fn name(&self) -> &str {
        "line"
    }

    async fn reply(&self, token: &ReplyToken, messages: &[OutboundMessage]) -> Result<(), StayError> {
        if messages.len() > MAX_REPLY_MESSAGES {
            return Err(StayError::TooManyMessages(messages.len()));
        }

        let body = ReplyRequest {
            reply_token: token.as_str(),
            messages,
        };
        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| StayError::Http(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            error!("[LINE] Reply failed ({}): {}", status, message);
            return Err(StayError::ReplyFailed {
                status: status.as_u16(),
                message,
            });
        }
        info!("[LINE] Replied with {} message(s) to {}", messages.len(), token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    /// Local stand-in for the reply API that records what it receives.
    async fn fake_api(status: StatusCode) -> (String, Captured) {
        let captured: Captured = Arc::default();
        let app = Router::new()
            .route(
                REPLY_PATH,
                post(
                    move |State(seen): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_owned);
                        seen.lock().unwrap().push((auth, body));
                        (status, r#"{"message":"Invalid reply token"}"#)
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), captured)
    }

    fn client(base: &str) -> LineReplyClient {
        LineReplyClient::new(base, "token-abc", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn request_uses_camel_case() {
        let messages = [OutboundMessage::text("hi")];
        let v = serde_json::to_value(ReplyRequest {
            reply_token: "r-1",
            messages: &messages,
        })
        .unwrap();
        assert_eq!(v, json!({"replyToken": "r-1", "messages": [{"type": "text", "text": "hi"}]}));
    }

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        assert_eq!(
            client("https://api.line.me/").endpoint(),
            "https://api.line.me/v2/bot/message/reply"
        );
    }

    #[tokio::test]
    async fn posts_messages_with_bearer_token() {
        let (base, captured) = fake_api(StatusCode::OK).await;
        let token = ReplyToken::new("nHuyWiB7yP5Zw52FIkcQobQuGDXCTA");

        client(&base)
            .reply(&token, &[OutboundMessage::text("hello")])
            .await
            .unwrap();

        let seen = captured.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("Bearer token-abc"));
        assert_eq!(seen[0].1["replyToken"], "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA");
        assert_eq!(seen[0].1["messages"][0]["text"], "hello");
    }

    #[tokio::test]
    async fn non_success_becomes_reply_failed() {
        let (base, _) = fake_api(StatusCode::BAD_REQUEST).await;
        let err = client(&base)
            .reply(&ReplyToken::new("expired"), &[OutboundMessage::text("x")])
            .await
            .unwrap_err();

        match err {
            StayError::ReplyFailed { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("Invalid reply token"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn more_than_five_messages_is_rejected_locally() {
        let (base, captured) = fake_api(StatusCode::OK).await;
        let messages = vec![OutboundMessage::text("x"); 6];

        let err = client(&base)
            .reply(&ReplyToken::new("r"), &messages)
            .await
            .unwrap_err();
        assert!(matches!(err, StayError::TooManyMessages(6)));
        assert!(captured.lock().unwrap().is_empty());
    }
}
