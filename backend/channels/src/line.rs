/// LINE adapter: receives webhook deliveries from the Messaging API and
/// answers each event through the reply API.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use futures::future::join_all;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use hellostay_cards::Template;
use hellostay_config::BotConfig;
use hellostay_core::{ReplySink, StayError, WebhookEvent};
use hellostay_routing::Dispatcher;
use logging::{DispatchEvent, DispatchLogger};

use crate::line_receive::{decode_batch, signature_header, verify_signature};
use crate::line_send::LineReplyClient;
use crate::ChannelAdapter;

pub const LIVENESS_MESSAGE: &str = "你的機器人伺服器運作正常！請回到 LINE Developers 按下 Verify。";

#[derive(Debug, Clone)]
pub struct LineConfig {
    pub webhook_path: String,
    /// `None` disables signature checks.
    pub channel_secret: Option<String>,
}

impl LineConfig {
    pub fn from_bot_config(config: &BotConfig) -> Self {
        Self {
            webhook_path: config.webhook_path.clone(),
            channel_secret: if config.verify_signature() {
                config.channel_secret.clone()
            } else {
                None
            },
        }
    }
}

pub struct LineAdapter {
    config: LineConfig,
    dispatcher: Arc<Dispatcher>,
    sink: Arc<dyn ReplySink>,
}

impl LineAdapter {
    pub fn new(config: LineConfig, dispatcher: Arc<Dispatcher>, sink: Arc<dyn ReplySink>) -> Self {
        Self {
            config,
            dispatcher,
            sink,
        }
    }

    /// Adapter wired to the live reply API. Fails when credentials are missing.
    pub fn from_bot_config(config: &BotConfig, dispatcher: Arc<Dispatcher>) -> Result<Self> {
        let credentials = config.credentials()?;
        if config.skip_signature {
            warn!("[LINE] Signature verification disabled (LINE_SKIP_SIGNATURE)");
        }
        let client = LineReplyClient::new(
            &config.api_base,
            credentials.channel_access_token,
            config.reply_timeout(),
        )?;
        Ok(Self::new(
            LineConfig::from_bot_config(config),
            dispatcher,
            Arc::new(client),
        ))
    }
}

#[derive(Clone)]
struct AppState {
    channel_secret: Option<Arc<str>>,
    dispatcher: Arc<Dispatcher>,
    sink: Arc<dyn ReplySink>,
}

/// Per-event entry in a successful batch response.
#[derive(Debug, Serialize)]
struct Handled {
    event: String,
    template: Template,
    messages: usize,
}

fn status_body(status: &str, message: &str) -> Json<Value> {
    Json(json!({ "status": status, "message": message }))
}

async fn liveness() -> Json<Value> {
    status_body("alive", LIVENESS_MESSAGE)
}

async fn method_not_allowed(method: Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, POST")],
        format!("Method {method} Not Allowed"),
    )
        .into_response()
}

/// Always 200: failures are reported in the body so the platform does not redeliver.
async fn webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let batch = decode_batch(&body);
    if batch.is_verification_ping() {
        info!("[LINE] Verification ping");
        return status_body("ok", "Verification successful");
    }

    if let Some(secret) = &state.channel_secret {
        let valid = signature_header(&headers).is_some_and(|sig| verify_signature(secret, sig, &body));
        if !valid {
            warn!("[LINE] Invalid signature, dropping {} event(s)", batch.events().len());
            DispatchLogger::log_event(
                None,
                None,
                DispatchEvent::Rejected {
                    reason: StayError::InvalidSignature.to_string(),
                },
            );
            return status_body("error", &StayError::InvalidSignature.to_string());
        }
    }

    info!("[LINE] Received {} event(s)", batch.events().len());
    let outcomes = join_all(
        batch
            .events()
            .iter()
            .cloned()
            .map(|raw| handle_event(&state, raw)),
    )
    .await;

    if let Some(err) = outcomes.iter().find_map(|o| o.as_ref().err()) {
        return status_body("error", &err.to_string());
    }
    let results: Vec<Option<Handled>> = outcomes.into_iter().filter_map(|o| o.ok()).collect();
    Json(json!(results))
}

async fn handle_event(state: &AppState, raw: Value) -> Result<Option<Handled>, StayError> {
    let raw_kind = raw
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_owned();

    let event = match WebhookEvent::from_value(raw) {
        Ok(e) => e,
        Err(err) => {
            DispatchLogger::log_event(
                None,
                None,
                DispatchEvent::Failed {
                    event_kind: raw_kind,
                    error: err.to_string(),
                },
            );
            return Err(err);
        }
    };
    let source = event.source().and_then(|s| s.id());
    let received_at = event.received_at();
    let kind = event.kind().to_owned();

    let ignore = |detail: String| -> Result<Option<Handled>, StayError> {
        DispatchLogger::log_event(
            source,
            received_at,
            DispatchEvent::Ignored {
                event_kind: kind.clone(),
                detail,
            },
        );
        Ok(None)
    };

    let Some(token) = event.reply_token() else {
        return ignore(no_token_detail(&event));
    };
    let Some(reply) = state.dispatcher.dispatch(&event) else {
        return ignore(ignored_detail(&event));
    };

    if let Err(err) = state.sink.reply(token, &reply.messages).await {
        DispatchLogger::log_event(
            source,
            received_at,
            DispatchEvent::Failed {
                event_kind: kind,
                error: err.to_string(),
            },
        );
        return Err(err);
    }

    DispatchLogger::log_event(
        source,
        received_at,
        DispatchEvent::Replied {
            event_kind: kind.clone(),
            template: reply.template.to_string(),
            messages: reply.messages.len(),
        },
    );
    Ok(Some(Handled {
        event: kind,
        template: reply.template,
        messages: reply.messages.len(),
    }))
}

fn no_token_detail(event: &WebhookEvent) -> String {
    match event {
        WebhookEvent::Unsupported { kind } => format!("unsupported event {kind}"),
        _ => "no reply token (standby delivery)".into(),
    }
}

fn ignored_detail(event: &WebhookEvent) -> String {
    match event {
        WebhookEvent::Postback(e) => format!("unrecognized postback {}", e.postback.data),
        WebhookEvent::Message(e) => match e.message.text() {
            Some(text) => format!("no keyword in: {text}"),
            None => format!("{} message", e.message.kind),
        },
        WebhookEvent::Follow(_) => "follow without reply".into(),
        WebhookEvent::Unsupported { kind } => format!("unsupported event {kind}"),
    }
}

#[async_trait]
impl ChannelAdapter for LineAdapter {
    fn name(&self) -> &str {
        "line"
    }

    fn build_router(&self) -> Router {
        let state = AppState {
            channel_secret: self.config.channel_secret.as_deref().map(Arc::from),
            dispatcher: self.dispatcher.clone(),
            sink: self.sink.clone(),
        };
        Router::new()
            .route(
                &self.config.webhook_path,
                get(liveness)
                    .post(webhook_handler)
                    .head(method_not_allowed)
                    .fallback(method_not_allowed),
            )
            .with_state(state)
    }

    async fn start(&self) -> Result<()> {
        info!(
            "[LINE] Adapter ready at {} (reply via {}, signature check {})",
            self.config.webhook_path,
            self.sink.name(),
            if self.config.channel_secret.is_some() { "on" } else { "off" }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_receive::{sign, SIGNATURE_HEADER};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use hellostay_config::PropertyProfile;
    use hellostay_core::{OutboundMessage, ReplyToken};
    use std::sync::Mutex;
    use tower::ServiceExt;

    const SECRET: &str = "test-channel-secret";

    /// In-memory reply sink recording every call.
    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(String, Vec<OutboundMessage>)>>,
        fail_with: Option<u16>,
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        fn name(&self) -> &str {
            "recording"
        }

        async fn reply(&self, token: &ReplyToken, messages: &[OutboundMessage]) -> Result<(), StayError> {
            self.calls
                .lock()
                .unwrap()
                .push((token.as_str().to_owned(), messages.to_vec()));
            match self.fail_with {
                Some(status) => Err(StayError::ReplyFailed {
                    status,
                    message: "Invalid reply token".into(),
                }),
                None => Ok(()),
            }
        }
    }

    fn adapter(secret: Option<&str>, sink: Arc<RecordingSink>) -> LineAdapter {
        let dispatcher = Dispatcher::from_profile(PropertyProfile::default()).unwrap();
        LineAdapter::new(
            LineConfig {
                webhook_path: "/webhook".into(),
                channel_secret: secret.map(str::to_owned),
            },
            Arc::new(dispatcher),
            sink,
        )
    }

    async fn send(router: Router, req: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let res = router.oneshot(req).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    fn post(body: &str, signature: Option<String>) -> Request<Body> {
        let mut req = Request::builder().method("POST").uri("/webhook");
        if let Some(sig) = signature {
            req = req.header(SIGNATURE_HEADER, sig);
        }
        req.body(Body::from(body.to_owned())).unwrap()
    }

    fn json_of(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    const WIFI_POSTBACK: &str = r#"{"destination":"Ubot","events":[{"type":"postback","replyToken":"tok-wifi","postback":{"data":"FAQ_WIFI"},"source":{"type":"user","userId":"U1"},"timestamp":1700000000000}]}"#;

    #[tokio::test]
    async fn get_is_a_liveness_probe() {
        let router = adapter(None, Arc::default()).build_router();
        let req = Request::get("/webhook").body(Body::empty()).unwrap();
        let (status, _, body) = send(router, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), json!({"status": "alive", "message": LIVENESS_MESSAGE}));
    }

    #[tokio::test]
    async fn other_methods_are_405_with_allow() {
        for method in ["HEAD", "PUT", "DELETE", "PATCH", "OPTIONS"] {
            let router = adapter(None, Arc::default()).build_router();
            let req = Request::builder()
                .method(method)
                .uri("/webhook")
                .body(Body::empty())
                .unwrap();
            let (status, headers, body) = send(router, req).await;

            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            let allow = headers.get(header::ALLOW).unwrap().to_str().unwrap();
            assert!(allow.contains("GET") && allow.contains("POST"));
            // HEAD responses never carry a body.
            if method != "HEAD" {
                assert_eq!(String::from_utf8(body).unwrap(), format!("Method {method} Not Allowed"));
            }
        }
    }

    #[tokio::test]
    async fn empty_batch_is_verification_success_even_unsigned() {
        for body in [r#"{"events":[]}"#, r#"{"destination":"U"}"#, "not json"] {
            let sink = Arc::new(RecordingSink::default());
            let router = adapter(Some(SECRET), sink.clone()).build_router();
            let (status, _, res) = send(router, post(body, None)).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(json_of(&res), json!({"status": "ok", "message": "Verification successful"}));
            assert!(sink.calls.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn signed_postback_gets_wifi_reply() {
        let sink = Arc::new(RecordingSink::default());
        let router = adapter(Some(SECRET), sink.clone()).build_router();
        let sig = sign(SECRET, WIFI_POSTBACK.as_bytes());
        let (status, _, res) = send(router, post(WIFI_POSTBACK, Some(sig))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json_of(&res),
            json!([{"event": "postback", "template": "wifi", "messages": 1}])
        );
        let calls = sink.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "tok-wifi");
        assert_eq!(calls[0].1[0].as_flex().unwrap().0, "WiFi");
    }

    #[tokio::test]
    async fn bad_signature_is_not_dispatched() {
        for sig in [None, Some("bm9wZQ==".to_owned())] {
            let sink = Arc::new(RecordingSink::default());
            let router = adapter(Some(SECRET), sink.clone()).build_router();
            let (status, _, res) = send(router, post(WIFI_POSTBACK, sig)).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(json_of(&res), json!({"status": "error", "message": "invalid signature"}));
            assert!(sink.calls.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn unmatched_events_yield_null_entries() {
        let body = r#"{"events":[
            {"type":"message","replyToken":"t1","message":{"type":"text","id":"1","text":"謝謝"}},
            {"type":"unfollow","source":{"type":"user","userId":"U2"}},
            {"type":"message","replyToken":"t2","message":{"type":"text","id":"2","text":"MENU"}}
        ]}"#;
        let sink = Arc::new(RecordingSink::default());
        let router = adapter(None, sink.clone()).build_router();
        let (_, _, res) = send(router, post(body, None)).await;

        assert_eq!(
            json_of(&res),
            json!([null, null, {"event": "message", "template": "main_menu", "messages": 1}])
        );
        assert_eq!(sink.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn standby_events_without_token_are_not_replied() {
        let body = r#"{"events":[
            {"type":"postback","mode":"standby","postback":{"data":"FAQ_WIFI"},"timestamp":1700000000000},
            {"type":"message","mode":"standby","message":{"type":"text","id":"9","text":"menu"}}
        ]}"#;
        let sink = Arc::new(RecordingSink::default());
        let router = adapter(None, sink.clone()).build_router();
        let (status, _, res) = send(router, post(body, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&res), json!([null, null]));
        assert!(sink.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn reply_failure_still_returns_200() {
        let sink = Arc::new(RecordingSink {
            fail_with: Some(400),
            ..Default::default()
        });
        let router = adapter(None, sink.clone()).build_router();
        let (status, _, res) = send(router, post(WIFI_POSTBACK, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json_of(&res),
            json!({"status": "error", "message": "reply API returned 400: Invalid reply token"})
        );
    }

    #[tokio::test]
    async fn malformed_event_does_not_stop_the_rest() {
        let body = r#"{"events":[
            {"type":"postback","replyToken":"t1"},
            {"type":"follow","replyToken":"t2"}
        ]}"#;
        let sink = Arc::new(RecordingSink::default());
        let router = adapter(None, sink.clone()).build_router();
        let (status, _, res) = send(router, post(body, None)).await;

        assert_eq!(status, StatusCode::OK);
        let res = json_of(&res);
        assert_eq!(res["status"], "error");
        assert!(res["message"].as_str().unwrap().starts_with("malformed event: postback"));

        let calls = sink.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "t2");
        assert_eq!(calls[0].1.len(), 2);
    }

    #[test]
    fn skip_signature_clears_secret() {
        let mut config = BotConfig {
            channel_secret: Some("s".into()),
            ..Default::default()
        };
        assert_eq!(LineConfig::from_bot_config(&config).channel_secret.as_deref(), Some("s"));

        config.skip_signature = true;
        assert!(LineConfig::from_bot_config(&config).channel_secret.is_none());
    }
}
