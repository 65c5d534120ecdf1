//! LINE Webhook Receiver
//!
//! Signature validation and batch decoding for inbound deliveries.

use axum::http::HeaderMap;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hellostay_core::WebhookBody;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

pub const SIGNATURE_HEADER: &str = "x-line-signature";

type HmacSha256 = Hmac<Sha256>;

/// `base64(HMAC-SHA256(channel_secret, body))`, the value LINE puts in the header.
pub fn sign(channel_secret: &str, body: &[u8]) -> String {
    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return String::new(),
    };
    mac.update(body);
    BASE64.encode(mac.finalize().into_bytes())
}

/// Check a delivery's signature against the raw body. Constant-time.
pub fn verify_signature(channel_secret: &str, signature: &str, body: &[u8]) -> bool {
    let Ok(expected) = BASE64.decode(signature.trim()) else {
        return false;
    };
    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

pub fn signature_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok())
}

/// Decode the delivery body. Anything unparseable reads as an empty batch,
/// which the webhook answers as a verification ping.
pub fn decode_batch(body: &[u8]) -> WebhookBody {
    if body.is_empty() {
        return WebhookBody::default();
    }
    match serde_json::from_slice(body) {
        Ok(batch) => batch,
        Err(err) => {
            warn!("[LINE] Unparseable webhook body: {}", err);
            WebhookBody::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "8c570fa6dd201bb328f1c1eac23a96d8";

    #[test]
    fn signed_body_verifies() {
        let body = br#"{"events":[]}"#;
        let sig = sign(SECRET, body);
        assert!(verify_signature(SECRET, &sig, body));
    }

    #[test]
    fn tampered_body_or_wrong_secret_fails() {
        let body = br#"{"events":[{"type":"follow"}]}"#;
        let sig = sign(SECRET, body);
        assert!(!verify_signature(SECRET, &sig, br#"{"events":[{"type":"unfollow"}]}"#));
        assert!(!verify_signature("other-secret", &sig, body));
    }

    #[test]
    fn garbage_signature_fails() {
        assert!(!verify_signature(SECRET, "not base64 !!", b"{}"));
        assert!(!verify_signature(SECRET, "", b"{}"));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Line-Signature", "abc=".parse().unwrap());
        assert_eq!(signature_header(&headers), Some("abc="));
        assert_eq!(signature_header(&HeaderMap::new()), None);
    }

    #[test]
    fn bad_json_reads_as_empty_batch() {
        assert!(decode_batch(b"not json").is_verification_ping());
        assert!(decode_batch(b"").is_verification_ping());
        assert!(decode_batch(br#"{"events":null}"#).is_verification_ping());
        assert_eq!(decode_batch(br#"{"events":[{"type":"follow"}]}"#).events().len(), 1);
    }
}
