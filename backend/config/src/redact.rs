//! Config redaction: mask channel credentials before a snapshot is logged or printed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static SENSITIVE_KEYS: &[&str] = &[
    "channelAccessToken",
    "channel_access_token",
    "channelSecret",
    "channel_secret",
    "accessToken",
    "token",
    "secret",
    "password",
];

/// Mobile and landline numbers as they appear in Taiwan (`0932828922`) or E.164.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{9,15}$").unwrap());

/// Redact a config JSON value, replacing sensitive strings with a 4-char hint + `***`.
pub fn redact(value: &Value) -> Value {
    redact_recursive(value, "")
}

fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn mask(s: &str) -> String {
    if s.chars().count() > 4 {
        format!("{}***", s.chars().take(4).collect::<String>())
    } else {
        "***".to_string()
    }
}

fn redact_recursive(value: &Value, key: &str) -> Value {
    match value {
        Value::String(s) if !s.is_empty() && (is_sensitive_key(key) || PHONE_PATTERN.is_match(s)) => {
            Value::String(mask(s))
        }
        Value::Array(arr) => Value::Array(arr.iter().map(|v| redact_recursive(v, key)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), redact_recursive(v, k)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn masks_channel_credentials() {
        let v = json!({"channelAccessToken": "eyJhbGciOiJIUzI1NiJ9", "channelSecret": "abc"});
        let r = redact(&v);
        assert_eq!(r["channelAccessToken"], "eyJh***");
        assert_eq!(r["channelSecret"], "***");
    }

    #[test]
    fn masks_phone_numbers_anywhere() {
        let r = redact(&json!({"adminPhone": "0932828922", "contacts": ["+886932828922"]}));
        assert_eq!(r["adminPhone"], "0932***");
        assert_eq!(r["contacts"][0], "+886***");
    }

    #[test]
    fn leaves_plain_values_alone() {
        let v = json!({"webhookPath": "/webhook", "port": 3000, "channelSecret": null});
        assert_eq!(redact(&v), v);
    }
}
