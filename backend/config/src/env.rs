//! Runtime configuration read from the process environment.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::defaults::*;

/// Error returned when a required env var is absent or empty.
#[derive(Debug, thiserror::Error)]
#[error("Missing env var \"{var_name}\" ({purpose})")]
pub struct MissingEnvVarError {
    pub var_name: String,
    pub purpose: String,
}

/// Hello Stay runtime configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfig {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Route the platform delivers events to
    pub webhook_path: String,
    /// LINE channel access token (Bearer for the reply API)
    pub channel_access_token: Option<String>,
    /// LINE channel secret (HMAC key for `x-line-signature`)
    pub channel_secret: Option<String>,
    /// Reply API base URL
    pub api_base: String,
    pub skip_signature: bool,
    pub reply_timeout_secs: u64,
    /// Optional YAML property profile override
    pub profile_path: Option<PathBuf>,
    /// Directory for rolling NDJSON logs; console only when unset
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            webhook_path: DEFAULT_WEBHOOK_PATH.to_string(),
            channel_access_token: None,
            channel_secret: None,
            api_base: DEFAULT_LINE_API_BASE.to_string(),
            skip_signature: false,
            reply_timeout_secs: DEFAULT_REPLY_TIMEOUT_SECS,
            profile_path: None,
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Credentials needed to talk to the reply API.
#[derive(Debug, Clone)]
pub struct LineCredentials {
    pub channel_access_token: String,
    pub channel_secret: String,
}

impl BotConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_vars(env: &HashMap<String, String>) -> Self {
        let get = |key: &str| env.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        Self {
            bind_address: get("HELLOSTAY_BIND")
                .unwrap_or(DEFAULT_BIND_ADDRESS)
                .to_string(),
            port: get("HELLOSTAY_PORT")
                .or_else(|| get("PORT"))
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            webhook_path: get("HELLOSTAY_WEBHOOK_PATH")
                .unwrap_or(DEFAULT_WEBHOOK_PATH)
                .to_string(),
            channel_access_token: get("CHANNEL_ACCESS_TOKEN").map(str::to_string),
            channel_secret: get("CHANNEL_SECRET").map(str::to_string),
            api_base: get("LINE_API_BASE")
                .unwrap_or(DEFAULT_LINE_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            skip_signature: get("LINE_SKIP_SIGNATURE")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            reply_timeout_secs: get("LINE_REPLY_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REPLY_TIMEOUT_SECS),
            profile_path: get("HELLOSTAY_PROFILE").map(PathBuf::from),
            log_dir: get("HELLOSTAY_LOG_DIR").map(PathBuf::from),
            log_level: get("RUST_LOG").unwrap_or(DEFAULT_LOG_LEVEL).to_string(),
        }
    }

    /// Both channel credentials, or an error naming the first missing one.
    pub fn credentials(&self) -> Result<LineCredentials, MissingEnvVarError> {
        let channel_access_token = self
            .channel_access_token
            .clone()
            .ok_or_else(|| MissingEnvVarError {
                var_name: "CHANNEL_ACCESS_TOKEN".into(),
                purpose: "authenticates reply API calls".into(),
            })?;
        let channel_secret = self.channel_secret.clone().ok_or_else(|| MissingEnvVarError {
            var_name: "CHANNEL_SECRET".into(),
            purpose: "verifies webhook signatures".into(),
        })?;
        Ok(LineCredentials {
            channel_access_token,
            channel_secret,
        })
    }

    /// Whether inbound batches must carry a valid `x-line-signature`.
    pub fn verify_signature(&self) -> bool {
        !self.skip_signature && self.channel_secret.is_some()
    }

    pub fn reply_timeout(&self) -> Duration {
        Duration::from_secs(self.reply_timeout_secs)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Snapshot safe to log: secrets are masked.
    pub fn redacted(&self) -> serde_json::Value {
        match serde_json::to_value(self) {
            Ok(v) => crate::redact::redact(&v),
            Err(_) => serde_json::Value::Null,
        }
    }
}
