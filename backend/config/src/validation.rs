//! Config validation: catch typos in the runtime config and property profile
//! before they surface as broken buttons in a guest's chat.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::env::BotConfig;
use crate::profile::PropertyProfile;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9-]{6,20}$").unwrap());

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the runtime config and the profile together.
pub fn validate(config: &BotConfig, profile: &PropertyProfile) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_server(config, &mut report);
    validate_channel(config, &mut report);
    validate_profile(profile, &mut report);
    report
}

fn validate_server(config: &BotConfig, report: &mut ValidationReport) {
    if !config.webhook_path.starts_with('/') {
        report.error("webhookPath", "must start with '/'");
    }
    if config.webhook_path == "/api/health" {
        report.error("webhookPath", "collides with the health endpoint");
    }
    if config.reply_timeout_secs == 0 {
        report.error("replyTimeoutSecs", "must be greater than zero");
    }
    if !config.api_base.starts_with("http://") && !config.api_base.starts_with("https://") {
        report.error("apiBase", "must be an http(s) URL");
    }
}

fn validate_channel(config: &BotConfig, report: &mut ValidationReport) {
    if config.channel_access_token.is_none() {
        report.error("channelAccessToken", "CHANNEL_ACCESS_TOKEN is not set; replies cannot be sent");
    }
    if config.channel_secret.is_none() {
        report.warn(
            "channelSecret",
            "CHANNEL_SECRET is not set; webhook signatures will not be verified",
        );
    } else if config.skip_signature {
        report.warn("skipSignature", "signature verification is disabled");
    }
}

fn validate_profile(profile: &PropertyProfile, report: &mut ValidationReport) {
    let urls = &profile.urls;
    for (name, url) in [
        ("booking", &urls.booking),
        ("signature", &urls.signature),
        ("selfCheckin", &urls.self_checkin),
        ("roomsHello", &urls.rooms_hello),
        ("roomsGodin", &urls.rooms_godin),
        ("traffic", &urls.traffic),
        ("houseRules", &urls.house_rules),
    ] {
        if !url.starts_with("https://") {
            report.error(format!("urls.{name}"), "button URIs must use https");
        }
    }

    for (name, color) in profile.colors.entries() {
        if !HEX_COLOR.is_match(color) {
            report.error(format!("colors.{name}"), format!("'{color}' is not a #RRGGBB color"));
        }
    }

    if !PHONE.is_match(&profile.admin_phone.0) {
        report.error("adminPhone", "must be digits, optionally with a leading '+'");
    }
    if profile.wifi.password.is_empty() {
        report.warn("wifi.password", "empty; the WiFi card will show a blank password");
    }
    if profile.map_image.file_id.trim().is_empty() {
        report.error("mapImage.fileId", "required for the map image reply");
    }
}
