//! `hellostay-config`: runtime configuration for the Hello Stay bot.
//!
//! Provides:
//! - Env-driven runtime config (bind address, webhook path, LINE credentials)
//! - The property profile every card is built from, with YAML override
//! - Validation of both
//! - Redaction for safe logging

pub mod defaults;
pub mod env;
pub mod io;
pub mod profile;
pub mod redact;
pub mod validation;

pub use env::{BotConfig, LineCredentials, MissingEnvVarError};
pub use io::{load_profile, parse_profile};
pub use profile::{
    maps_search_url, AdminPhone, Directions, MapImage, Palette, PropertyProfile, Urls, WifiInfo,
};
pub use redact::redact;
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::Result;

/// Load the profile named by the config and validate both.
///
/// Validation problems are logged; only unreadable profile files are errors.
pub async fn load_and_validate(config: &BotConfig) -> Result<PropertyProfile> {
    let profile = load_profile(config.profile_path.as_deref()).await?;

    let report = validate(config, &profile);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }

    Ok(profile)
}
