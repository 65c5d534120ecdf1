//! Property profile loading.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

use crate::profile::PropertyProfile;

/// Load a YAML property profile.
///
/// Returns the built-in profile if `path` is `None` or does not exist.
pub async fn load_profile(path: Option<&Path>) -> Result<PropertyProfile> {
    let Some(path) = path else {
        return Ok(PropertyProfile::default());
    };

    if !path.exists() {
        warn!(path = %path.display(), "Profile file does not exist; using built-in profile");
        return Ok(PropertyProfile::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read profile file: {}", path.display()))?;

    let profile = parse_profile(&raw)
        .with_context(|| format!("Failed to parse profile YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded property profile");
    Ok(profile)
}

/// Parse profile YAML; an empty document yields the built-in profile.
pub fn parse_profile(raw: &str) -> Result<PropertyProfile> {
    if raw.trim().is_empty() {
        return Ok(PropertyProfile::default());
    }
    Ok(serde_yaml::from_str(raw)?)
}
