//! CLI Status Command
//!
//! Queries `/api/health` on a local server.

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

pub fn health_url(port: u16) -> String {
    format!("http://localhost:{port}/api/health")
}

pub async fn run(port: u16) -> Result<()> {
    println!("Hello Stay status: checking...");
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .context("building HTTP client")?;

    match client.get(health_url(port)).send().await {
        Ok(resp) => {
            let body: Value = resp.json().await.context("decoding health response")?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Err(_) => {
            println!("Hello Stay is not running on port {port}");
        }
    }
    Ok(())
}
