use std::sync::Arc;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};

use hellostay_channels::ChannelAdapter;

/// Build the Axum router: the health endpoint plus every adapter's webhook routes.
pub fn build_router(adapters: &[Arc<dyn ChannelAdapter>]) -> Router {
    let mut app = Router::new().route("/api/health", get(health));

    for adapter in adapters {
        tracing::debug!(adapter = adapter.name(), "Mounting channel routes");
        app = app.merge(adapter.build_router());
    }

    app
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "hellostay",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
