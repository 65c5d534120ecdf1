use async_trait::async_trait;

pub mod line;
pub mod line_receive;
pub mod line_send;

pub use line::{LineAdapter, LineConfig};
pub use line_send::LineReplyClient;

/// A messaging platform the bot answers on.
#[async_trait]
pub trait ChannelAdapter: Send + Sync {
    /// Human-readable adapter name for logging.
    fn name(&self) -> &str;

    /// Axum sub-router for the adapter's inbound webhook endpoints.
    fn build_router(&self) -> axum::Router {
        axum::Router::new()
    }

    /// Announce readiness once the server is about to listen.
    async fn start(&self) -> anyhow::Result<()>;
}
