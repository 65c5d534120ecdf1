use async_trait::async_trait;

use crate::error::StayError;
use crate::event::ReplyToken;
use crate::message::OutboundMessage;

/// Delivers a reply to the messaging platform.
///
/// The live implementation calls the LINE reply API; tests use an in-memory
/// recorder.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Sink name for logging.
    fn name(&self) -> &str;

    /// Send `messages` using the event's single-use reply token.
    async fn reply(&self, token: &ReplyToken, messages: &[OutboundMessage]) -> Result<(), StayError>;
}
