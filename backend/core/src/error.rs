use thiserror::Error;

/// Top-level error type for the Hello Stay bot.
#[derive(Debug, Error)]
pub enum StayError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("malformed event: {0}")]
    MalformedEvent(String),

    #[error("reply API returned {status}: {message}")]
    ReplyFailed { status: u16, message: String },

    #[error("reply carries {0} messages, the platform accepts at most 5")]
    TooManyMessages(usize),

    #[error("http transport error: {0}")]
    Http(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
