pub mod error;
pub mod event;
pub mod flex;
pub mod message;
pub mod traits;

pub use error::StayError;
pub use event::{
    FollowEvent, MessageContent, MessageEvent, PostbackContent, PostbackEvent, ReplyToken, Source,
    WebhookBody, WebhookEvent,
};
pub use flex::{
    Action, Align, BubbleSize, ButtonHeight, ButtonStyle, FlexBox, FlexBubble, FlexButton,
    FlexComponent, FlexSeparator, FlexText, Layout, Weight,
};
pub use message::{OutboundMessage, MAX_REPLY_MESSAGES};
pub use traits::ReplySink;
