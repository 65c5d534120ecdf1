use serde::Serialize;

use crate::flex::FlexBubble;

/// Most messages the reply API accepts for one reply token.
pub const MAX_REPLY_MESSAGES: usize = 5;

/// A message sent back to the guest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    Text {
        text: String,
    },
    Flex {
        #[serde(rename = "altText")]
        alt_text: String,
        contents: FlexBubble,
    },
    Image {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        OutboundMessage::Text { text: text.into() }
    }

    pub fn flex(alt_text: impl Into<String>, contents: FlexBubble) -> Self {
        OutboundMessage::Flex {
            alt_text: alt_text.into(),
            contents,
        }
    }

    /// An image message using the same URL for the full-size and preview image.
    pub fn image(url: impl Into<String>) -> Self {
        let url = url.into();
        OutboundMessage::Image {
            original_content_url: url.clone(),
            preview_image_url: url,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::Text { .. } => "text",
            OutboundMessage::Flex { .. } => "flex",
            OutboundMessage::Image { .. } => "image",
        }
    }

    pub fn as_flex(&self) -> Option<(&str, &FlexBubble)> {
        match self {
            OutboundMessage::Flex { alt_text, contents } => Some((alt_text, contents)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flex::{FlexBox, FlexText};
    use serde_json::json;

    #[test]
    fn flex_message_uses_alt_text_key() {
        let msg = OutboundMessage::flex(
            "WiFi",
            FlexBubble::new().body(FlexBox::vertical(vec![FlexText::new("x").into()])),
        );
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["type"], "flex");
        assert_eq!(v["altText"], "WiFi");
        assert_eq!(v["contents"]["type"], "bubble");
    }

    #[test]
    fn image_message_shares_url() {
        let msg = OutboundMessage::image("https://example.com/map.jpg");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "type": "image",
                "originalContentUrl": "https://example.com/map.jpg",
                "previewImageUrl": "https://example.com/map.jpg"
            })
        );
    }
}
