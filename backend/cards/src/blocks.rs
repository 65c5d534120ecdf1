//! Shared building blocks the cards are composed from.

use hellostay_config::PropertyProfile;
use hellostay_core::{Action, FlexBox, FlexButton, FlexComponent, FlexText};

use crate::keys::PostbackKey;

// Ink colors for text that does not follow the property palette.
pub const WHITE: &str = "#FFFFFF";
pub const MUTED: &str = "#aaaaaa";
pub const BODY: &str = "#555555";
pub const SUBTLE: &str = "#666666";
pub const STRONG: &str = "#333333";
pub const DANGER: &str = "#C62828";
pub const DANGER_BG: &str = "#FFEBEE";

/// Header bar: white bold title on a colored background, no padding.
pub fn title_bar(title: &str, color: &str) -> FlexBox {
    FlexBox::vertical(vec![FlexText::new(title)
        .color(WHITE)
        .bold()
        .size("lg")
        .into()])
    .background(color)
}

/// Standard card header: a padded title bar.
pub fn header(title: &str, color: &str) -> FlexBox {
    title_bar(title, color).padding_all("lg")
}

/// Button action that dials the host.
pub fn call_host(profile: &PropertyProfile, label: &str) -> Action {
    Action::uri(label, profile.tel_uri())
}

pub fn postback(label: &str, key: PostbackKey) -> Action {
    Action::postback(label, key.as_str())
}

/// Small secondary FAQ button with the given top margin.
pub fn faq_button(label: &str, key: PostbackKey, margin: &str) -> FlexComponent {
    FlexButton::secondary(postback(label, key))
        .small()
        .margin(margin)
        .into()
}

/// Prompt line under a header: small, muted, centered.
pub fn prompt(text: &str) -> FlexText {
    FlexText::new(text).size("sm").color(MUTED).center()
}
