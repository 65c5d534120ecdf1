//! Flex Message document model.
//!
//! Only the subset the bot's cards use: bubbles made of boxes, text,
//! buttons and separators. Unset properties are left out of the JSON so the
//! platform applies its own defaults.

use serde::Serialize;

/// Layout direction of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Vertical,
    Horizontal,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonHeight {
    Sm,
    Md,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BubbleSize {
    Nano,
    Micro,
    Kilo,
    Mega,
    Giga,
}

/// What a button does when tapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Opens a URL (`https:`, `tel:`, LIFF links).
    Uri { label: String, uri: String },
    /// Sends a postback event carrying `data` back to the webhook.
    Postback { label: String, data: String },
}

impl Action {
    pub fn uri(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Action::Uri {
            label: label.into(),
            uri: uri.into(),
        }
    }

    pub fn postback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Action::Postback {
            label: label.into(),
            data: data.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Action::Uri { label, .. } | Action::Postback { label, .. } => label,
        }
    }
}

/// A bubble container: the unit a flex message carries.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "bubble")]
pub struct FlexBubble {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<BubbleSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<FlexBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<FlexBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FlexBox>,
}

impl FlexBubble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: BubbleSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn header(mut self, header: FlexBox) -> Self {
        self.header = Some(header);
        self
    }

    pub fn body(mut self, body: FlexBox) -> Self {
        self.body = Some(body);
        self
    }

    pub fn footer(mut self, footer: FlexBox) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Every action reachable from this bubble, in document order.
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        for block in [&self.header, &self.body, &self.footer].into_iter().flatten() {
            block.collect_actions(&mut out);
        }
        out
    }

    /// Every text string in this bubble, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for block in [&self.header, &self.body, &self.footer].into_iter().flatten() {
            block.collect_texts(&mut out);
        }
        out
    }
}

/// Each component struct carries its own `type` tag, so the enum itself is
/// serialized untagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlexComponent {
    Box(FlexBox),
    Text(FlexText),
    Button(FlexButton),
    Separator(FlexSeparator),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "box", rename_all = "camelCase")]
pub struct FlexBox {
    pub layout: Layout,
    pub contents: Vec<FlexComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_all: Option<String>,
}

impl FlexBox {
    pub fn new(layout: Layout, contents: Vec<FlexComponent>) -> Self {
        Self {
            layout,
            contents,
            spacing: None,
            margin: None,
            background_color: None,
            corner_radius: None,
            padding_all: None,
        }
    }

    pub fn vertical(contents: Vec<FlexComponent>) -> Self {
        Self::new(Layout::Vertical, contents)
    }

    pub fn horizontal(contents: Vec<FlexComponent>) -> Self {
        Self::new(Layout::Horizontal, contents)
    }

    pub fn baseline(contents: Vec<FlexComponent>) -> Self {
        Self::new(Layout::Baseline, contents)
    }

    pub fn spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn corner_radius(mut self, radius: impl Into<String>) -> Self {
        self.corner_radius = Some(radius.into());
        self
    }

    pub fn padding_all(mut self, padding: impl Into<String>) -> Self {
        self.padding_all = Some(padding.into());
        self
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a Action>) {
        for c in &self.contents {
            match c {
                FlexComponent::Box(b) => b.collect_actions(out),
                FlexComponent::Button(b) => out.push(&b.action),
                FlexComponent::Text(_) | FlexComponent::Separator(_) => {}
            }
        }
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        for c in &self.contents {
            match c {
                FlexComponent::Box(b) => b.collect_texts(out),
                FlexComponent::Text(t) => out.push(&t.text),
                FlexComponent::Button(_) | FlexComponent::Separator(_) => {}
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "text", rename_all = "camelCase")]
pub struct FlexText {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<String>,
}

impl FlexText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
            color: None,
            weight: None,
            align: None,
            wrap: None,
            margin: None,
            flex: None,
            line_spacing: None,
        }
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = Some(Weight::Bold);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = Some(true);
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn flex(mut self, flex: u32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn line_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.line_spacing = Some(spacing.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "button")]
pub struct FlexButton {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<ButtonHeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

impl FlexButton {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            style: None,
            color: None,
            height: None,
            margin: None,
        }
    }

    pub fn primary(action: Action) -> Self {
        Self::new(action).style(ButtonStyle::Primary)
    }

    pub fn secondary(action: Action) -> Self {
        Self::new(action).style(ButtonStyle::Secondary)
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn small(mut self) -> Self {
        self.height = Some(ButtonHeight::Sm);
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "separator")]
pub struct FlexSeparator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

impl FlexSeparator {
    pub fn with_margin(margin: impl Into<String>) -> Self {
        Self {
            margin: Some(margin.into()),
        }
    }
}

impl From<FlexBox> for FlexComponent {
    fn from(b: FlexBox) -> Self {
        FlexComponent::Box(b)
    }
}

impl From<FlexText> for FlexComponent {
    fn from(t: FlexText) -> Self {
        FlexComponent::Text(t)
    }
}

impl From<FlexButton> for FlexComponent {
    fn from(b: FlexButton) -> Self {
        FlexComponent::Button(b)
    }
}

impl From<FlexSeparator> for FlexComponent {
    fn from(s: FlexSeparator) -> Self {
        FlexComponent::Separator(s)
    }
}
