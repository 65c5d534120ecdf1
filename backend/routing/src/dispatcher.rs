/// Event dispatcher: map one inbound webhook event to at most one reply.
///
/// Follow events get the welcome pair, postbacks go through a key table and
/// text messages through the ordered keyword rules. Anything else is ignored.
use std::collections::HashMap;
use std::sync::Arc;

use hellostay_cards::{PostbackKey, Template};
use hellostay_config::PropertyProfile;
use hellostay_core::{OutboundMessage, WebhookEvent};
use serde::Serialize;
use tracing::debug;

use crate::text_rules::TextRules;

/// The reply chosen for an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub template: Template,
    pub messages: Vec<OutboundMessage>,
}

/// Template a postback key selects.
pub fn postback_template(key: PostbackKey) -> Template {
    match key {
        PostbackKey::MenuMain => Template::MainMenu,
        PostbackKey::MenuRooms => Template::RoomSelection,
        PostbackKey::FaqWifi => Template::Wifi,
        PostbackKey::FaqFun => Template::Entertainment,
        PostbackKey::FaqItems => Template::Amenities,
        PostbackKey::FaqEarly => Template::EarlyCheckin,
        PostbackKey::FaqCook => Template::Cooking,
        PostbackKey::FaqWater => Template::DrinkingWater,
        PostbackKey::FaqLost => Template::Directions,
        PostbackKey::MapImage => Template::MapImage,
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    profile: Arc<PropertyProfile>,
    postbacks: HashMap<PostbackKey, Template>,
    text_rules: TextRules,
}

impl Dispatcher {
    pub fn new(profile: Arc<PropertyProfile>, text_rules: TextRules) -> Self {
        let postbacks = PostbackKey::ALL
            .into_iter()
            .map(|key| (key, postback_template(key)))
            .collect();
        Self {
            profile,
            postbacks,
            text_rules,
        }
    }

    /// Dispatcher with the standard keyword rules.
    pub fn from_profile(profile: PropertyProfile) -> Result<Self, regex::Error> {
        Ok(Self::new(Arc::new(profile), TextRules::standard()?))
    }

    pub fn profile(&self) -> &PropertyProfile {
        &self.profile
    }

    /// Pick the template for an event without rendering it.
    pub fn select(&self, event: &WebhookEvent) -> Option<Template> {
        match event {
            WebhookEvent::Follow(_) => Some(Template::Welcome),
            WebhookEvent::Postback(e) => {
                let data = e.postback.data.as_str();
                match data.parse::<PostbackKey>() {
                    Ok(key) => self.postbacks.get(&key).copied(),
                    Err(err) => {
                        debug!(error = %err, "Ignoring postback");
                        None
                    }
                }
            }
            WebhookEvent::Message(e) => {
                let text = e.message.text()?;
                let template = self.text_rules.resolve(text);
                if template.is_none() {
                    debug!(chars = text.chars().count(), "No keyword rule matched");
                }
                template
            }
            WebhookEvent::Unsupported { kind } => {
                debug!(kind = %kind, "Ignoring unsupported event");
                None
            }
        }
    }

    /// Select and render the reply for an event. `None` means no reply.
    pub fn dispatch(&self, event: &WebhookEvent) -> Option<Reply> {
        let template = self.select(event)?;
        Some(Reply {
            template,
            messages: template.render(&self.profile),
        })
    }
}
