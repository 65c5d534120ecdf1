use std::fmt;
use std::str::FromStr;

use hellostay_config::PropertyProfile;
use hellostay_core::OutboundMessage;
use serde::Serialize;

use crate::{directions, faq, menus};

/// Every reply the bot knows how to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    Welcome,
    MainMenu,
    RoomSelection,
    QaMenu,
    Wifi,
    MapImage,
    Entertainment,
    Amenities,
    EarlyCheckin,
    Cooking,
    DrinkingWater,
    Directions,
}

impl Template {
    pub const ALL: [Template; 12] = [
        Template::Welcome,
        Template::MainMenu,
        Template::RoomSelection,
        Template::QaMenu,
        Template::Wifi,
        Template::MapImage,
        Template::Entertainment,
        Template::Amenities,
        Template::EarlyCheckin,
        Template::Cooking,
        Template::DrinkingWater,
        Template::Directions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Template::Welcome => "welcome",
            Template::MainMenu => "main_menu",
            Template::RoomSelection => "room_selection",
            Template::QaMenu => "qa_menu",
            Template::Wifi => "wifi",
            Template::MapImage => "map_image",
            Template::Entertainment => "entertainment",
            Template::Amenities => "amenities",
            Template::EarlyCheckin => "early_checkin",
            Template::Cooking => "cooking",
            Template::DrinkingWater => "drinking_water",
            Template::Directions => "directions",
        }
    }

    /// Build the reply messages for this template. Pure: the same profile
    /// always yields the same messages.
    pub fn render(&self, profile: &PropertyProfile) -> Vec<OutboundMessage> {
        match self {
            Template::Welcome => menus::welcome(profile),
            Template::MainMenu => vec![menus::main_menu(profile)],
            Template::RoomSelection => vec![menus::room_selection(profile)],
            Template::QaMenu => vec![menus::qa_menu(profile)],
            Template::Wifi => vec![faq::wifi(profile)],
            Template::MapImage => vec![directions::map_image(profile)],
            Template::Entertainment => vec![faq::entertainment(profile)],
            Template::Amenities => vec![faq::amenities(profile)],
            Template::EarlyCheckin => vec![faq::early_checkin(profile)],
            Template::Cooking => vec![faq::cooking(profile)],
            Template::DrinkingWater => vec![faq::drinking_water(profile)],
            Template::Directions => vec![directions::directions(profile)],
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template: {0}")]
pub struct UnknownTemplate(pub String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Template::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}
