//! Postback keys carried by card buttons and dispatched by the router.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostbackKey {
    MenuMain,
    MenuRooms,
    FaqWifi,
    FaqFun,
    FaqItems,
    FaqEarly,
    FaqCook,
    FaqWater,
    FaqLost,
    MapImage,
}

impl PostbackKey {
    pub const ALL: [PostbackKey; 10] = [
        PostbackKey::MenuMain,
        PostbackKey::MenuRooms,
        PostbackKey::FaqWifi,
        PostbackKey::FaqFun,
        PostbackKey::FaqItems,
        PostbackKey::FaqEarly,
        PostbackKey::FaqCook,
        PostbackKey::FaqWater,
        PostbackKey::FaqLost,
        PostbackKey::MapImage,
    ];

    /// Wire value placed in the button's `data` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostbackKey::MenuMain => "MENU_MAIN",
            PostbackKey::MenuRooms => "MENU_ROOMS",
            PostbackKey::FaqWifi => "FAQ_WIFI",
            PostbackKey::FaqFun => "FAQ_FUN",
            PostbackKey::FaqItems => "FAQ_ITEMS",
            PostbackKey::FaqEarly => "FAQ_EARLY",
            PostbackKey::FaqCook => "FAQ_COOK",
            PostbackKey::FaqWater => "FAQ_WATER",
            PostbackKey::FaqLost => "FAQ_LOST",
            PostbackKey::MapImage => "MAP_IMAGE",
        }
    }
}

impl fmt::Display for PostbackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postback data that names none of the known keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized postback key: {0}")]
pub struct UnrecognizedKey(pub String);

impl FromStr for PostbackKey {
    type Err = UnrecognizedKey;

    /// Exact, case-sensitive match on the wire value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostbackKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnrecognizedKey(s.to_string()))
    }
}
