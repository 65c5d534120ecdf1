//! Property profile: the constants every card is built from.
//!
//! All sections default to the live property's values, so a YAML override
//! only needs to name what changes.

use serde::{Deserialize, Serialize};

use crate::defaults::*;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyProfile {
    pub urls: Urls,
    pub colors: Palette,
    pub admin_phone: AdminPhone,
    pub wifi: WifiInfo,
    pub map_image: MapImage,
    pub directions: Directions,
}

impl PropertyProfile {
    /// `tel:` URI for the host's phone.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.admin_phone.0)
    }

    /// Direct-view URL of the map image.
    pub fn map_image_url(&self) -> String {
        format!(
            "https://drive.google.com/uc?export=view&id={}",
            self.map_image.file_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Urls {
    pub booking: String,
    pub signature: String,
    pub self_checkin: String,
    pub rooms_hello: String,
    pub rooms_godin: String,
    pub traffic: String,
    pub house_rules: String,
}

impl Default for Urls {
    fn default() -> Self {
        Self {
            booking: BOOKING_LIFF.into(),
            signature: SIGNATURE_LIFF.into(),
            self_checkin: SELF_CHECKIN_LIFF.into(),
            rooms_hello: ROOMS_HELLO.into(),
            rooms_godin: ROOMS_GODIN.into(),
            traffic: TRAFFIC.into(),
            house_rules: HOUSE_RULES.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    /// Neutral header color used by most cards.
    pub system: String,
    pub action: String,
    pub alert: String,
    pub theme: String,
    pub faq_bg: String,
    /// Accent for the second house (溝頂民宿).
    pub second_house: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            system: COLOR_SYSTEM.into(),
            action: COLOR_ACTION.into(),
            alert: COLOR_ALERT.into(),
            theme: COLOR_THEME.into(),
            faq_bg: COLOR_FAQ_BG.into(),
            second_house: COLOR_SECOND_HOUSE.into(),
        }
    }
}

impl Palette {
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("system", &self.system),
            ("action", &self.action),
            ("alert", &self.alert),
            ("theme", &self.theme),
            ("faqBg", &self.faq_bg),
            ("secondHouse", &self.second_house),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminPhone(pub String);

impl Default for AdminPhone {
    fn default() -> Self {
        Self(ADMIN_PHONE.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiInfo {
    pub ssid: String,
    pub password: String,
}

impl Default for WifiInfo {
    fn default() -> Self {
        Self {
            ssid: WIFI_SSID.into(),
            password: WIFI_PASSWORD.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapImage {
    pub file_id: String,
}

impl Default for MapImage {
    fn default() -> Self {
        Self {
            file_id: MAP_IMAGE_FILE_ID.into(),
        }
    }
}

/// Google Maps search queries for the landmarks guests navigate from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Directions {
    pub route_1: String,
    pub route_2: String,
    pub route_3: String,
    pub godin_start: String,
}

impl Default for Directions {
    fn default() -> Self {
        Self {
            route_1: ROUTE_1_QUERY.into(),
            route_2: ROUTE_2_QUERY.into(),
            route_3: ROUTE_3_QUERY.into(),
            godin_start: GODIN_START_QUERY.into(),
        }
    }
}

/// Google Maps search link for a query such as `七福便當+高雄`.
pub fn maps_search_url(query: &str) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={query}")
}
