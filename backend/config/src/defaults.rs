//! Default values for the bot runtime and the property profile.

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";
pub const DEFAULT_LINE_API_BASE: &str = "https://api.line.me";
pub const DEFAULT_REPLY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Links
pub const BOOKING_LIFF: &str = "https://liff.line.me/2008582194-wrJ4dqXq";
pub const SIGNATURE_LIFF: &str = "https://liff.line.me/2008582194-vLLGoM4M";
pub const SELF_CHECKIN_LIFF: &str = "https://liff.line.me/2008582194-P7EnGkNk";
pub const ROOMS_HELLO: &str = "https://www.hello-stay.com/hellohouse/rooms.html";
pub const ROOMS_GODIN: &str = "https://www.hello-stay.com/godin/rooms.html";
pub const TRAFFIC: &str = "https://www.hello-stay.com/hellohouse/traffic.html";
pub const HOUSE_RULES: &str = "https://www.hello-stay.com/hellohouse/agreement.html";

// Palette
pub const COLOR_SYSTEM: &str = "#70665C";
pub const COLOR_ACTION: &str = "#9C8673";
pub const COLOR_ALERT: &str = "#B58282";
pub const COLOR_THEME: &str = "#2E7D32";
pub const COLOR_FAQ_BG: &str = "#5D4037";
pub const COLOR_SECOND_HOUSE: &str = "#8D6E63";

pub const ADMIN_PHONE: &str = "0932828922";

pub const WIFI_SSID: &str = "Hellohouse";
pub const WIFI_PASSWORD: &str = "kao828922";

/// Google Drive file id of the neighbourhood map.
pub const MAP_IMAGE_FILE_ID: &str = "1y65bNZ07t_6L2CCLiW0bPgLRT4Vc_LcK";

// Google Maps search queries for the landmarks the directions card uses.
pub const ROUTE_1_QUERY: &str = "七福便當+高雄";
pub const ROUTE_2_QUERY: &str = "阿英排骨飯+高雄";
pub const ROUTE_3_QUERY: &str = "老蔡虱目魚粥+高雄";
pub const GODIN_START_QUERY: &str = "老蔡虱目魚粥+高雄";
