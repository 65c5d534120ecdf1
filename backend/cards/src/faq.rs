//! FAQ answer cards.

use hellostay_config::PropertyProfile;
use hellostay_core::{
    Action, FlexBox, FlexBubble, FlexButton, FlexSeparator, FlexText, OutboundMessage,
};

use crate::blocks::{call_host, header, title_bar, BODY, DANGER, DANGER_BG, MUTED, STRONG, SUBTLE};

const WIFI_HEADER: &str = "#546E7A";
const WIFI_PANEL: &str = "#ECEFF1";
const WIFI_PASSWORD: &str = "#5D8AA8";

pub fn wifi(profile: &PropertyProfile) -> OutboundMessage {
    let panel = FlexBox::vertical(vec![
        FlexText::new(format!("ID: {}", profile.wifi.ssid))
            .size("md")
            .color(WIFI_HEADER)
            .bold()
            .center()
            .into(),
        FlexSeparator::with_margin("md").into(),
        FlexText::new(&profile.wifi.password)
            .size("3xl")
            .color(WIFI_PASSWORD)
            .bold()
            .center()
            .margin("md")
            .into(),
    ])
    .background(WIFI_PANEL)
    .corner_radius("md")
    .padding_all("lg");

    let bubble = FlexBubble::new()
        .header(title_bar("📶 WiFi 連線", WIFI_HEADER))
        .body(FlexBox::vertical(vec![panel.into()]));
    OutboundMessage::flex("WiFi", bubble)
}

pub fn entertainment(profile: &PropertyProfile) -> OutboundMessage {
    let colors = &profile.colors;
    let body = FlexBox::vertical(vec![
        FlexText::new("✅ 提供項目：")
            .bold()
            .color(&colors.theme)
            .size("sm")
            .into(),
        FlexText::new("• 電視\n• 麻將 (含手動桌、牌具、牌尺)\n• 撲克牌")
            .size("sm")
            .color(BODY)
            .wrap()
            .margin("sm")
            .line_spacing("6px")
            .into(),
        FlexSeparator::with_margin("md").into(),
        FlexText::new("🚫 無 KTV：\n住宅區請勿自備麥克風喧嘩。")
            .size("sm")
            .color(&colors.alert)
            .wrap()
            .margin("md")
            .into(),
    ]);

    let bubble = FlexBubble::new()
        .header(header("🀄 娛樂設施", &colors.system))
        .body(body);
    OutboundMessage::flex("娛樂設施", bubble)
}

pub fn amenities(profile: &PropertyProfile) -> OutboundMessage {
    let colors = &profile.colors;
    let body = FlexBox::vertical(vec![
        FlexText::new("✅ 提供：大浴巾、沐浴乳、洗髮乳、吹風機。")
            .size("sm")
            .color(BODY)
            .wrap()
            .into(),
        FlexSeparator::with_margin("md").into(),
        FlexText::new("❌ 不提供：牙膏牙刷、刮鬍刀、毛巾等個人盥洗用具。")
            .size("sm")
            .color(&colors.alert)
            .wrap()
            .margin("md")
            .into(),
    ]);

    let bubble = FlexBubble::new()
        .header(header("🧴 備品說明", &colors.system))
        .body(body);
    OutboundMessage::flex("備品", bubble)
}

/// Standard check-in time, plus what guests can do while they wait.
pub fn early_checkin(profile: &PropertyProfile) -> OutboundMessage {
    let colors = &profile.colors;
    let body = FlexBox::vertical(vec![
        FlexBox::baseline(vec![
            FlexText::new("標準入住時間").color(MUTED).size("sm").flex(2).into(),
            FlexText::new("16:00 後")
                .color(STRONG)
                .size("xl")
                .flex(3)
                .bold()
                .into(),
        ])
        .into(),
        FlexSeparator::with_margin("md").into(),
        FlexText::new("若房務提早清潔完畢，我們很樂意讓您提早入內休息。")
            .size("sm")
            .color(BODY)
            .wrap()
            .margin("md")
            .into(),
        FlexText::new("💡 在那之前，您可以...")
            .bold()
            .size("sm")
            .color(&colors.action)
            .margin("md")
            .into(),
    ]);

    let footer = FlexBox::vertical(vec![
        FlexButton::secondary(Action::uri("📍 查看交通導航", &profile.urls.traffic)).into(),
        FlexButton::secondary(Action::uri("📸 先辦自助登記", &profile.urls.self_checkin)).into(),
        FlexButton::primary(call_host(profile, "📞 聯絡管家確認"))
            .color(&colors.action)
            .into(),
    ])
    .spacing("sm");

    let bubble = FlexBubble::new()
        .header(header("🕒 關於提早入住", &colors.action))
        .body(body)
        .footer(footer);
    OutboundMessage::flex("提早入住說明", bubble)
}

/// Kitchen rules differ per house: the main house allows cooking, the second does not.
pub fn cooking(profile: &PropertyProfile) -> OutboundMessage {
    let colors = &profile.colors;
    let warning = FlexBox::vertical(vec![
        FlexText::new("⚠️ 特別注意")
            .color(DANGER)
            .bold()
            .size("sm")
            .into(),
        FlexText::new("因為沒有排煙設備，千萬不可以明火或自行帶電磁爐烹飪！")
            .color(DANGER)
            .size("sm")
            .wrap()
            .margin("sm")
            .bold()
            .into(),
    ])
    .background(DANGER_BG)
    .corner_radius("md")
    .padding_all("md")
    .margin("lg");

    let body = FlexBox::vertical(vec![
        FlexText::new("🏠 你好哇寓所 (主館)")
            .bold()
            .color(&colors.theme)
            .size("sm")
            .into(),
        house_note("✅ 歡迎開伙！\n提供大中島與相關廚房用品。"),
        FlexSeparator::with_margin("lg").into(),
        FlexText::new("🏠 溝頂民宿 (二館)")
            .bold()
            .color(&colors.second_house)
            .size("sm")
            .margin("lg")
            .into(),
        house_note("❌ 無法開伙\n僅提供微波爐與簡易流理臺。"),
        warning.into(),
    ]);

    let bubble = FlexBubble::new()
        .header(header("🍳 廚房烹飪說明", &colors.system))
        .body(body);
    OutboundMessage::flex("烹飪說明", bubble)
}

fn house_note(text: &str) -> hellostay_core::FlexComponent {
    FlexText::new(text)
        .size("sm")
        .color(BODY)
        .wrap()
        .margin("xs")
        .line_spacing("4px")
        .into()
}

pub fn drinking_water(profile: &PropertyProfile) -> OutboundMessage {
    let colors = &profile.colors;
    let body = FlexBox::vertical(vec![
        FlexText::new("一樓廚房水槽右邊的水龍頭：")
            .bold()
            .size("md")
            .color(STRONG)
            .wrap()
            .into(),
        FlexSeparator::with_margin("md").into(),
        FlexText::new("✅ 左側 (小的)：RO 過濾水")
            .bold()
            .size("sm")
            .color(&colors.theme)
            .margin("md")
            .into(),
        FlexText::new("我們有定期更換濾心，請安心飲用。")
            .size("xs")
            .color(SUBTLE)
            .wrap()
            .into(),
        FlexSeparator::with_margin("md").into(),
        FlexText::new("❌ 右側 (大的)：自來水")
            .bold()
            .size("sm")
            .color(&colors.alert)
            .margin("md")
            .into(),
        FlexText::new("請小心不要誤喝！")
            .size("xs")
            .color(SUBTLE)
            .wrap()
            .into(),
    ]);

    let bubble = FlexBubble::new()
        .header(header("🚰 飲用水說明", &colors.system))
        .body(body);
    OutboundMessage::flex("飲用水說明", bubble)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wifi_shows_profile_credentials() {
        let mut profile = PropertyProfile::default();
        profile.wifi.ssid = "Guest".into();
        profile.wifi.password = "hunter22".into();

        let msg = wifi(&profile);
        let (alt, bubble) = msg.as_flex().unwrap();
        assert_eq!(alt, "WiFi");
        assert_eq!(bubble.texts(), ["📶 WiFi 連線", "ID: Guest", "hunter22"]);
    }

    #[test]
    fn wifi_header_is_unpadded() {
        let v = serde_json::to_value(wifi(&PropertyProfile::default())).unwrap();
        assert!(v["contents"]["header"].get("paddingAll").is_none());
        assert_eq!(v["contents"]["body"]["contents"][0]["paddingAll"], "lg");
    }

    #[test]
    fn early_checkin_has_footer_actions() {
        let msg = early_checkin(&PropertyProfile::default());
        let (_, bubble) = msg.as_flex().unwrap();
        let footer = bubble.footer.as_ref().expect("footer");
        assert_eq!(footer.contents.len(), 3);
        assert_eq!(bubble.actions().last().map(|a| a.label()), Some("📞 聯絡管家確認"));
    }

    #[test]
    fn palette_flows_into_cards() {
        let mut profile = PropertyProfile::default();
        profile.colors.alert = "#FF0000".into();

        let v = serde_json::to_value(amenities(&profile)).unwrap();
        assert_eq!(v["contents"]["body"]["contents"][2]["color"], "#FF0000");
    }

    #[test]
    fn cooking_warns_about_second_house() {
        let msg = cooking(&PropertyProfile::default());
        let (alt, bubble) = msg.as_flex().unwrap();
        assert_eq!(alt, "烹飪說明");
        assert!(bubble.texts().iter().any(|t| t.contains("沒有排煙設備")));
    }

    #[test]
    fn water_alt_text() {
        let v = serde_json::to_value(drinking_water(&PropertyProfile::default())).unwrap();
        assert_eq!(v["altText"], "飲用水說明");
        assert_eq!(v["contents"]["body"]["contents"].as_array().unwrap().len(), 7);
    }
}
