//! Navigation cards: welcome, main menu, room selection, QA menu.

use hellostay_config::PropertyProfile;
use hellostay_core::{
    Action, FlexBox, FlexBubble, FlexButton, FlexComponent, FlexSeparator, FlexText, OutboundMessage,
};

use crate::blocks::{call_host, faq_button, header, postback, prompt, BODY};
use crate::keys::PostbackKey;

pub const WELCOME_TEXT: &str = "🏠 歡迎來到 你好哇寓所與溝頂民宿 🤖\n\n我是AI智慧服務，很高興為您服務！\n我們的目標是讓您「動動手指就能搞定一切」。\n\n對話畫面下方有三個功能按鈕，可以協助您輕鬆完成自助服務：\n\n👉 1. 查詢/預定檔期（即時連動日曆）\n    或點擊此段文字下方【立即預訂】按鈕，\n    即可即時查詢兩館的空房日期與預估參考房價，\n    快速完成線上諮詢。\n\n👉 2. 功能選單服務（入住資訊一鍵查）\n    或點擊此段文字下方【查看功能】按鈕，\n    會彈出豐富的功能卡片，包含：\n    • 房型介紹、交通指引、停車資訊\n    • 線上簽約、自助入住登記（超重要！）\n\n👉 3. 常見問題集 (QA)、緊急聯絡管家\n\n期待您的光臨！";

/// Greeting for new followers: the welcome text, then a booking / menu call to action.
pub fn welcome(profile: &PropertyProfile) -> Vec<OutboundMessage> {
    let cta = FlexBubble::new().body(
        FlexBox::vertical(vec![
            FlexButton::primary(Action::uri("立即預訂 (查詢房況)", &profile.urls.booking))
                .color(&profile.colors.theme)
                .into(),
            FlexButton::secondary(postback("查看功能 (主選單)", PostbackKey::MenuMain)).into(),
        ])
        .spacing("md"),
    );

    vec![
        OutboundMessage::text(WELCOME_TEXT),
        OutboundMessage::flex("主功能引導", cta),
    ]
}

pub fn main_menu(profile: &PropertyProfile) -> OutboundMessage {
    let colors = &profile.colors;
    let urls = &profile.urls;

    let row = |margin: &str, left: FlexButton, right: FlexButton| -> FlexComponent {
        FlexBox::horizontal(vec![left.small().into(), right.small().into()])
            .spacing("sm")
            .margin(margin)
            .into()
    };

    let body = FlexBox::vertical(vec![
        prompt("請選擇您需要的服務：").into(),
        FlexSeparator::with_margin("md").into(),
        row(
            "md",
            FlexButton::primary(postback("🏠 房型介紹", PostbackKey::MenuRooms)).color(&colors.theme),
            FlexButton::secondary(Action::uri("💡 入住須知", &urls.house_rules)),
        ),
        row(
            "sm",
            FlexButton::secondary(Action::uri("📝 線上簽約", &urls.signature)),
            FlexButton::secondary(Action::uri("📸 自助登記", &urls.self_checkin)).color(&colors.action),
        ),
        row(
            "sm",
            FlexButton::secondary(Action::uri("🅿️ 停車資訊", &urls.traffic)),
            FlexButton::primary(call_host(profile, "🆘 緊急連絡")).color(&colors.alert),
        ),
    ])
    .spacing("md");

    let bubble = FlexBubble::new()
        .header(header("你好哇寓所 | 服務選單", &colors.system))
        .body(body);
    OutboundMessage::flex("主選單", bubble)
}

pub fn room_selection(profile: &PropertyProfile) -> OutboundMessage {
    let colors = &profile.colors;
    let body = FlexBox::vertical(vec![
        FlexText::new("請選擇您想查看房型的民宿：")
            .size("sm")
            .color(BODY)
            .center()
            .into(),
        FlexSeparator::with_margin("md").into(),
        FlexButton::secondary(Action::uri("你好哇寓所 (主館)", &profile.urls.rooms_hello))
            .small()
            .color(&colors.theme)
            .into(),
        FlexButton::secondary(Action::uri("溝頂民宿 (二館)", &profile.urls.rooms_godin))
            .small()
            .margin("md")
            .color(&colors.second_house)
            .into(),
    ])
    .spacing("md");

    let bubble = FlexBubble::new()
        .header(header("🏠 請選擇館別", &colors.system))
        .body(body);
    OutboundMessage::flex("選擇館別", bubble)
}

pub fn qa_menu(profile: &PropertyProfile) -> OutboundMessage {
    let colors = &profile.colors;
    let body = FlexBox::vertical(vec![
        prompt("我們精選客人常見問題給您參考，希望快速協助到您：")
            .wrap()
            .into(),
        FlexSeparator::with_margin("md").into(),
        faq_button("📶 請問 WiFi 密碼多少？", PostbackKey::FaqWifi, "md"),
        faq_button("🀄 請問有麻將或 KTV 嗎？", PostbackKey::FaqFun, "sm"),
        faq_button("🚰 請問有提供飲用水嗎？", PostbackKey::FaqWater, "sm"),
        faq_button("🧴 請問有提供備品嗎？", PostbackKey::FaqItems, "sm"),
        faq_button("🕒 請問可以提早入住嗎？", PostbackKey::FaqEarly, "sm"),
        faq_button("🍳 請問可以開伙烹飪嗎？", PostbackKey::FaqCook, "sm"),
        FlexButton::secondary(postback("🗺️ 我找不到路怎麼辦？", PostbackKey::FaqLost))
            .color(&colors.action)
            .small()
            .margin("sm")
            .into(),
        FlexSeparator::with_margin("lg").into(),
        FlexButton::primary(call_host(profile, "📞 立刻打給管家"))
            .color(&colors.alert)
            .small()
            .margin("lg")
            .into(),
    ])
    .spacing("md");

    let bubble = FlexBubble::new()
        .header(header("💡 常見問題集", &colors.faq_bg))
        .body(body);
    OutboundMessage::flex("QA選單", bubble)
}
