//! Way-finding: walking routes from nearby landmarks, and the map image.

use hellostay_config::{maps_search_url, PropertyProfile};
use hellostay_core::{
    Action, BubbleSize, FlexBox, FlexBubble, FlexButton, FlexComponent, FlexSeparator, FlexText,
    OutboundMessage,
};

use crate::blocks::{header, DANGER, STRONG, SUBTLE};

/// A landmark to start walking from.
struct Route<'a> {
    title: &'a str,
    hint: &'a str,
    button: &'a str,
    query: &'a str,
}

impl Route<'_> {
    fn components(&self) -> [FlexComponent; 3] {
        [
            FlexText::new(self.title)
                .bold()
                .size("sm")
                .color(STRONG)
                .margin("sm")
                .into(),
            FlexText::new(self.hint)
                .size("sm")
                .color(SUBTLE)
                .wrap()
                .into(),
            FlexButton::secondary(Action::uri(self.button, maps_search_url(self.query)))
                .small()
                .into(),
        ]
    }
}

fn house_title(text: &str, color: &str) -> FlexText {
    FlexText::new(text).bold().color(color).size("md")
}

fn parking_note(text: &str) -> FlexComponent {
    FlexText::new(text).color(DANGER).size("xs").wrap().into()
}

pub fn directions(profile: &PropertyProfile) -> OutboundMessage {
    let colors = &profile.colors;
    let queries = &profile.directions;

    let main_routes = [
        Route {
            title: "1. 大公路 (七福便當)：",
            hint: "面對便當店走「左手邊」巷子，直走30公尺右手邊抵達。",
            button: "📍 導航至七福便當",
            query: &queries.route_1,
        },
        Route {
            title: "2. 富野路 (阿英排骨)：",
            hint: "面對店面走「左手邊」巷子，直走左前方80公尺抵達。",
            button: "📍 導航至阿英排骨",
            query: &queries.route_2,
        },
        Route {
            title: "3. 瀨南街 (老蔡虱目魚)：",
            hint: "面對店面走「右手邊」巷子，路口右轉，數來第二間。",
            button: "📍 導航至老蔡虱目魚",
            query: &queries.route_3,
        },
    ];
    let godin_route = Route {
        title: "唯一路線 (老蔡虱目魚)：",
        hint: "面對虱目魚店面走「右手邊」巷子，進來右手邊第六間。",
        button: "📍 導航至老蔡虱目魚",
        query: &queries.godin_start,
    };

    let mut contents: Vec<FlexComponent> = vec![
        house_title("🚗 你好哇寓所 (Hello House)", &colors.theme).into(),
        parking_note("⚠️ 巷弄內無法開車，請先停好車。"),
    ];
    contents.extend(main_routes.iter().flat_map(Route::components));
    contents.push(FlexSeparator::with_margin("lg").into());
    contents.push(
        house_title("🏚️ 溝頂民宿 (Godin B&B)", &colors.second_house)
            .margin("lg")
            .into(),
    );
    contents.push(parking_note("⚠️ 位置隱密車進不來，請在瀨南街停車。"));
    contents.extend(godin_route.components());

    let bubble = FlexBubble::new()
        .size(BubbleSize::Mega)
        .header(header("🗺️ 迷路指南", &colors.system))
        .body(FlexBox::vertical(contents).spacing("md"));
    OutboundMessage::flex("迷路指南", bubble)
}

/// The hand-drawn area map, served straight from the file host.
pub fn map_image(profile: &PropertyProfile) -> OutboundMessage {
    OutboundMessage::image(profile.map_image_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_navigation_buttons_follow_profile_queries() {
        let mut profile = PropertyProfile::default();
        profile.directions.route_2 = "Somewhere+Else".into();

        let msg = directions(&profile);
        let (alt, bubble) = msg.as_flex().unwrap();
        assert_eq!(alt, "迷路指南");

        let uris: Vec<_> = bubble
            .actions()
            .into_iter()
            .map(|a| match a {
                Action::Uri { uri, .. } => uri.clone(),
                Action::Postback { data, .. } => data.clone(),
            })
            .collect();
        assert_eq!(uris.len(), 4);
        assert_eq!(uris[1], maps_search_url("Somewhere+Else"));
        assert!(uris.iter().all(|u| u.starts_with("https://www.google.com/maps/search/")));
    }

    #[test]
    fn directions_bubble_is_mega() {
        let v = serde_json::to_value(directions(&PropertyProfile::default())).unwrap();
        assert_eq!(v["contents"]["size"], "mega");
        assert_eq!(v["contents"]["body"]["spacing"], "md");
    }

    #[test]
    fn map_image_uses_same_url_for_preview() {
        let v = serde_json::to_value(map_image(&PropertyProfile::default())).unwrap();
        assert_eq!(v["type"], "image");
        assert_eq!(v["originalContentUrl"], v["previewImageUrl"]);
    }
}
