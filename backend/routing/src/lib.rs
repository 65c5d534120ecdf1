pub mod dispatcher;
pub mod text_rules;

pub use dispatcher::{postback_template, Dispatcher, Reply};
pub use text_rules::{TextRule, TextRules, MENU_PATTERN, QA_PATTERN};
