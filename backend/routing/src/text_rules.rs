//! Keyword rules for free-text messages.

use hellostay_cards::Template;
use regex::{Regex, RegexBuilder};

/// Greetings and menu words that open the main menu.
pub const MENU_PATTERN: &str = "選單|主選單|menu|home|功能|幫助|你好|哈囉|hi|hello";
/// Words asking for the FAQ list.
pub const QA_PATTERN: &str = "qa|常見問題|q&a|ＱＡ";

/// A case-insensitive substring pattern and the template it selects.
#[derive(Debug, Clone)]
pub struct TextRule {
    pattern: Regex,
    template: Template,
}

impl TextRule {
    pub fn new(pattern: &str, template: Template) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern, template })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn template(&self) -> Template {
        self.template
    }
}

/// Ordered rule list; the first rule that matches wins.
#[derive(Debug, Clone)]
pub struct TextRules {
    rules: Vec<TextRule>,
}

impl TextRules {
    pub fn new(rules: Vec<TextRule>) -> Self {
        Self { rules }
    }

    /// Menu keywords first, then QA keywords.
    pub fn standard() -> Result<Self, regex::Error> {
        Ok(Self::new(vec![
            TextRule::new(MENU_PATTERN, Template::MainMenu)?,
            TextRule::new(QA_PATTERN, Template::QaMenu)?,
        ]))
    }

    pub fn resolve(&self, text: &str) -> Option<Template> {
        let text = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&text))
            .map(TextRule::template)
    }
}
