//! CLI Preview Command
//!
//! Prints the reply a template would send, as JSON ready for the Flex simulator.

use anyhow::{bail, Result};
use serde_json::{json, Value};

use hellostay_cards::{PostbackKey, Template};
use hellostay_config::PropertyProfile;
use hellostay_routing::postback_template;

/// Accepts a template name (`wifi`, `early-checkin`) or a postback key (`FAQ_WIFI`).
pub fn resolve_target(target: &str) -> Result<Template> {
    if let Ok(key) = target.parse::<PostbackKey>() {
        return Ok(postback_template(key));
    }
    match target.parse::<Template>() {
        Ok(template) => Ok(template),
        Err(err) => {
            let names: Vec<_> = Template::ALL.iter().map(Template::name).collect();
            bail!("{err} (expected one of: {})", names.join(", "))
        }
    }
}

pub fn render(template: Template, profile: &PropertyProfile) -> Value {
    json!({
        "template": template,
        "messages": template.render(profile),
    })
}

pub fn run(target: &str, profile: &PropertyProfile) -> Result<()> {
    let template = resolve_target(target)?;
    println!("{}", serde_json::to_string_pretty(&render(template, profile))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postback_keys_and_names_both_resolve() {
        assert_eq!(resolve_target("FAQ_LOST").unwrap(), Template::Directions);
        assert_eq!(resolve_target("directions").unwrap(), Template::Directions);
        assert_eq!(resolve_target("main-menu").unwrap(), Template::MainMenu);
    }

    #[test]
    fn unknown_target_lists_choices() {
        let err = resolve_target("parking").unwrap_err().to_string();
        assert!(err.contains("unknown template: parking"));
        assert!(err.contains("drinking_water"));
    }

    #[test]
    fn rendered_preview_names_the_template() {
        let v = render(Template::Welcome, &PropertyProfile::default());
        assert_eq!(v["template"], "welcome");
        assert_eq!(v["messages"].as_array().unwrap().len(), 2);
        assert_eq!(v["messages"][1]["altText"], "主功能引導");
    }
}
