//! Hero section configuration.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use wasm_bindgen::JsValue;

use crate::error::{PortfolioError, PortfolioResult};

/// An icon button under the hero copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SocialLink {
    pub href: String,
    /// Icon class token, e.g. `linkedin`.
    pub icon: String,
    /// Tooltip text.
    pub label: String,
}

impl SocialLink {
    fn new(href: &str, icon: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            icon: icon.to_string(),
            label: label.to_string(),
        }
    }

    pub fn defaults() -> Vec<SocialLink> {
        vec![
            SocialLink::new("https://linkedin.com/in/your-profile", "linkedin", "LinkedIn"),
            SocialLink::new("mailto:0xnihilist@gmail.com", "mail", "Email"),
            SocialLink::new("resume.pdf", "user", "Resume"),
        ]
    }
}

/// The pill above the profile image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct StatusBadge {
    pub status: String,
    pub text: String,
    pub icon: String,
}

impl Default for StatusBadge {
    fn default() -> Self {
        Self {
            status: "Working on".to_string(),
            text: "Existence".to_string(),
            icon: "cardano".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeroConfig {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub profile_image: String,
    /// Replaces the default links when present.
    #[serde(default)]
    #[ts(optional)]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(default)]
    pub status: StatusBadge,
}

impl HeroConfig {
    pub fn from_js(value: JsValue) -> PortfolioResult<Self> {
        let config: HeroConfig = serde_wasm_bindgen::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::InvalidConfig("name must not be empty".into()));
        }
        if self.profile_image.trim().is_empty() {
            return Err(PortfolioError::InvalidConfig(
                "profileImage must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Configured links, or the defaults when none were given.
    pub fn links(&self) -> Vec<SocialLink> {
        self.social_links
            .clone()
            .unwrap_or_else(SocialLink::defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> HeroConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults_when_links_omitted() {
        let config = parse(r#"{"name": "Ada", "profileImage": "me.png"}"#);
        config.validate().unwrap();

        let links = config.links();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].label, "LinkedIn");
        assert_eq!(links[0].href, "https://linkedin.com/in/your-profile");
        assert_eq!(links[1].href, "mailto:0xnihilist@gmail.com");
        assert_eq!(links[2].icon, "user");

        assert_eq!(config.status.status, "Working on");
        assert_eq!(config.status.text, "Existence");
    }

    #[test]
    fn test_explicit_links_replace_defaults() {
        let config = parse(
            r#"{
                "name": "Ada",
                "title": "Engineer",
                "subtitle": "Builds things",
                "profileImage": "me.png",
                "socialLinks": [{"href": "https://example.com", "icon": "globe", "label": "Site"}],
                "status": {"status": "Building"}
            }"#,
        );
        assert_eq!(config.links(), vec![SocialLink::new("https://example.com", "globe", "Site")]);
        assert_eq!(config.status.status, "Building");
        assert_eq!(config.status.text, "Existence");
    }

    #[test]
    fn test_empty_links_are_kept() {
        let config = parse(r#"{"name": "Ada", "profileImage": "me.png", "socialLinks": []}"#);
        assert!(config.links().is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_required_fields() {
        let config = parse(r#"{"name": "  ", "profileImage": "me.png"}"#);
        assert!(matches!(config.validate(), Err(PortfolioError::InvalidConfig(_))));

        let config = parse(r#"{"name": "Ada", "profileImage": ""}"#);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("profileImage"));
    }

    #[test]
    fn test_missing_name_fails_to_parse() {
        assert!(serde_json::from_str::<HeroConfig>(r#"{"profileImage": "me.png"}"#).is_err());
    }

    #[test]
    fn export_bindings_heroconfig() {
        HeroConfig::export_all().unwrap();
    }
}
