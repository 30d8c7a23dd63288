//! Site configuration.
//!
//! Defaults live in `site/pronto.toml`, embedded into the bundle at build
//! time. Two values are usually injected by the deploy pipeline instead:
//! `PRONTO_WHATSAPP_PHONE` and `PRONTO_RELAY_ID`. Missing values are never an
//! error, the site just falls back to mailto links.

use serde::Deserialize;
use thiserror::Error;

/// Env var holding the chat phone number (E.164 digits, no `+`).
pub const ENV_WHATSAPP_PHONE: &str = "PRONTO_WHATSAPP_PHONE";
/// Env var holding the Formspree form id.
pub const ENV_RELAY_ID: &str = "PRONTO_RELAY_ID";

const RELAY_BASE: &str = "https://formspree.io/f/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Chat number used by quote buttons. `None` switches them to mailto.
    pub whatsapp_phone: Option<String>,
    /// Formspree form id. `None` switches the contact form to mailto.
    pub relay_id: Option<String>,
    /// Inbox used by every mailto fallback.
    pub contact_email: String,
    /// Number used where a chat link must always be produced
    /// (floating button, contact page).
    pub fallback_phone: String,
    /// Street address shown in the footer and on the map.
    pub address: String,
    /// Public origin, used for canonical URLs and JSON-LD.
    pub site_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_phone: None,
            relay_id: None,
            contact_email: "pronto2012@hotmail.com".to_string(),
            fallback_phone: "573144435763".to_string(),
            address: "Calle 14 Nro. 12-31 Of. 306, Bogotá, Colombia".to_string(),
            site_url: "https://www.pronto-office.com".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document. Unknown keys are ignored, missing keys keep
    /// their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Overlay values from an environment lookup (`PRONTO_*` keys).
    /// Blank values are treated as unset.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(phone) = non_blank(lookup(ENV_WHATSAPP_PHONE)) {
            self.whatsapp_phone = Some(phone);
        }
        if let Some(id) = non_blank(lookup(ENV_RELAY_ID)) {
            self.relay_id = Some(id);
        }
        self
    }

    /// Formspree endpoint, when a relay id is configured.
    pub fn relay_endpoint(&self) -> Option<String> {
        self.relay_id
            .as_deref()
            .map(|id| format!("{RELAY_BASE}{id}"))
    }

    /// Chat number with the fallback applied.
    pub fn chat_phone(&self) -> &str {
        self.whatsapp_phone
            .as_deref()
            .unwrap_or(self.fallback_phone.as_str())
    }

    /// Absolute URL for a site path.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), path)
    }

    fn normalized(mut self) -> Self {
        self.whatsapp_phone = non_blank(self.whatsapp_phone.take());
        self.relay_id = non_blank(self.relay_id.take());
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.whatsapp_phone.is_none());
        assert!(config.relay_endpoint().is_none());
        assert_eq!(config.chat_phone(), "573144435763");
    }

    #[test]
    fn test_load_partial_toml() {
        let config = SiteConfig::from_toml_str(
            r#"
            contact_email = "ventas@pronto-office.com"
            relay_id = "xyzabc"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.contact_email, "ventas@pronto-office.com");
        assert_eq!(
            config.relay_endpoint().as_deref(),
            Some("https://formspree.io/f/xyzabc")
        );
        assert_eq!(config.fallback_phone, SiteConfig::default().fallback_phone);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = SiteConfig::from_toml_str("whatsapp_phone = \"  \"\nrelay_id = \"\"")
            .expect("valid toml");
        assert!(config.whatsapp_phone.is_none());
        assert!(config.relay_id.is_none());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiteConfig::from_toml_str("relay_id = [").unwrap_err();
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn test_env_overrides() {
        let config = SiteConfig::default().with_env(|key| match key {
            ENV_WHATSAPP_PHONE => Some("573001112233".to_string()),
            ENV_RELAY_ID => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config.whatsapp_phone.as_deref(), Some("573001112233"));
        assert_eq!(config.chat_phone(), "573001112233");
        assert!(config.relay_id.is_none());
    }

    #[test]
    fn test_absolute_url() {
        let config = SiteConfig {
            site_url: "https://example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.absolute_url("/tableros"), "https://example.com/tableros");
    }
}
