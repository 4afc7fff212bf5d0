//! Site configuration.
//!
//! A CSR bundle has no runtime environment, so overrides are baked in at
//! build time (`TERRA_FORM_ENDPOINT`, `TERRA_PLATFORM_URL`,
//! `TERRA_WHATSAPP_URL`). Unset or blank variables fall back to the
//! production values below.

use thiserror::Error;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xrbakkqa";
pub const DEFAULT_PLATFORM_URL: &str = "https://terra-precision-platform.onrender.com";
pub const DEFAULT_WHATSAPP_URL: &str = "https://wa.me/5516996469093";
pub const CONTACT_EMAIL: &str = "contato@terraprecision.com.br";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} is empty")]
    Empty { key: &'static str },
    #[error("{key} must be an http(s) URL, got `{value}`")]
    NotHttp { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Mail-forwarding endpoint the lead form posts to
    pub form_endpoint: String,
    /// Customer platform the "Entrar" button redirects to
    pub platform_url: String,
    pub whatsapp_url: String,
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            platform_url: DEFAULT_PLATFORM_URL.to_string(),
            whatsapp_url: DEFAULT_WHATSAPP_URL.to_string(),
            contact_email: CONTACT_EMAIL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Configuration with the overrides captured when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::with_overrides(
            option_env!("TERRA_FORM_ENDPOINT"),
            option_env!("TERRA_PLATFORM_URL"),
            option_env!("TERRA_WHATSAPP_URL"),
        )
    }

    pub fn with_overrides(
        form_endpoint: Option<&str>,
        platform_url: Option<&str>,
        whatsapp_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (slot, value) in [
            (&mut config.form_endpoint, form_endpoint),
            (&mut config.platform_url, platform_url),
            (&mut config.whatsapp_url, whatsapp_url),
        ] {
            if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
                *slot = value.to_string();
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("TERRA_FORM_ENDPOINT", &self.form_endpoint)?;
        check_url("TERRA_PLATFORM_URL", &self.platform_url)?;
        check_url("TERRA_WHATSAPP_URL", &self.whatsapp_url)?;
        if self.contact_email.trim().is_empty() {
            return Err(ConfigError::Empty { key: "contact_email" });
        }
        Ok(())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

fn check_url(key: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { key });
    }
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        return Err(ConfigError::NotHttp {
            key,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mailto(), "mailto:contato@terraprecision.com.br");
    }

    #[test]
    fn overrides_replace_defaults() {
        let config =
            SiteConfig::with_overrides(Some("http://localhost:8080/form"), Some("http://localhost:5173"), None)
                .unwrap();
        assert_eq!(config.form_endpoint, "http://localhost:8080/form");
        assert_eq!(config.platform_url, "http://localhost:5173");
        assert_eq!(config.whatsapp_url, DEFAULT_WHATSAPP_URL);
    }

    #[test]
    fn blank_override_falls_back() {
        let config = SiteConfig::with_overrides(Some("   "), None, Some("")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn rejects_non_http_urls() {
        let err = SiteConfig::with_overrides(Some("ftp://example.com"), None, None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotHttp {
                key: "TERRA_FORM_ENDPOINT",
                value: "ftp://example.com".into()
            }
        );
        assert!(err.to_string().contains("ftp://example.com"));
    }

    #[test]
    fn rejects_empty_fields() {
        let config = SiteConfig {
            platform_url: String::new(),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Empty {
                key: "TERRA_PLATFORM_URL"
            })
        );
    }
}
