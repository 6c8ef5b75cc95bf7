use anyhow::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Cloud function serving the portfolio API
pub const DEFAULT_API_URL: &str =
    "https://us-central1-junkielabs-57977.cloudfunctions.net/apiPortfolio";

/// Public reCAPTCHA site key
pub const DEFAULT_RECAPTCHA_KEY: &str = "6Lci95YiAAAAAOfkpaWwNSHiX5Ye7KT9ZOw-HYCv";

pub const API_URL_VAR: &str = "FOLIO_API_URL";
pub const RECAPTCHA_KEY_VAR: &str = "FOLIO_RECAPTCHA_KEY";

static CURRENT: Lazy<Environment> = Lazy::new(|| {
    let site = SiteConfig::load().unwrap_or_default();
    Environment::resolve(&site, |name| std::env::var(name).ok())
});

/// Optional on-disk overrides (~/.config/folio/config.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recaptcha_key: Option<String>,

    #[serde(default)]
    pub theme: ThemeOverrides,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeOverrides {
    /// Shade name ("DEFAULT", "50" .. "900") -> hex colour
    #[serde(default)]
    pub primary: BTreeMap<String, String>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("folio");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, falling back to defaults
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(SiteConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        Ok(SiteConfig::default())
    }
}

/// Process-wide settings, resolved once and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub production: bool,
    pub api_url: String,
    pub recaptcha_key: String,
}

impl Environment {
    /// The settings for this process
    pub fn current() -> &'static Environment {
        &CURRENT
    }

    /// Per value: runtime variable > site config > build-time variable > literal default.
    /// Empty strings count as unset.
    pub fn resolve(site: &SiteConfig, var: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = pick([
            var(API_URL_VAR),
            site.api_url.clone(),
            option_env!("FOLIO_API_URL").map(str::to_string),
        ])
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let recaptcha_key = pick([
            var(RECAPTCHA_KEY_VAR),
            site.recaptcha_key.clone(),
            option_env!("FOLIO_RECAPTCHA_KEY").map(str::to_string),
        ])
        .unwrap_or_else(|| DEFAULT_RECAPTCHA_KEY.to_string());

        Self {
            production: !cfg!(debug_assertions),
            api_url,
            recaptcha_key,
        }
    }
}

fn pick<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
}
