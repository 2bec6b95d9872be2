use std::fmt;

use serde::Deserialize;
use tracing::{debug, info, warn};

pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://api.api-ninjas.com/v1/quotes";
pub const DEFAULT_API_KEY_HEADER: &str = "X-Api-Key";
pub const DEFAULT_REFRESH_MINUTES: u32 = 15;
pub const DEFAULT_FONTS_HREF: &str = "https://fonts.googleapis.com/css2?\
    family=Poppins:wght@400;500;600;700&family=Pacifico&display=swap";
pub const DEFAULT_TITLE: &str = "Today, Mary";
pub const DEFAULT_TAGLINE: &str = "For the girl who gets it done! ✨";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// One layer of configuration as written in a TOML file. Every field is
/// optional; later layers override earlier ones field by field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub quote: QuoteSection,
    #[serde(default)]
    pub fonts: FontsSection,
    #[serde(default)]
    pub header: HeaderSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteSection {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub api_key_header: Option<String>,
    pub refresh_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontsSection {
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderSection {
    pub title: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub api_key_header: String,
    pub refresh_minutes: u32,
}

impl QuoteConfig {
    pub fn refresh_millis(&self) -> u32 {
        self.refresh_minutes.saturating_mul(60_000)
    }
}

// Keeps the credential out of logs.
impl fmt::Debug for QuoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_header", &self.api_key_header)
            .field("refresh_minutes", &self.refresh_minutes)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub quote: QuoteConfig,
    pub fonts_href: String,
    pub title: String,
    pub tagline: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quote: QuoteConfig {
                endpoint: DEFAULT_QUOTE_ENDPOINT.to_string(),
                api_key: None,
                api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
                refresh_minutes: DEFAULT_REFRESH_MINUTES,
            },
            fonts_href: DEFAULT_FONTS_HREF.to_string(),
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves layers in order, starting from the built-in defaults.
    pub fn from_layers<'a, I>(layers: I) -> Self
    where
        I: IntoIterator<Item = &'a ConfigFile>,
    {
        let mut cfg = Self::default();
        for layer in layers {
            cfg.merge(layer);
        }
        cfg
    }

    /// Resolves the bundled layer plus an optional runtime layer. A runtime
    /// layer that fails to parse or validate is logged and skipped.
    #[tracing::instrument(skip_all)]
    pub fn load(bundled: &str, runtime: Option<&str>) -> Result<Self, ConfigError> {
        let base = parse_config(bundled)?;
        let mut layers = vec![base];

        match runtime.map(parse_config) {
            Some(Ok(layer)) => {
                info!("applying runtime configuration");
                layers.push(layer);
            }
            Some(Err(error)) => {
                warn!(%error, "ignoring invalid runtime configuration");
            }
            None => {
                debug!("no runtime configuration supplied");
            }
        }

        let cfg = Self::from_layers(&layers);
        if cfg.quote.api_key.is_none() {
            warn!("quote api key not configured; quotes will fall back");
        }
        debug!(?cfg, "resolved configuration");
        Ok(cfg)
    }

    fn merge(&mut self, layer: &ConfigFile) {
        let quote = &layer.quote;
        if let Some(endpoint) = &quote.endpoint {
            self.quote.endpoint = endpoint.clone();
        }
        if let Some(key) = &quote.api_key {
            let key = key.trim();
            self.quote.api_key = (!key.is_empty()).then(|| key.to_string());
        }
        if let Some(header) = &quote.api_key_header {
            self.quote.api_key_header = header.clone();
        }
        if let Some(minutes) = quote.refresh_minutes {
            self.quote.refresh_minutes = minutes;
        }
        if let Some(href) = &layer.fonts.href {
            self.fonts_href = href.clone();
        }
        if let Some(title) = &layer.header.title {
            self.title = title.clone();
        }
        if let Some(tagline) = &layer.header.tagline {
            self.tagline = tagline.clone();
        }
    }
}

pub fn parse_config(content: &str) -> Result<ConfigFile, ConfigError> {
    let config: ConfigFile = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ConfigFile) -> Result<(), ConfigError> {
    let blank = |value: &Option<String>| value.as_deref().is_some_and(|v| v.trim().is_empty());

    if blank(&config.quote.endpoint) {
        return Err(ConfigError::Validation(
            "quote.endpoint must not be empty".to_string(),
        ));
    }
    if blank(&config.quote.api_key_header) {
        return Err(ConfigError::Validation(
            "quote.api_key_header must not be empty".to_string(),
        ));
    }
    if config.quote.refresh_minutes == Some(0) {
        return Err(ConfigError::Validation(
            "quote.refresh_minutes must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
