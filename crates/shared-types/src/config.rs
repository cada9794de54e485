use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Branding and contact details shown in the header and footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub support_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "LearnHub".to_string(),
            tagline: "Learn at your own pace, with teachers who know your name.".to_string(),
            support_email: "support@learnhub.example".to_string(),
        }
    }
}

/// Router behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Animate the scroll back to the top after navigating.
    pub smooth_scroll: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub navigation: NavigationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}
