use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Workspace `config.toml`, baked in at compile time.
const CONFIG_SOURCE: &str = include_str!("../../../config.toml");

/// Parse the embedded config and store it in the global `OnceLock`.
/// Only the first call has effect.
///
/// A parse failure leaves every setting at its default. The error is
/// returned so it can be logged once the logger exists.
pub fn load_config() -> Option<AppError> {
    let mut failure = None;
    CONFIG.get_or_init(|| match AppConfig::from_toml_str(CONFIG_SOURCE) {
        Ok(config) => config,
        Err(e) => {
            failure = Some(e);
            AppConfig::default()
        }
    });
    failure
}

/// Loaded config, or defaults if [`load_config`] hasn't run.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

/// Log level from config. Unknown names fall back to INFO.
pub fn log_level(config: &AppConfig) -> tracing::Level {
    config
        .logging
        .level
        .parse()
        .unwrap_or(tracing::Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        assert!(AppConfig::from_toml_str(CONFIG_SOURCE).is_ok());
    }

    #[test]
    fn load_is_idempotent() {
        let _ = load_config();
        assert!(load_config().is_none());
        assert!(!app_config().site.name.is_empty());
    }

    #[test]
    fn log_level_parsing() {
        let mut config = AppConfig::default();
        assert_eq!(log_level(&config), tracing::Level::INFO);

        config.logging.level = "debug".into();
        assert_eq!(log_level(&config), tracing::Level::DEBUG);

        config.logging.level = "chatty".into();
        assert_eq!(log_level(&config), tracing::Level::INFO);
    }
}
