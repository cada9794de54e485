use pretty_assertions::assert_eq;
use shared_types::{AppConfig, AppErrorKind};

#[test]
fn test_empty_config_is_all_defaults() {
    assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let config = AppConfig::from_toml_str("[navigation]\nsmooth_scroll = false\n").unwrap();
    assert!(!config.navigation.smooth_scroll);
    assert_eq!(config.site, AppConfig::default().site);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_config_reports_config_error() {
    let err = AppConfig::from_toml_str("[site\nname = 1").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Config);
}
