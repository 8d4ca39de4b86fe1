//! Integration tests for configuration loading and saving.

use emoji_picker_config::{CONFIG_FILENAME, Config, ConfigError, FontConfig, LogLevel};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.channel_name, "emoji_picker");
    assert_eq!(config.log_level, LogLevel::Warn);
    assert!(config.fonts.use_system_fonts);
    assert!(config.fonts.font_dirs.is_empty());
    assert!(config.fonts.preferred_families.is_empty());
    assert_eq!(config.fonts.cache_size, 1024);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILENAME);

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(!path.exists(), "Loading must not create a config file");
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(&path, "\n").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(
        &path,
        r#"
log_level: debug
fonts:
  preferred_families:
    - Twemoji Mozilla
  font_dirs:
    - /opt/fonts
unknown_key: ignored
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.channel_name, "emoji_picker");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.fonts.preferred_families, vec!["Twemoji Mozilla"]);
    assert_eq!(config.fonts.font_dirs, vec![PathBuf::from("/opt/fonts")]);
    assert!(config.fonts.use_system_fonts);
    assert_eq!(config.fonts.cache_size, 1024);
}

#[test]
fn test_full_yaml_round_trips_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(
        &path,
        concat!(
            "channel_name: emoji_picker_test\n",
            "log_level: trace\n",
            "fonts:\n",
            "  use_system_fonts: false\n",
            "  font_dirs: [fonts]\n",
            "  preferred_families: [Noto Emoji]\n",
            "  cache_size: 8\n",
        ),
    )
    .unwrap();

    let expected = Config {
        channel_name: "emoji_picker_test".to_string(),
        log_level: LogLevel::Trace,
        fonts: FontConfig {
            use_system_fonts: false,
            font_dirs: vec![PathBuf::from("fonts")],
            preferred_families: vec!["Noto Emoji".to_string()],
            cache_size: 8,
        },
    };
    assert_eq!(Config::load_from(&path).unwrap(), expected);
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(&path, "fonts: [unterminated").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_empty_channel_and_zero_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);

    std::fs::write(&path, "channel_name: '  '\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("channel_name"));

    std::fs::write(&path, "fonts:\n  cache_size: 0\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("cache_size"));
}

#[test]
fn test_log_level_filters() {
    assert_eq!(LogLevel::Off.to_level_filter(), log::LevelFilter::Off);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}

#[test]
fn test_default_config_path_shape() {
    let path = Config::config_path();
    if std::env::var_os(emoji_picker_config::CONFIG_PATH_ENV).is_none() {
        assert!(path.ends_with(CONFIG_FILENAME));
        assert!(path.to_string_lossy().contains("emoji-picker"));
    }
}
