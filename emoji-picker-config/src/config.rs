//! Core `Config` struct plus persistence and path resolution.
//!
//! Covers:
//! - `load` / `load_from` (YAML file I/O; a missing file yields defaults)
//! - XDG-style path helpers (`config_path`, `config_dir`)
//! - `validate`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::defaults;
use crate::error::ConfigError;
use crate::types::{FontConfig, LogLevel};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "EMOJI_PICKER_CONFIG";

/// Directory name under the user's config directory.
pub const CONFIG_DIR_NAME: &str = "emoji-picker";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Bridge configuration.
///
/// Every field has a default, so partial files (or no file at all) are valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Name of the method channel the plugin binds to
    #[serde(default = "defaults::channel_name")]
    pub channel_name: String,

    /// Log verbosity when neither `--log-level` nor `RUST_LOG` is given
    #[serde(default)]
    pub log_level: LogLevel,

    /// Font discovery for the glyph probe
    #[serde(default)]
    pub fonts: FontConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_name: defaults::channel_name(),
            log_level: LogLevel::default(),
            fonts: FontConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`.
    ///
    /// A missing file is not an error: defaults are returned and nothing is
    /// written, since the bridge never needs to persist state.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Config path: {:?}", path);

        if !path.exists() {
            log::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file deserializes to unit, not a mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config =
            serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "channel_name must not be empty".to_string(),
            ));
        }
        if self.fonts.cache_size == 0 {
            return Err(ConfigError::Validation(
                "fonts.cache_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration file path.
    ///
    /// `EMOJI_PICKER_CONFIG` wins; otherwise `~/.config/emoji-picker/config.yaml`
    /// (the platform config dir on Windows).
    pub fn config_path() -> PathBuf {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::config_dir().join(CONFIG_FILENAME),
        }
    }

    /// Get the configuration directory.
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir()
                .map(|dir| dir.join(CONFIG_DIR_NAME))
                .unwrap_or_else(|| PathBuf::from("."))
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/emoji-picker
            dirs::home_dir()
                .map(|home| home.join(".config").join(CONFIG_DIR_NAME))
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }
}
