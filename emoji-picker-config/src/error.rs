//! Typed error variants for the emoji-picker-config crate.
//!
//! Provides structured error types for config loading and validation operations,
//! so callers can match on specific failure modes instead of opaque strings.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
///
/// # Example
///
/// ```rust,no_run
/// use emoji_picker_config::{Config, ConfigError};
///
/// match Config::load() {
///     Ok(config) => println!("channel: {}", config.channel_name),
///     Err(ConfigError::Parse { path, .. }) => eprintln!("bad YAML in {}", path.display()),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error on config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
