//! Configuration system for emoji-picker.
//!
//! This crate provides configuration loading, saving, and default values
//! for the glyph availability bridge:
//!
//! - Method channel name
//! - Log verbosity
//! - Font discovery settings for the glyph probe

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::{CONFIG_DIR_NAME, CONFIG_FILENAME, CONFIG_PATH_ENV, Config};
pub use error::ConfigError;
pub use types::{FontConfig, LogLevel};
