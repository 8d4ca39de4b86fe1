//! Configuration value types.

use std::path::PathBuf;

use serde::Deserialize;

use crate::defaults;

/// Log level setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Font discovery settings for the glyph probe
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontConfig {
    /// Scan the operating system's font collection
    #[serde(default = "defaults::bool_true")]
    pub use_system_fonts: bool,

    /// Extra directories to scan for font files
    #[serde(default)]
    pub font_dirs: Vec<PathBuf>,

    /// Families searched before the built-in fallback chain,
    /// e.g. `["Twemoji Mozilla"]`
    #[serde(default)]
    pub preferred_families: Vec<String>,

    /// Number of memoized probe answers
    #[serde(default = "defaults::cache_size")]
    pub cache_size: usize,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            use_system_fonts: defaults::bool_true(),
            font_dirs: Vec::new(),
            preferred_families: Vec::new(),
            cache_size: defaults::cache_size(),
        }
    }
}
