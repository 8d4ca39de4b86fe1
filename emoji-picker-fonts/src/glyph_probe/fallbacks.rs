//! Font fallback chain configuration.
//!
//! Defines the priority order of fallback fonts consulted for emoji coverage.

/// Fallback font families in priority order.
///
/// These fonts are searched in order after any preferred families. The order
/// is designed to provide:
/// 1. Color emoji fonts (pictographs, flags, ZWJ sequences)
/// 2. Monochrome emoji and symbol fonts
/// 3. General Unicode coverage
pub const FALLBACK_FAMILIES: &[&str] = &[
    // Color emoji fonts
    "Noto Color Emoji",
    "Apple Color Emoji",
    "Segoe UI Emoji",
    "Twemoji Mozilla",
    "Twitter Color Emoji",
    "JoyPixels",
    "EmojiOne Color",
    "OpenMoji Color",
    // Monochrome emoji and symbol fonts
    "Noto Emoji",
    "Segoe UI Symbol",
    "Apple Symbols",
    "Noto Sans Symbols",
    "Noto Sans Symbols 2",
    "Symbola",
    // General fallbacks
    "DejaVu Sans",
    "Arial Unicode MS",
    "Liberation Sans",
];
