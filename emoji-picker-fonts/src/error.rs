//! Typed error variants for glyph probe detection.

use thiserror::Error;

/// Reasons the system glyph probe could not be brought up.
///
/// Detection failures are expected on minimal systems (containers, CI images
/// without fonts). Callers are meant to degrade to "nothing is available"
/// rather than propagate these.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No font faces were found in the system collection or configured dirs.
    #[error("no fonts found (system fonts: {system_fonts}, extra dirs: {extra_dirs})")]
    NoFonts {
        /// Whether the system collection was scanned.
        system_fonts: bool,
        /// Number of extra font directories scanned.
        extra_dirs: usize,
    },

    /// Faces were found but none of them could be parsed.
    #[error("none of the {searched} font families could be loaded")]
    NoFallbackFonts {
        /// Number of family names that were tried.
        searched: usize,
    },
}
