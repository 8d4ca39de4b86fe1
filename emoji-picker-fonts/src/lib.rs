//! System font discovery and glyph coverage probing for emoji-picker.
//!
//! This crate provides:
//! - The [`GlyphProbe`] seam the availability checker queries
//! - [`SystemGlyphProbe`], backed by the system font collection and an
//!   emoji-first fallback chain
//! - Grapheme-aware coverage checks that shape multi-codepoint sequences
//!   (flags, ZWJ sequences, keycaps) to tell a real ligature from tofu
//!
//! # Architecture
//!
//! `SystemGlyphProbe` loads fonts once, at detection time:
//! 1. Preferred families from configuration
//! 2. Built-in fallback families (color emoji fonts first)
//! 3. Every other installed family, one face each
//!
//! Each query walks the chain and asks [`coverage`] whether one font renders
//! every grapheme cluster of the candidate on its own. Answers are memoized in an LRU cache.

pub mod coverage;
pub mod error;
pub mod glyph_probe;

// Re-export main types for convenience
pub use error::ProbeError;
pub use glyph_probe::{FALLBACK_FAMILIES, FontData, GlyphProbe, ProbeOptions, SystemGlyphProbe};
