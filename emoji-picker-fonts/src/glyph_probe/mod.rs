//! Glyph availability probing over a font fallback chain.
//!
//! This module provides the [`GlyphProbe`] trait and its system-backed
//! implementation. It supports:
//! - Preferred families checked ahead of the built-in chain, with every
//!   other installed family behind it
//! - Extra font directories next to (or instead of) the system collection
//! - Memoized answers, since results only depend on the loaded fonts

mod fallbacks;
mod loader;
mod types;

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::coverage;
use crate::error::ProbeError;

pub use fallbacks::FALLBACK_FAMILIES;
pub use types::FontData;

/// Default number of memoized probe answers.
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Answers whether a candidate string renders as a real glyph.
///
/// The availability checker only talks to this seam, so tests can swap in a
/// fake without any font subsystem.
pub trait GlyphProbe {
    /// `true` if `candidate` renders as distinct glyphs rather than tofu.
    fn supports_glyph(&self, candidate: &str) -> bool;
}

impl<T: GlyphProbe + ?Sized> GlyphProbe for &T {
    fn supports_glyph(&self, candidate: &str) -> bool {
        (**self).supports_glyph(candidate)
    }
}

impl<T: GlyphProbe + ?Sized> GlyphProbe for Box<T> {
    fn supports_glyph(&self, candidate: &str) -> bool {
        (**self).supports_glyph(candidate)
    }
}

impl<T: GlyphProbe + ?Sized> GlyphProbe for Arc<T> {
    fn supports_glyph(&self, candidate: &str) -> bool {
        (**self).supports_glyph(candidate)
    }
}

/// Inputs for [`SystemGlyphProbe::detect`].
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Scan the operating system's font collection
    pub use_system_fonts: bool,
    /// Additional directories to scan for font files
    pub font_dirs: Vec<PathBuf>,
    /// Families searched before [`FALLBACK_FAMILIES`]
    pub preferred_families: Vec<String>,
    /// Number of memoized answers to keep
    pub cache_size: usize,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            use_system_fonts: true,
            font_dirs: Vec::new(),
            preferred_families: Vec::new(),
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

/// Glyph probe backed by the system font collection.
///
/// Fonts are resolved once in [`SystemGlyphProbe::detect`]; queries never
/// touch the filesystem.
pub struct SystemGlyphProbe {
    /// Fallback chain in priority order
    fonts: Vec<FontData>,

    /// Memoized answers keyed by candidate
    cache: Mutex<LruCache<String, bool>>,
}

impl std::fmt::Debug for SystemGlyphProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemGlyphProbe")
            .field("fonts", &self.family_names())
            .finish()
    }
}

impl SystemGlyphProbe {
    /// Discover fonts and build the fallback chain.
    ///
    /// # Errors
    /// Returns [`ProbeError::NoFonts`] when no faces were found at all, and
    /// [`ProbeError::NoFallbackFonts`] when none of the found faces parse.
    pub fn detect(options: &ProbeOptions) -> Result<Self, ProbeError> {
        let font_db = loader::build_database(options.use_system_fonts, &options.font_dirs);
        if font_db.is_empty() {
            return Err(ProbeError::NoFonts {
                system_fonts: options.use_system_fonts,
                extra_dirs: options.font_dirs.len(),
            });
        }

        let families: Vec<&str> = options
            .preferred_families
            .iter()
            .map(String::as_str)
            .chain(FALLBACK_FAMILIES.iter().copied())
            .collect();

        let mut fonts = Vec::new();
        let mut seen = HashSet::new();
        for family_name in &families {
            let Some(id) = loader::query_family(&font_db, family_name) else {
                log::debug!("Fallback font not installed: {}", family_name);
                continue;
            };
            // Several family names can resolve to the same face
            if !seen.insert(id) {
                continue;
            }
            match loader::load_face(&font_db, id, family_name) {
                Some(font_data) => {
                    log::debug!("Added fallback font: {}", family_name);
                    fonts.push(font_data);
                }
                None => log::warn!("Fallback font '{}' could not be parsed", family_name),
            }
        }

        // Every other installed family backs the named ones, one face each
        let installed = loader::installed_families(&font_db);
        let mut extra = 0;
        for family_name in &installed {
            let Some(id) = loader::query_family(&font_db, family_name) else {
                continue;
            };
            if !seen.insert(id) {
                continue;
            }
            if let Some(font_data) = loader::load_face(&font_db, id, family_name) {
                fonts.push(font_data);
                extra += 1;
            }
        }
        log::debug!("Added {} installed families after the named chain", extra);

        if fonts.is_empty() {
            return Err(ProbeError::NoFallbackFonts {
                searched: families.len() + installed.len(),
            });
        }
        log::info!("Glyph probe using {} fallback fonts", fonts.len());

        Ok(Self::from_fonts(fonts, options.cache_size))
    }

    /// Build a probe from an explicit fallback chain.
    pub fn from_fonts(fonts: Vec<FontData>, cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        SystemGlyphProbe {
            fonts,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of fonts in the fallback chain.
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Family names of the fallback chain, in priority order.
    pub fn family_names(&self) -> Vec<&str> {
        self.fonts.iter().map(|f| f.family.as_str()).collect()
    }

    /// Index of the first font in the chain that renders every cluster of
    /// `candidate` on its own.
    pub fn find_font(&self, candidate: &str) -> Option<usize> {
        let clusters = coverage::grapheme_clusters(candidate);
        if clusters.is_empty() {
            return None;
        }
        self.fonts.iter().position(|font| {
            clusters
                .iter()
                .all(|cluster| coverage::renders_cluster(font, cluster))
        })
    }

    fn resolve(&self, candidate: &str) -> bool {
        match self.find_font(candidate) {
            Some(idx) => {
                log::trace!("'{}' rendered by {}", candidate, self.fonts[idx].family);
                true
            }
            None => {
                log::debug!(
                    "'{}' ({}) not rendered by any of {} fonts",
                    candidate,
                    candidate
                        .chars()
                        .map(|c| format!("U+{:04X}", c as u32))
                        .collect::<Vec<_>>()
                        .join(" "),
                    self.fonts.len()
                );
                false
            }
        }
    }
}

impl GlyphProbe for SystemGlyphProbe {
    fn supports_glyph(&self, candidate: &str) -> bool {
        if let Some(&cached) = self.cache.lock().get(candidate) {
            return cached;
        }
        let available = self.resolve(candidate);
        self.cache.lock().put(candidate.to_string(), available);
        available
    }
}
