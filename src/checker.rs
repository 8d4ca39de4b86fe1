//! Glyph availability checks on top of an injected [`GlyphProbe`].
//!
//! The probe capability is detected once, when the checker is built. A
//! checker without a probe answers "not available" for everything instead of
//! failing, so callers never see a platform error.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use emoji_picker_fonts::GlyphProbe;

/// Answers glyph-support queries for single candidates and batches.
#[derive(Debug)]
pub struct GlyphAvailabilityChecker<P> {
    /// `None` when capability detection failed
    probe: Option<P>,
}

impl<P: GlyphProbe> GlyphAvailabilityChecker<P> {
    /// Checker backed by a working probe.
    pub fn new(probe: P) -> Self {
        Self { probe: Some(probe) }
    }

    /// Checker for a platform without a usable probe.
    pub fn unsupported() -> Self {
        Self { probe: None }
    }

    /// Run capability detection once and cache the outcome.
    ///
    /// A detection error is logged and turned into an unsupported checker.
    pub fn detect<E, F>(detect: F) -> Self
    where
        E: Display,
        F: FnOnce() -> Result<P, E>,
    {
        match detect() {
            Ok(probe) => Self::new(probe),
            Err(e) => {
                log::warn!("Glyph probe unavailable, every candidate will report false: {e}");
                Self::unsupported()
            }
        }
    }

    /// Whether capability detection succeeded.
    pub fn is_supported(&self) -> bool {
        self.probe.is_some()
    }

    /// The probe, if detection succeeded.
    pub fn probe(&self) -> Option<&P> {
        self.probe.as_ref()
    }

    /// `true` if `candidate` renders as a distinct glyph rather than tofu.
    pub fn is_available(&self, candidate: &str) -> bool {
        self.probe
            .as_ref()
            .is_some_and(|probe| probe.supports_glyph(candidate))
    }

    /// Keep only the entries whose candidate is available.
    ///
    /// Keys and values of surviving entries are returned unchanged.
    pub fn check_availability<K>(&self, batch: HashMap<K, String>) -> HashMap<K, String>
    where
        K: Eq + Hash,
    {
        let total = batch.len();
        let available: HashMap<K, String> = batch
            .into_iter()
            .filter(|(_, candidate)| self.is_available(candidate))
            .collect();
        log::debug!("{} of {} candidates available", available.len(), total);
        available
    }
}
