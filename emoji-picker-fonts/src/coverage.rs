//! Grapheme-aware glyph coverage checks using HarfBuzz via rustybuzz
//!
//! A candidate counts as renderable by a font when every grapheme cluster in
//! it shapes to exactly one advancing glyph and no `.notdef`:
//! - Regional indicator pairs (flag emoji like 🇺🇸) must ligate into a flag
//! - ZWJ sequences (emoji like 👨‍👩‍👧‍👦) must ligate into one pictograph
//! - Keycaps and skin tone modifiers must combine with their base
//!
//! A font that maps every scalar but cannot ligate a sequence shows the parts
//! side by side, which is treated as unavailable.
use rustybuzz::{Face, UnicodeBuffer};
use unicode_segmentation::UnicodeSegmentation;

use crate::glyph_probe::FontData;

/// Split `text` into extended grapheme clusters.
pub fn grapheme_clusters(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Scalars that shaping hides rather than draws.
///
/// These never need a charmap entry of their own: joiners, variation
/// selectors and emoji tag characters.
pub fn is_default_ignorable(character: char) -> bool {
    matches!(
        character as u32,
        0x200B..=0x200F
            | 0x2060..=0x2064
            | 0xFE00..=0xFE0F
            | 0xFEFF
            | 0xE0000..=0xE0FFF
    )
}

/// Detect regional indicator pairs (flag emoji)
///
/// Regional indicators are pairs of characters U+1F1E6-U+1F1FF
/// that combine to form flag emoji (e.g., 🇺🇸 = U+1F1FA + U+1F1F8)
pub fn is_regional_indicator_pair(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    let is_ri = |c: char| (0x1F1E6..=0x1F1FF).contains(&(c as u32));
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => is_ri(a) && is_ri(b),
        _ => false,
    }
}

/// Check if a grapheme contains a Zero Width Joiner (ZWJ)
pub fn contains_zwj(grapheme: &str) -> bool {
    grapheme.contains('\u{200D}')
}

/// Every drawable scalar of `cluster` has a charmap entry in `font`.
///
/// Cheap pre-filter run before shaping.
pub fn charmap_covers(font: &FontData, cluster: &str) -> bool {
    cluster
        .chars()
        .filter(|c| !is_default_ignorable(*c))
        .all(|c| font.glyph_id(c) != 0)
}

/// Shape `cluster` with `font` and return `(glyph_id, x_advance)` pairs.
///
/// Returns `None` if rustybuzz cannot parse the face.
pub fn shape_cluster(font: &FontData, cluster: &str) -> Option<Vec<(u32, i32)>> {
    let face = Face::from_slice(&font.data, font.face_index)?;

    let mut unicode_buffer = UnicodeBuffer::new();
    unicode_buffer.push_str(cluster);
    unicode_buffer.guess_segment_properties();

    let glyph_buffer = rustybuzz::shape(&face, &[], unicode_buffer);
    Some(
        glyph_buffer
            .glyph_infos()
            .iter()
            .zip(glyph_buffer.glyph_positions())
            .map(|(info, pos)| (info.glyph_id, pos.x_advance))
            .collect(),
    )
}

/// Whether a shaping result draws the cluster as one distinct glyph.
pub fn is_single_glyph(shaped: &[(u32, i32)]) -> bool {
    if shaped.iter().any(|(glyph_id, _)| *glyph_id == 0) {
        return false;
    }
    shaped.iter().filter(|(_, advance)| *advance != 0).count() == 1
}

/// Whether `font` alone renders `cluster` as a single non-fallback glyph.
pub fn renders_cluster(font: &FontData, cluster: &str) -> bool {
    if !charmap_covers(font, cluster) {
        return false;
    }
    match shape_cluster(font, cluster) {
        Some(shaped) => {
            let single = is_single_glyph(&shaped);
            if !single && (contains_zwj(cluster) || is_regional_indicator_pair(cluster)) {
                log::trace!(
                    "'{}' maps in {} but does not ligate ({} glyphs)",
                    cluster,
                    font.family,
                    shaped.len()
                );
            }
            single
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_is_single_cluster() {
        let clusters = grapheme_clusters("\u{1F1FA}\u{1F1F8}");
        assert_eq!(clusters, vec!["\u{1F1FA}\u{1F1F8}"]);
        assert!(is_regional_indicator_pair(clusters[0]));
    }

    #[test]
    fn test_zwj_family_is_single_cluster() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        let clusters = grapheme_clusters(family);
        assert_eq!(clusters.len(), 1);
        assert!(contains_zwj(clusters[0]));
        assert!(!is_regional_indicator_pair(clusters[0]));
    }

    #[test]
    fn test_separate_emoji_are_separate_clusters() {
        assert_eq!(grapheme_clusters("\u{1F600}\u{1F980}").len(), 2);
        assert!(grapheme_clusters("").is_empty());
    }

    #[test]
    fn test_default_ignorables() {
        assert!(is_default_ignorable('\u{200D}'));
        assert!(is_default_ignorable('\u{FE0F}'));
        assert!(is_default_ignorable('\u{E007F}'));
        assert!(!is_default_ignorable('\u{20E3}'));
        assert!(!is_default_ignorable('\u{1F600}'));
        assert!(!is_default_ignorable('A'));
    }

    #[test]
    fn test_single_glyph_rules() {
        // One pictograph, hidden ZWJ and VS16 with zero advance
        assert!(is_single_glyph(&[(12, 2550), (3, 0), (4, 0)]));
        // Parts drawn side by side
        assert!(!is_single_glyph(&[(12, 2550), (3, 0), (13, 2550)]));
        // Tofu
        assert!(!is_single_glyph(&[(0, 1000)]));
        // Nothing drawn at all
        assert!(!is_single_glyph(&[(3, 0)]));
        assert!(!is_single_glyph(&[]));
    }
}
