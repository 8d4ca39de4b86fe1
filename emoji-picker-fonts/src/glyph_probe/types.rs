//! Font data types for the probe's fallback chain.

use std::sync::Arc;
use swash::{CacheKey, FontRef};

/// Owned font bytes plus the location of one face inside them.
///
/// The swash `FontRef` is rebuilt on demand from the stored offset and cache
/// key, so no self-referential borrow is kept alive.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF/TTC)
    pub data: Arc<Vec<u8>>,
    /// Face index within `data` (non-zero only for collections)
    pub face_index: u32,
    /// Family name the face was resolved from
    pub family: String,
    offset: u32,
    key: CacheKey,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("family", &self.family)
            .field("face_index", &self.face_index)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl FontData {
    /// Create a new FontData from bytes using face index 0.
    ///
    /// Returns `None` if the bytes are not a parsable font.
    pub fn new(data: Vec<u8>, family: impl Into<String>) -> Option<Self> {
        Self::new_with_index(data, 0, family)
    }

    /// Create a new FontData from bytes with a specific face index.
    ///
    /// This is needed for TrueType Collection (.ttc) files where multiple
    /// font faces share the same data but have different face indices.
    pub fn new_with_index(data: Vec<u8>, face_index: u32, family: impl Into<String>) -> Option<Self> {
        let (offset, key) = {
            let font_ref = FontRef::from_index(&data, face_index as usize)?;
            (font_ref.offset, font_ref.key)
        };
        Some(FontData {
            data: Arc::new(data),
            face_index,
            family: family.into(),
            offset,
            key,
        })
    }

    /// Swash view of the face, for charmap lookups.
    pub fn font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: self.data.as_slice(),
            offset: self.offset,
            key: self.key,
        }
    }

    /// Glyph id for `character`, 0 when the face has no mapping.
    pub fn glyph_id(&self, character: char) -> u16 {
        self.font_ref().charmap().map(character)
    }
}
