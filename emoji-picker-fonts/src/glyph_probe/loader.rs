//! Font loading utilities for system and user-supplied fonts.

use std::path::PathBuf;

use fontdb::{Database, Family, ID, Query};

use super::types::FontData;

/// Resolve a family name to a face in the font database.
pub fn query_family(db: &Database, family_name: &str) -> Option<ID> {
    let query = Query {
        families: &[Family::Name(family_name)],
        ..Query::default()
    };
    db.query(&query)
}

/// Distinct family names in the database, in load order.
pub fn installed_families(db: &Database) -> Vec<String> {
    let mut names = Vec::new();
    for face in db.faces() {
        if let Some((name, _)) = face.families.first()
            && !names.contains(name)
        {
            names.push(name.clone());
        }
    }
    names
}

/// Load a resolved face from the font database.
///
/// # Returns
/// `Some(FontData)` if the face data could be read and parsed.
pub fn load_face(db: &Database, id: ID, family_name: &str) -> Option<FontData> {
    // Pass face_index for TrueType Collection files where multiple fonts
    // share the same data but have different face indices.
    db.with_face_data(id, |bytes, face_index| {
        FontData::new_with_index(bytes.to_vec(), face_index, family_name)
    })
    .flatten()
}

/// Populate a font database from the system collection and extra directories.
pub fn build_database(use_system_fonts: bool, font_dirs: &[PathBuf]) -> Database {
    let mut db = Database::new();

    if use_system_fonts {
        db.load_system_fonts();
        log::info!("Loaded {} system font faces", db.len());
    }

    for dir in font_dirs {
        let before = db.len();
        db.load_fonts_dir(dir);
        log::info!(
            "Loaded {} font faces from {}",
            db.len() - before,
            dir.display()
        );
    }

    db
}
