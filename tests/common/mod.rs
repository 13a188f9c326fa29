use std::sync::Arc;

use default_font_list::fontdb::{
    Database, FaceInfo, Language, Source, Stretch, Style, Weight, ID,
};

/// Build a database with one face per entry of `faces`.
/// Each entry lists the family names the face declares, first one being the default name.
/// The faces carry no font data, only the metadata the family lookup reads.
pub fn database_with(faces: &[&[&str]]) -> Database {
    let mut db = Database::new();
    for (i, families) in faces.iter().enumerate() {
        db.push_face_info(FaceInfo {
            id: ID::dummy(),
            source: Source::Binary(Arc::new(Vec::<u8>::new())),
            index: 0,
            families: families
                .iter()
                .map(|name| (name.to_string(), Language::English_UnitedStates))
                .collect(),
            post_script_name: format!("TestFace-{i}"),
            style: Style::Normal,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            monospaced: false,
        });
    }
    db
}
