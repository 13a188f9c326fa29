mod common;

use common::database_with;
use default_font_list::{
    fontdb::{Database, Family},
    first_installed, installed_families, query_families, Platform, DEFAULT_FONT_LIST,
};

#[test]
fn empty_database_has_nothing_installed() {
    let db = Database::new();
    for platform in Platform::ALL {
        assert!(DEFAULT_FONT_LIST.installed(platform, &db).is_empty());
        assert_eq!(DEFAULT_FONT_LIST.first_installed(platform, &db), None);
    }
}

#[test]
fn installed_keeps_list_order() {
    // Faces added in reverse preference order
    let db = database_with(&[&["Verdana"], &["Arial"], &["SimSun"], &["Microsoft YaHei"]]);

    assert_eq!(
        DEFAULT_FONT_LIST.installed(Platform::Windows, &db),
        ["Microsoft YaHei", "SimSun", "Verdana"]
    );
    assert_eq!(
        DEFAULT_FONT_LIST.first_installed(Platform::Windows, &db),
        Some("Microsoft YaHei")
    );
    assert!(DEFAULT_FONT_LIST.installed(Platform::Cocoa, &db).is_empty());
}

#[test]
fn first_installed_skips_missing_families() {
    let db = database_with(&[&["Menlo"], &["Kefa"]]);
    assert_eq!(
        DEFAULT_FONT_LIST.first_installed(Platform::Cocoa, &db),
        Some("Menlo")
    );
}

#[test]
fn any_face_name_counts() {
    // Localized name first, the listed name second
    let db = database_with(&[&["苹方-简", "PingFang SC"]]);
    assert_eq!(
        DEFAULT_FONT_LIST.installed(Platform::Cocoa, &db),
        ["PingFang SC"]
    );
}

#[test]
fn family_names_are_compared_exactly() {
    let db = database_with(&[&["helvetica"], &["Menlo "]]);
    assert_eq!(DEFAULT_FONT_LIST.first_installed(Platform::Cocoa, &db), None);
}

#[test]
fn duplicate_faces_do_not_duplicate_families() {
    let db = database_with(&[&["Tahoma"], &["Tahoma"], &["Calibri"]]);
    assert_eq!(
        installed_families(&db, DEFAULT_FONT_LIST.windows),
        ["Calibri", "Tahoma"]
    );
}

#[test]
fn free_functions_accept_any_list() {
    let db = database_with(&[&["Inter"], &["Fira Sans"]]);
    let families = ["Noto Sans", "Fira Sans", "Inter"];
    assert_eq!(installed_families(&db, &families), ["Fira Sans", "Inter"]);
    assert_eq!(first_installed(&db, &families), Some("Fira Sans"));
    assert_eq!(first_installed(&db, &[]), None);
}

#[test]
fn query_families_preserve_order() {
    let families = query_families(DEFAULT_FONT_LIST.cocoa);
    assert_eq!(families.len(), DEFAULT_FONT_LIST.cocoa.len());
    assert_eq!(families.first(), Some(&Family::Name("PingFang SC")));
    assert_eq!(
        families.last(),
        Some(&Family::Name("Hiragino Maru Gothic ProN"))
    );
}
