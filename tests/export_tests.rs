//! Build export tests.

use daggerheart_builder::{DraftField, Level, LevelStore};

/// Exporting before any lock reports the viewed level and no levels.
#[test]
fn test_export_without_locks() {
    let mut store = LevelStore::new();
    store.set_level(3);
    store.toggle_card("Rune Ward");

    let export = store.export();
    assert_eq!(export.name, "Unnamed Character");
    assert_eq!(export.final_level, Level::new(3));
    assert!(export.levels.is_empty());
}

/// Locks at 1 and 3 export exactly those levels.
#[test]
fn test_export_locked_levels_only() {
    let mut store = LevelStore::new();
    store.set_name("Tamsin");
    store.lock();
    store.set_level(3);
    store.set_field(DraftField::Hp, "8");
    store.lock();
    store.set_level(2);
    store.set_field(DraftField::Hp, "99");

    let export = store.export();
    let keys: Vec<_> = export.levels.keys().copied().collect();
    assert_eq!(keys, vec![Level::new(1), Level::new(3)]);
    assert_eq!(export.final_level, Level::new(3));
    assert_eq!(export.levels[&Level::new(3)].draft().hp(), 8);
    assert_eq!(export.file_name(), "tamsin_build.json");
}

/// The export is a copy; later locks do not change it.
#[test]
fn test_export_is_point_in_time() {
    let mut store = LevelStore::new();
    store.lock();
    let export = store.export();

    store.set_level(5);
    store.lock();

    assert_eq!(export.levels.len(), 1);
    assert_eq!(store.export().final_level, Level::new(5));
}

/// The downloaded document uses the portable field names.
#[test]
fn test_export_bytes() {
    let mut store = LevelStore::new();
    store.set_name("Tamsin");
    store.set_field(DraftField::Class, "Warrior");
    store.lock();

    let bytes = store.export().to_json_bytes().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["name"], "Tamsin");
    assert_eq!(json["finalLevel"], 1);
    assert_eq!(json["levels"]["1"]["class"], "Warrior");
}
