//! Store Persistence Tests
//!
//! Whole-file load/save against a real filesystem:
//! - missing file loads as an empty library
//! - save then load returns an equal library
//! - corrupt files fail to load and are left alone
//! - the on-disk layout is a pretty-printed array

use std::fs;

use serde_json::{json, Value};
use shelf::book::add;
use shelf::{Library, NewBook, ShelfConfig, ShelfErrorCode, Store};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store() -> (TempDir, Store) {
    let tmp = TempDir::new().unwrap();
    let config = ShelfConfig::with_data_file(tmp.path().join("library.json"));
    let store = Store::from_config(&config);
    (tmp, store)
}

fn sample_library() -> Library {
    let mut library = Library::new();
    for new_book in [
        NewBook::new("Dune", "Herbert", 1965).genre("Sci-Fi").read(true),
        NewBook::new("Emma", "Austen", 1815),
        NewBook::new("Dune", "Someone Else", 2100).genre("Parody"),
        NewBook::new("Ünïcödé \"quoted\"", "Ñame", 1000).read(true),
    ] {
        library = add(&library, new_book).unwrap();
    }
    library
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loading when no file exists is an empty library, not an error.
#[test]
fn test_load_missing_file() {
    let (_tmp, store) = setup_store();
    assert_eq!(store.load().unwrap(), Library::new());
    assert!(!store.path().exists());
}

/// Save followed by load is field-for-field and order-preserving.
#[test]
fn test_save_load_round_trip() {
    let (_tmp, store) = setup_store();
    let library = sample_library();

    store.save(&library).unwrap();
    assert_eq!(store.load().unwrap(), library);
}

/// Empty library → add Dune → save → load.
#[test]
fn test_dune_scenario() {
    let (_tmp, store) = setup_store();

    let library = store.load().unwrap();
    let library = add(
        &library,
        NewBook::new("Dune", "Herbert", 1965).genre("Sci-Fi").read(true),
    )
    .unwrap();
    store.save(&library).unwrap();

    let loaded = store.load().unwrap();
    let on_disk: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();

    assert_eq!(loaded, library);
    assert_eq!(
        on_disk,
        json!([{
            "title": "Dune",
            "author": "Herbert",
            "year": 1965,
            "genre": "Sci-Fi",
            "read_status": true
        }])
    );
}

/// Saving an unchanged library still rewrites the file.
#[test]
fn test_save_rewrites_every_time() {
    let (_tmp, store) = setup_store();
    let library = sample_library();

    store.save(&library).unwrap();
    fs::write(store.path(), "[]").unwrap();
    store.save(&library).unwrap();

    assert_eq!(store.load().unwrap(), library);
}

/// A second store on the same file sees what the first one saved.
#[test]
fn test_load_sees_other_writer() {
    let (_tmp, first) = setup_store();
    let second = Store::new(first.path());

    first.save(&sample_library()).unwrap();
    assert_eq!(second.load().unwrap(), sample_library());
}

// =============================================================================
// File Format
// =============================================================================

/// Objects carry exactly the five fields, indented by four spaces.
#[test]
fn test_file_layout() {
    let (_tmp, store) = setup_store();
    store.save(&sample_library()).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with("[\n    {\n        \"title\": \"Dune\","));

    let value: Value = serde_json::from_str(&text).unwrap();
    for object in value.as_array().unwrap() {
        let mut keys: Vec<&String> = object.as_object().unwrap().keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["author", "genre", "read_status", "title", "year"]);
    }
}

// =============================================================================
// Corrupt Data
// =============================================================================

/// Unparseable contents fail with CorruptData and the file is not touched.
#[test]
fn test_corrupt_file_rejected() {
    let (_tmp, store) = setup_store();

    let extra_field = r#"[{"title": "Dune", "author": "Herbert", "year": 1965, "genre": "Sci-Fi", "read_status": true, "isbn": "0441013597"}]"#;
    for content in [
        "",
        "{",
        "null",
        r#"[{"title": "Dune"}]"#,
        r#"[1, 2, 3]"#,
        extra_field,
    ] {
        fs::write(store.path(), content).unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.code(), ShelfErrorCode::CorruptData, "content {content:?}");
        assert!(err.is_fatal());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), content);
    }
}

/// A file with keys shelf does not know is refused, so saving cannot drop them.
#[test]
fn test_unknown_fields_survive_failed_load() {
    let (_tmp, store) = setup_store();
    let content = r#"[{"title": "Dune", "author": "Herbert", "year": 1965, "genre": "Sci-Fi", "read_status": true, "isbn": "0441013597"}]"#;
    fs::write(store.path(), content).unwrap();

    let err = store.load().unwrap_err();
    assert_eq!(err.code(), ShelfErrorCode::CorruptData);
    assert!(err.to_string().contains("isbn"));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), content);
}

/// Files written by hand without a genre still load.
#[test]
fn test_missing_genre_loads_as_empty() {
    let (_tmp, store) = setup_store();
    fs::write(
        store.path(),
        r#"[{"title": "Emma", "author": "Austen", "year": 1815, "read_status": false}]"#,
    )
    .unwrap();

    let library = store.load().unwrap();
    assert_eq!(library.books()[0].genre, "");
}
