//! Tests for history/storage

use std::fs;

use tempfile::TempDir;

use super::*;

fn item(id: i64, label: &str) -> SuggestionItem {
    SuggestionItem::new(id, label)
}

#[test]
fn test_history_dir_returns_config_path() {
    let path = history_dir();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/typeahead"));
    assert!(path.ends_with("history"));
}

#[test]
fn test_record_path_keeps_plain_keys_readable() {
    let store = FileHistoryStore::new("/tmp/h");
    let path = store.record_path("default");
    assert!(path.ends_with("autosuggestion_history_default.json"));
}

#[test]
fn test_record_path_escapes_other_bytes() {
    let store = FileHistoryStore::new("/tmp/h");
    let path = store.record_path("search/main_form");
    assert!(path.ends_with("autosuggestion_history_search_2fmain_5fform.json"));
}

#[test]
fn test_similar_keys_load_independently() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path());
    let keys = ["search.main", "search_main", "search/main", "search main"];

    for (idx, key) in keys.iter().enumerate() {
        store.save(key, &[item(idx as i64, key)]);
    }

    for key in keys {
        let loaded = store.load(key);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].label, key);
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), keys.len());
}

#[test]
fn test_record_with_fractional_id_keeps_every_item() {
    let history = parse_history(r#"[{"id":1.5,"label":"Half"},{"id":2,"label":"Two"}]"#);

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id.to_string(), "1.5");
    assert_eq!(history[1].label, "Two");
}

#[test]
fn test_load_missing_record_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path());
    assert!(store.load("nothing").is_empty());
}

#[test]
fn test_save_then_load_round_trips_in_order() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path().join("nested"));
    let items = vec![item(2, "B").with_category("Recent"), item(1, "A")];

    store.save("main", &items);

    assert_eq!(store.load("main"), items);
}

#[test]
fn test_keys_are_independent() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path());
    store.save("one", &[item(1, "A")]);
    store.save("two", &[item(2, "B")]);

    assert_eq!(store.load("one")[0].label, "A");
    assert_eq!(store.load("two")[0].label, "B");
}

#[test]
fn test_corrupt_record_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path());
    fs::write(store.record_path("main"), "{not json").unwrap();

    assert!(store.load("main").is_empty());
}

#[test]
fn test_duplicate_ids_in_record_are_collapsed() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path());
    fs::write(
        store.record_path("main"),
        r#"[{"id":1,"label":"A"},{"id":1,"label":"A again"},{"id":2,"label":"B"}]"#,
    )
    .unwrap();

    let loaded = store.load("main");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].label, "A");
}

#[test]
fn test_write_failure_is_swallowed() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();
    let store = FileHistoryStore::new(&blocker);

    store.save("main", &[item(1, "A")]);

    assert!(store.load("main").is_empty());
}

#[test]
fn test_add_moves_to_front_without_duplicates() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path());

    store.add("main", item(1, "A"), 10);
    store.add("main", item(2, "B"), 10);
    store.add("main", item(1, "A"), 10);

    let loaded = store.load("main");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, ItemId::from(1));
}

#[test]
fn test_remove_and_clear() {
    let store = MemoryHistoryStore::with_history("main", vec![item(1, "A"), item(2, "B")]);

    let updated = store.remove("main", &ItemId::from(1));
    assert_eq!(updated, vec![item(2, "B")]);
    assert_eq!(store.load("main"), vec![item(2, "B")]);

    store.clear("main");
    assert!(store.load("main").is_empty());
}

#[test]
fn test_parse_history_non_array_is_empty() {
    assert!(parse_history(r#"{"id": 1, "label": "A"}"#).is_empty());
}
