use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    text: String,
}

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
    store.remove_item("k").unwrap();
    assert_eq!(store.get_item("k").unwrap(), None);
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let store = MemoryStorage::new();
    assert!(store.remove_item("missing").is_ok());
}

#[test]
fn load_json_returns_none_for_missing_key() {
    let store = MemoryStorage::new();
    let loaded: Option<Draft> = load_json(&store, "draft").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn save_json_then_load_json_returns_value() {
    let store = MemoryStorage::new();
    let draft = Draft { text: "hello".to_owned() };
    save_json(&store, "draft", &draft).unwrap();
    assert_eq!(load_json::<Draft>(&store, "draft").unwrap(), Some(draft));
}

#[test]
fn load_json_reports_malformed_value() {
    let store = MemoryStorage::new();
    store.set_item("draft", "{not json").unwrap();
    let err = load_json::<Draft>(&store, "draft").unwrap_err();
    assert!(matches!(err, StorageError::MalformedOverride { ref key, .. } if key == "draft"));
}

#[test]
fn failing_storage_surfaces_unavailable() {
    let store = FailingStorage;
    assert!(matches!(load_json::<Draft>(&store, "draft"), Err(StorageError::Unavailable(_))));
    assert!(matches!(
        save_json(&store, "draft", &Draft { text: String::new() }),
        Err(StorageError::Unavailable(_))
    ));
}

#[test]
fn open_default_is_usable_without_browser() {
    let store = open_default();
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
}
