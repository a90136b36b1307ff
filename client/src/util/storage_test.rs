use super::*;

// =============================================================
// decode_tasks
// =============================================================

#[test]
fn decode_tasks_missing_key_is_empty() {
    assert!(decode_tasks(None).is_empty());
}

#[test]
fn decode_tasks_null_is_empty() {
    assert!(decode_tasks(Some("null")).is_empty());
}

#[test]
fn decode_tasks_malformed_is_empty() {
    assert!(decode_tasks(Some("{not json")).is_empty());
    assert!(decode_tasks(Some(r#"{"text":"object, not array"}"#)).is_empty());
}

#[test]
fn decode_tasks_reads_stored_array_in_order() {
    let raw = r#"[{"text":"a","completed":false},{"text":"b","completed":true}]"#;
    let tasks = decode_tasks(Some(raw));
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0], Task::new("a"));
    assert_eq!(tasks[1].text, "b");
    assert!(tasks[1].completed);
}

#[test]
fn decode_tasks_skips_only_unreadable_entries() {
    let raw = r#"[{"text":"a"},{"completed":true},7,{"text":"c","completed":true}]"#;
    let texts: Vec<String> = decode_tasks(Some(raw)).into_iter().map(|t| t.text).collect();
    assert_eq!(texts, ["a", "c"]);
}

#[test]
fn stored_format_is_plain_text_and_completed() {
    let raw = serde_json::to_string(&[Task::new("a")]).unwrap();
    assert_eq!(raw, r#"[{"text":"a","completed":false}]"#);
    assert_eq!(decode_tasks(Some(raw.as_str())), vec![Task::new("a")]);
}

// =============================================================
// Store round trip
// =============================================================

#[test]
fn saved_tasks_load_back_in_order() {
    let store = MemoryStore::default();
    let mut done = Task::new("b");
    done.completed = true;
    save_tasks(&store, &[Task::new("a"), done.clone()]);
    assert_eq!(load_tasks(&store), vec![Task::new("a"), done]);
}

#[test]
fn empty_store_loads_empty_list() {
    assert!(load_tasks(&MemoryStore::default()).is_empty());
}

#[test]
fn saving_overwrites_previous_list() {
    let store = MemoryStore::default();
    save_tasks(&store, &[Task::new("a")]);
    save_tasks(&store, &[]);
    assert_eq!(store.get(TASKS_KEY).as_deref(), Some("[]"));
}

// =============================================================
// Non-browser behavior
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_empty_outside_browser() {
    LocalStorage.set(TASKS_KEY, "[]");
    assert!(LocalStorage.get(TASKS_KEY).is_none());
    save_tasks(&LocalStorage, &[Task::new("a")]);
    assert!(load_tasks(&LocalStorage).is_empty());
}
