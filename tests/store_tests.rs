//! Library-level tests of the entry store over the filesystem slot

use rememberit::application::{init::init, transfer, EntryStore};
use rememberit::domain::SuggestOptions;
use rememberit::application::quick_add::suggestions;
use rememberit::infrastructure::FileSystemRepository;
use std::fs;
use tempfile::TempDir;

fn open(temp: &TempDir) -> EntryStore<FileSystemRepository> {
    EntryStore::open(FileSystemRepository::new(temp.path().to_path_buf()))
}

#[test]
fn test_entries_survive_reopen() {
    let temp = TempDir::new().unwrap();
    init(temp.path()).unwrap();

    let added = {
        let mut store = open(&temp);
        store.add("Buy milk").unwrap()
    };

    let store = open(&temp);
    assert_eq!(store.list(), vec![added]);
}

#[test]
fn test_scenario_from_empty_list() {
    let temp = TempDir::new().unwrap();
    init(temp.path()).unwrap();
    let mut store = open(&temp);

    let entry = store.add("Buy milk").unwrap();
    assert!(store.add("").is_err());
    store
        .update(&entry.id, "Buy oat milk", entry.created)
        .unwrap();
    assert_eq!(open(&temp).list()[0].content, "Buy oat milk");

    store.delete(&entry.id).unwrap();
    assert!(open(&temp).list().is_empty());
}

#[test]
fn test_reset_writes_empty_array() {
    let temp = TempDir::new().unwrap();
    init(temp.path()).unwrap();
    let mut store = open(&temp);
    store.add("a").unwrap();

    store.reset().unwrap();
    assert!(store.list().is_empty());
    assert_eq!(
        fs::read_to_string(temp.path().join(".rememberit/entries.json")).unwrap(),
        "[]"
    );
}

#[test]
fn test_preexisting_slot_loads() {
    let temp = TempDir::new().unwrap();
    init(temp.path()).unwrap();
    fs::write(
        temp.path().join(".rememberit/entries.json"),
        r#"[{"id":"1","content":"x","created":"2024-01-01T00:00:00.000"}]"#,
    )
    .unwrap();

    let store = open(&temp);
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].content, "x");
}

#[test]
fn test_malformed_slot_loads_empty() {
    let temp = TempDir::new().unwrap();
    init(temp.path()).unwrap();
    fs::write(temp.path().join(".rememberit/entries.json"), "not json").unwrap();

    assert!(open(&temp).list().is_empty());
}

#[test]
fn test_import_then_suggest() {
    let temp = TempDir::new().unwrap();
    init(temp.path()).unwrap();
    let mut store = open(&temp);

    let payload = r#"[
        {"id":"1","content":"a","created":"2024-01-01T00:00:00.000"},
        {"id":"2","content":"a","created":"2024-01-02T00:00:00.000"},
        {"id":"3","content":"b","created":"2024-01-03T00:00:00.000"},
        {"id":"4","content":"a","created":"2024-01-04T00:00:00.000"},
        {"id":"5","content":"c","created":"2024-01-05T00:00:00.000"},
        {"id":"6","content":"c","created":"2024-01-06T00:00:00.000"}
    ]"#;
    assert_eq!(transfer::import(&mut store, payload).unwrap(), 6);

    let contents: Vec<String> = suggestions(&store, SuggestOptions::default())
        .into_iter()
        .map(|s| s.content)
        .collect();
    assert_eq!(contents, vec!["a", "c"]);
}
