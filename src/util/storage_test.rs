use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), Ok(None));
}

#[test]
fn memory_store_round_trips_value() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").expect("write should succeed");
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
    assert_eq!(store.peek("theme"), Some("dark"));
}

#[test]
fn with_entry_prepopulates() {
    let store = MemoryStore::with_entry("theme", "light");
    assert_eq!(store.get("theme"), Ok(Some("light".to_owned())));
    assert_eq!(store.get("other"), Ok(None));
}

#[test]
fn rejecting_writes_keeps_reads_working() {
    let mut store = MemoryStore::rejecting_writes();
    assert!(matches!(store.set("theme", "dark"), Err(StorageError::Write(_))));
    assert_eq!(store.get("theme"), Ok(None));
}

#[test]
fn unavailable_store_fails_both_ways() {
    let mut store = MemoryStore::unavailable();
    assert_eq!(store.get("theme"), Err(StorageError::Unavailable));
    assert_eq!(store.set("theme", "dark"), Err(StorageError::Unavailable));
}
