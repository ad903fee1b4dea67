use agentstore_core::{KeyValueStore, MemoryStore, StoreError};

#[test]
fn set_get_del_roundtrip() {
    let store = MemoryStore::new();

    assert!(store.set("agents:a", b"payload").unwrap());
    assert_eq!(store.get("agents:a").unwrap().as_deref(), Some(&b"payload"[..]));

    assert_eq!(store.del("agents:a").unwrap(), 1);
    assert_eq!(store.get("agents:a").unwrap(), None);
    assert_eq!(store.del("agents:a").unwrap(), 0);
}

#[test]
fn set_overwrites_existing_value() {
    let store = MemoryStore::new();

    assert!(store.set("agents:a", b"v1").unwrap());
    assert!(store.set("agents:a", b"v2").unwrap());
    assert_eq!(store.get("agents:a").unwrap().as_deref(), Some(&b"v2"[..]));
}

#[test]
fn keys_filters_by_glob_pattern() {
    let store = MemoryStore::new();
    store.set("agents:a", b"1").unwrap();
    store.set("agents:b", b"2").unwrap();
    store.set("missions:a", b"3").unwrap();

    let keys = store.keys("agents:*").unwrap();
    assert_eq!(keys, vec!["agents:a".to_string(), "agents:b".to_string()]);

    let all = store.keys("*").unwrap();
    assert_eq!(all.len(), 3);

    assert!(store.keys("other:*").unwrap().is_empty());
}

#[test]
fn cloned_handles_share_one_map() {
    let store = MemoryStore::new();
    let other = store.clone();

    store.set("agents:a", b"1").unwrap();
    assert_eq!(other.get("agents:a").unwrap().as_deref(), Some(&b"1"[..]));

    other.del("agents:a").unwrap();
    assert_eq!(store.get("agents:a").unwrap(), None);
}

#[test]
fn disconnected_store_fails_every_operation() {
    let store = MemoryStore::new();
    store.set("agents:a", b"1").unwrap();

    store.disconnect();
    assert!(matches!(
        store.set("agents:b", b"2"),
        Err(StoreError::Connection { .. })
    ));
    assert!(matches!(
        store.get("agents:a"),
        Err(StoreError::Connection { .. })
    ));
    assert!(matches!(
        store.del("agents:a"),
        Err(StoreError::Connection { .. })
    ));
    assert!(matches!(
        store.keys("agents:*"),
        Err(StoreError::Connection { .. })
    ));

    store.reconnect();
    assert_eq!(store.get("agents:a").unwrap().as_deref(), Some(&b"1"[..]));
}

#[test]
fn disconnect_is_visible_through_cloned_handles() {
    let store = MemoryStore::new();
    let other = store.clone();

    store.disconnect();
    assert!(matches!(
        other.get("agents:a"),
        Err(StoreError::Connection { .. })
    ));
}
