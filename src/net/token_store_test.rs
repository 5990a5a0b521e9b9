use super::*;

#[test]
fn memory_store_starts_anonymous() {
    let store = MemoryTokenStore::default();
    assert!(store.token().is_none());
}

#[test]
fn memory_store_set_then_clear() {
    let store = MemoryTokenStore::default();
    store.set_token("abc");
    assert_eq!(store.token().as_deref(), Some("abc"));
    store.clear_token();
    assert!(store.token().is_none());
}

#[test]
fn memory_store_treats_blank_token_as_missing() {
    let store = MemoryTokenStore::with_token("  ");
    assert!(store.token().is_none());
}

#[test]
fn memory_store_set_replaces_previous_token() {
    let store = MemoryTokenStore::with_token("old");
    store.set_token("new");
    assert_eq!(store.token().as_deref(), Some("new"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_anonymous_outside_browser() {
    let store = LocalStorageTokenStore;
    store.set_token("abc");
    assert!(store.token().is_none());
    store.clear_token();
}

#[test]
fn memory_store_trims_padded_token() {
    let store = MemoryTokenStore::with_token(" abc\n");
    assert_eq!(store.token().as_deref(), Some("abc"));
}
