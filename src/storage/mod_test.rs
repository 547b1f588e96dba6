use super::*;

#[test]
fn memory_store_get_misses_when_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get(keys::ACCESS_TOKEN), None);
}

#[test]
fn memory_store_set_then_get_returns_value() {
    let store = MemoryStore::new();
    store.set(keys::COUNTRY, "en");
    assert_eq!(store.get(keys::COUNTRY), Some("en".to_owned()));
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryStore::new();
    store.set(keys::COUNTRY, "en");
    store.set(keys::COUNTRY, "ar");
    assert_eq!(store.get(keys::COUNTRY), Some("ar".to_owned()));
}

#[test]
fn memory_store_remove_deletes_single_key() {
    let store = MemoryStore::new();
    store.set(keys::ACCESS_TOKEN, "tok");
    store.set(keys::ADMIN, "true");
    store.remove(keys::ACCESS_TOKEN);
    assert_eq!(store.get(keys::ACCESS_TOKEN), None);
    assert_eq!(store.get(keys::ADMIN), Some("true".to_owned()));
}

#[test]
fn memory_store_clear_empties_namespace() {
    let store = MemoryStore::new();
    store.set(keys::ACCESS_TOKEN, "tok");
    store.set(keys::COUNTRY, "id");
    store.clear();
    assert_eq!(store.get(keys::ACCESS_TOKEN), None);
    assert_eq!(store.get(keys::COUNTRY), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_is_inert_outside_the_browser() {
    // Without the hydrate feature the localStorage-backed store must miss on
    // reads and swallow writes instead of panicking.
    let store = LocalStore;
    store.set(keys::ADMIN, "true");
    assert_eq!(store.get(keys::ADMIN), None);
}
