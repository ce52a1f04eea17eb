use super::*;

// =============================================================
// MemorySessionStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    assert!(MemorySessionStore::default().get().is_none());
}

#[test]
fn memory_store_round_trips_token() {
    let store = MemorySessionStore::default();
    assert_eq!(store.set(&Credential::new("T")), Ok(()));
    assert_eq!(store.get(), Some(Credential::new("T")));
}

#[test]
fn memory_store_survives_simulated_reload() {
    let before_reload = MemorySessionStore::default();
    before_reload.set(&Credential::new("opaque.token.value")).unwrap();
    let after_reload = before_reload.clone();
    drop(before_reload);
    assert_eq!(after_reload.get().map(|c| c.as_str().to_owned()), Some("opaque.token.value".to_owned()));
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemorySessionStore::with_token("old");
    store.set(&Credential::new("new")).unwrap();
    assert_eq!(store.get(), Some(Credential::new("new")));
}

#[test]
fn memory_store_clear_removes_token_and_is_idempotent() {
    let store = MemorySessionStore::with_token("T");
    store.clear();
    assert!(store.get().is_none());
    store.clear();
    assert!(store.get().is_none());
}

// =============================================================
// BrowserSessionStore
// =============================================================

#[test]
fn browser_store_uses_configured_key() {
    let cfg = ClientConfig::from_values(None, Some("auth_token")).unwrap();
    assert_eq!(BrowserSessionStore::new(&cfg).key(), "auth_token");
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_without_a_browser() {
    let store = BrowserSessionStore::new(&ClientConfig::default());
    assert_eq!(store.set(&Credential::new("T")), Err(SessionStoreError::Unavailable));
    assert!(store.get().is_none());
    store.clear();
}
