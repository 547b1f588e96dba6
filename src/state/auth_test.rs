use super::*;
use crate::storage::MemoryStore;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: "Test".to_owned(),
        role: None,
    }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn auth_state_starts_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_admin);
}

#[test]
fn resolve_with_user_ends_loading() {
    let mut state = AuthState::default();
    state.resolve(Some(user("u1")));
    assert!(!state.loading);
    assert!(state.is_logged_in());
}

#[test]
fn resolve_without_user_ends_loading_as_anonymous() {
    let mut state = AuthState::default();
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn sign_out_clears_user_without_reentering_loading() {
    let mut state = AuthState {
        user: Some(user("u1")),
        loading: false,
        is_admin: true,
    };
    state.sign_out();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_admin);
}

// =============================================================
// Session bootstrap
// =============================================================

#[test]
fn bootstrap_without_credential_is_anonymous() {
    let store = MemoryStore::new();
    assert_eq!(bootstrap(&store), SessionBootstrap::Anonymous);
}

#[test]
fn bootstrap_with_credential_fetches_app_profile() {
    let store = MemoryStore::new();
    store.set(keys::ACCESS_TOKEN, "tok");
    assert_eq!(bootstrap(&store), SessionBootstrap::FetchProfile { admin: false });
}

#[test]
fn bootstrap_with_admin_flag_fetches_admin_profile() {
    let store = MemoryStore::new();
    store.set(keys::ACCESS_TOKEN, "tok");
    store.set(keys::ADMIN, "true");
    assert_eq!(bootstrap(&store), SessionBootstrap::FetchProfile { admin: true });
}

#[test]
fn bootstrap_normalizes_missing_admin_flag() {
    let store = MemoryStore::new();
    let _ = bootstrap(&store);
    assert_eq!(store.get(keys::ADMIN), Some("false".to_owned()));
}

#[test]
fn bootstrap_treats_non_true_admin_flag_as_false() {
    let store = MemoryStore::new();
    store.set(keys::ACCESS_TOKEN, "tok");
    store.set(keys::ADMIN, "yes");
    assert_eq!(bootstrap(&store), SessionBootstrap::FetchProfile { admin: false });
    assert_eq!(store.get(keys::ADMIN), Some("false".to_owned()));
}
