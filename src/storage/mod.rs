//! Persisted key-value boundary.
//!
//! The app keeps a handful of flat string keys in browser `localStorage`
//! (credential token, admin flag, language preference). Consumers receive a
//! [`KeyValueStore`] rather than touching the global storage object, so tests
//! and server-side rendering can run against [`MemoryStore`].
//!
//! Writes are last-writer-wins and reads are snapshot-per-evaluation; no
//! locking is involved on the single-threaded UI loop.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod local;

use std::cell::RefCell;
use std::collections::HashMap;

pub use local::LocalStore;

/// Keys used in the persisted namespace.
pub mod keys {
    /// Opaque credential token; presence means "try a profile fetch".
    pub const ACCESS_TOKEN: &str = "access_token";
    /// Refresh token issued alongside the access token.
    pub const REFRESH_TOKEN: &str = "refresh_token";
    /// `"true"` when the stored credential belongs to an admin account.
    pub const ADMIN: &str = "admin";
    /// Active language code (`en`, `ar`, `id`).
    pub const COUNTRY: &str = "country";
}

/// A flat string-keyed persisted store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove the value stored under `key`.
    fn remove(&self, key: &str);
    /// Remove every key in the namespace (used on sign-out).
    fn clear(&self);
}

/// In-memory store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
