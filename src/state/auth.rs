//! Session facts: who is signed in, whether the profile fetch has resolved,
//! and whether the stored credential belongs to an admin account.
//!
//! The state starts in the loading position and stays there until the
//! bootstrap either finds no credential (resolves immediately, no network
//! call) or the profile fetch settles. Gates must treat the loading window
//! as "decide nothing"; the UI renders a blocking spinner instead of route
//! content for its whole span.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::storage::{KeyValueStore, keys};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub is_admin: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            is_admin: false,
        }
    }
}

impl AuthState {
    /// Settle the session with the outcome of the profile fetch. A failed
    /// fetch resolves to "not logged in"; the auth gate then routes to login.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Reset to the signed-out position. Not the loading position: the user
    /// should land on the login page, not on a spinner.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.is_admin = false;
    }

    /// Whether a user record is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// What the session bootstrap should do, derived from the persisted
/// credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionBootstrap {
    /// No credential stored: resolve to anonymous without a network call.
    Anonymous,
    /// Credential present: fetch the profile from the matching endpoint.
    FetchProfile { admin: bool },
}

/// Inspect the persisted credential and decide how to populate the session.
///
/// Also normalizes a missing `admin` flag to `"false"` so later snapshot
/// reads see a definite value.
pub fn bootstrap(store: &dyn KeyValueStore) -> SessionBootstrap {
    let admin = store.get(keys::ADMIN).is_some_and(|v| v == "true");
    if !admin {
        store.set(keys::ADMIN, "false");
    }

    if store.get(keys::ACCESS_TOKEN).is_some() {
        SessionBootstrap::FetchProfile { admin }
    } else {
        SessionBootstrap::Anonymous
    }
}
