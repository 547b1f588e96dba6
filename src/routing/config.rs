//! Guard configuration: which routes are auth routes, which are admin-only,
//! and which require a capability. Configuration, not logic — supplied by
//! the caller and matched with plain string tests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::lang::Language;

/// Route sets consumed by the auth and permission gates.
#[derive(Clone, Debug)]
pub struct GuardConfig {
    /// Sub-paths whose presence anywhere in the path marks an auth route.
    pub auth_route_fragments: Vec<String>,
    /// Path prefixes (below the language prefix) reserved for admins.
    pub admin_only_paths: Vec<String>,
    /// Capability-guarded prefixes, evaluated in declaration order.
    pub permission_guarded_paths: Vec<(String, Vec<String>)>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            auth_route_fragments: vec!["/login".to_owned(), "/verify-otp".to_owned()],
            admin_only_paths: vec![
                "/roles".to_owned(),
                "/users".to_owned(),
                "/review-management".to_owned(),
                "/user-questions".to_owned(),
            ],
            permission_guarded_paths: vec![("view-admin".to_owned(), vec!["/admin".to_owned()])],
        }
    }
}

impl GuardConfig {
    /// Whether `path` is an auth route (login, OTP verification).
    #[must_use]
    pub fn is_auth_route(&self, path: &str) -> bool {
        self.auth_route_fragments.iter().any(|f| path.contains(f.as_str()))
    }
}

/// Whether `path` starts with any of `prefixes` under the active language
/// prefix.
#[must_use]
pub fn matches_any_prefix(path: &str, lang: Language, prefixes: &[String]) -> bool {
    prefixes
        .iter()
        .any(|p| path.starts_with(&format!("/{}{p}", lang.code())))
}
