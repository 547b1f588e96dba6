//! Permission gate: blocks capability-guarded and admin-only routes for
//! users who lack them.

#[cfg(test)]
#[path = "permission_gate_test.rs"]
mod permission_gate_test;

use crate::routing::config::{GuardConfig, matches_any_prefix};
use crate::routing::{RedirectDecision, RedirectReason};
use crate::state::auth::AuthState;
use crate::state::lang::Language;
use crate::state::permissions::PermissionSet;

/// Decide whether the current path is forbidden for this user.
///
/// Must not evaluate while the session is loading: permissions are unknown
/// until the profile fetch resolves, and an early run would issue a false
/// denial redirect. Capability rules are checked in declaration order
/// before the admin-only set; the fallback target is always the
/// language-prefixed dashboard.
#[must_use]
pub fn decide(
    session: &AuthState,
    path: &str,
    lang: Language,
    permissions: &PermissionSet,
    cfg: &GuardConfig,
) -> Option<RedirectDecision> {
    if session.loading {
        return None;
    }

    let denied = || RedirectDecision {
        target: format!("/{}/dashboard", lang.code()),
        reason: RedirectReason::PermissionDenied,
    };

    for (capability, prefixes) in &cfg.permission_guarded_paths {
        if matches_any_prefix(path, lang, prefixes)
            && !permissions.has(capability)
            && !session.is_admin
        {
            return Some(denied());
        }
    }

    if !session.is_admin && matches_any_prefix(path, lang, &cfg.admin_only_paths) {
        return Some(denied());
    }

    None
}
