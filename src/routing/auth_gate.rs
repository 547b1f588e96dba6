//! Auth gate: keeps anonymous users on auth routes and authenticated users
//! off them.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use crate::routing::{RedirectDecision, RedirectReason};
use crate::state::auth::AuthState;
use crate::state::lang::Language;

/// Decide whether the current path needs an auth redirect.
///
/// A loading session suspends all decisions; the caller renders a blocking
/// spinner instead of route content. Admin credentials are sent to the
/// admin login rather than the app login.
#[must_use]
pub fn decide(session: &AuthState, is_auth_route: bool, lang: Language) -> Option<RedirectDecision> {
    if session.loading {
        return None;
    }

    if !session.is_logged_in() {
        if is_auth_route {
            // Already where an anonymous user belongs.
            return None;
        }
        let target = if session.is_admin {
            format!("/{}/admin/login", lang.code())
        } else {
            format!("/{}/login", lang.code())
        };
        return Some(RedirectDecision {
            target,
            reason: RedirectReason::AuthRequired,
        });
    }

    if is_auth_route {
        return Some(RedirectDecision {
            target: format!("/{}/dashboard", lang.code()),
            reason: RedirectReason::LeaveAuthPage,
        });
    }

    None
}
