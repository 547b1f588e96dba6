//! The ordered guard pipeline, run once per navigation event.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use crate::routing::config::GuardConfig;
use crate::routing::{RedirectDecision, RedirectReason, auth_gate, path, permission_gate};
use crate::state::auth::AuthState;
use crate::state::lang::Language;
use crate::state::permissions::PermissionSet;

/// Evaluate all gates against the current facts and return at most one
/// redirect decision.
///
/// Order is fixed: language-prefix normalization, then the auth gate, then
/// the permission gate. A navigation triggered by the returned decision
/// re-runs the pipeline against the new path; because each gate yields
/// nothing once its condition is satisfied, the second pass reaches a fixed
/// point. Permission rules only apply inside the app shell, so they are
/// skipped on auth routes.
#[must_use]
pub fn evaluate(
    session: &AuthState,
    raw_path: &str,
    lang: Language,
    permissions: &PermissionSet,
    cfg: &GuardConfig,
) -> Option<RedirectDecision> {
    let info = path::normalize(raw_path, lang);
    if let Some(canonical) = info.canonical {
        if canonical != raw_path {
            return Some(RedirectDecision {
                target: canonical,
                reason: RedirectReason::LangPrefix,
            });
        }
    }

    let is_auth_route = cfg.is_auth_route(raw_path);
    if let Some(decision) = auth_gate::decide(session, is_auth_route, lang) {
        return Some(decision);
    }

    if is_auth_route {
        return None;
    }
    permission_gate::decide(session, raw_path, lang, permissions, cfg)
}
