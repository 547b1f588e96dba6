use super::*;
use crate::net::types::{PermissionEntry, Role};

fn session(is_admin: bool) -> AuthState {
    AuthState {
        user: None,
        loading: false,
        is_admin,
    }
}

fn perms(capabilities: &[&str]) -> PermissionSet {
    let role = Role {
        name: None,
        permissions: capabilities
            .iter()
            .map(|c| PermissionEntry::Name((*c).to_owned()))
            .collect(),
    };
    PermissionSet::from_role(Some(&role))
}

fn cfg() -> GuardConfig {
    GuardConfig::default()
}

#[test]
fn loading_suppresses_the_gate_regardless_of_path() {
    let session = AuthState::default();
    assert!(session.loading);
    let decision = decide(&session, "/en/users", Language::En, &perms(&[]), &cfg());
    assert_eq!(decision, None);
}

#[test]
fn admin_only_path_blocked_without_admin_flag() {
    let decision =
        decide(&session(false), "/en/users", Language::En, &perms(&[]), &cfg()).expect("decision");
    assert_eq!(decision.target, "/en/dashboard");
    assert_eq!(decision.reason, RedirectReason::PermissionDenied);
}

#[test]
fn admin_only_path_allowed_for_admins() {
    let decision = decide(&session(true), "/en/users", Language::En, &perms(&[]), &cfg());
    assert_eq!(decision, None);
}

#[test]
fn capability_guarded_path_blocked_without_capability() {
    let decision =
        decide(&session(false), "/ar/admin/reports", Language::Ar, &perms(&[]), &cfg())
            .expect("decision");
    assert_eq!(decision.target, "/ar/dashboard");
    assert_eq!(decision.reason, RedirectReason::PermissionDenied);
}

#[test]
fn capability_guarded_path_allowed_with_capability() {
    let decision = decide(
        &session(false),
        "/ar/admin/reports",
        Language::Ar,
        &perms(&["view-admin"]),
        &cfg(),
    );
    assert_eq!(decision, None);
}

#[test]
fn capability_guarded_path_allowed_for_admins_without_capability() {
    let decision = decide(&session(true), "/ar/admin/reports", Language::Ar, &perms(&[]), &cfg());
    assert_eq!(decision, None);
}

#[test]
fn unguarded_path_is_left_alone() {
    let decision = decide(&session(false), "/en/live-chat", Language::En, &perms(&[]), &cfg());
    assert_eq!(decision, None);
}

#[test]
fn guard_is_scoped_to_the_active_language_prefix() {
    // A prefix under a different language is not this evaluation's concern;
    // the normalizer stage owns prefix correctness.
    let decision = decide(&session(false), "/ar/users", Language::En, &perms(&[]), &cfg());
    assert_eq!(decision, None);
}

#[test]
fn every_matching_capability_rule_must_pass() {
    let custom = GuardConfig {
        permission_guarded_paths: vec![
            ("view-reports".to_owned(), vec!["/reports".to_owned()]),
            ("view-admin".to_owned(), vec!["/reports".to_owned()]),
        ],
        ..GuardConfig::default()
    };
    // Holding the first-declared capability is not enough if a later rule
    // also matches; evaluation is declaration-ordered and each matching rule
    // must pass.
    let decision = decide(
        &session(false),
        "/en/reports",
        Language::En,
        &perms(&["view-reports"]),
        &custom,
    )
    .expect("decision");
    assert_eq!(decision.reason, RedirectReason::PermissionDenied);

    let decision = decide(
        &session(false),
        "/en/reports",
        Language::En,
        &perms(&["view-reports", "view-admin"]),
        &custom,
    );
    assert_eq!(decision, None);
}
