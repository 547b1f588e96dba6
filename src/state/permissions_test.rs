use super::*;
use crate::net::types::{PermissionEntry, Role};

fn role(entries: Vec<PermissionEntry>) -> Role {
    Role {
        name: Some("agent".to_owned()),
        permissions: entries,
    }
}

#[test]
fn absent_role_yields_empty_set() {
    let perms = PermissionSet::from_role(None);
    assert!(perms.is_empty());
    assert!(!perms.has("view-admin"));
}

#[test]
fn string_entries_become_capabilities() {
    let perms = PermissionSet::from_role(Some(&role(vec![
        PermissionEntry::Name("view-chat".to_owned()),
        PermissionEntry::Name("view-admin".to_owned()),
    ])));
    assert!(perms.has("view-chat"));
    assert!(perms.has("view-admin"));
    assert!(!perms.has("add-role"));
}

#[test]
fn object_entries_become_capabilities() {
    let perms = PermissionSet::from_role(Some(&role(vec![PermissionEntry::Object {
        name: Some("view-admin".to_owned()),
    }])));
    assert!(perms.has("view-admin"));
}

#[test]
fn nameless_object_entries_are_skipped() {
    let perms = PermissionSet::from_role(Some(&role(vec![
        PermissionEntry::Object { name: None },
        PermissionEntry::Name("view-chat".to_owned()),
    ])));
    assert!(perms.has("view-chat"));
    assert!(!perms.is_empty());
}

#[test]
fn role_without_permissions_yields_empty_set() {
    let perms = PermissionSet::from_role(Some(&role(vec![])));
    assert!(perms.is_empty());
}
