use super::*;

#[test]
fn non_admins_see_no_admin_only_entries() {
    let items = visible_items(WORKSPACE_NAV, false);
    assert!(items.is_empty());
}

#[test]
fn admins_see_the_full_workspace_section() {
    let items = visible_items(WORKSPACE_NAV, true);
    let hrefs: Vec<_> = items.iter().map(|i| i.href).collect();
    assert_eq!(hrefs, vec!["/users", "/teams"]);
}

#[test]
fn general_section_is_visible_to_everyone() {
    assert_eq!(visible_items(GENERAL_NAV, false).len(), GENERAL_NAV.len());
    assert_eq!(visible_items(GENERAL_NAV, true).len(), GENERAL_NAV.len());
}

#[test]
fn active_route_matches_exact_and_nested_paths() {
    assert!(is_active("/en/live-chat", "/en/live-chat"));
    assert!(is_active("/en/live-chat/42", "/en/live-chat"));
    assert!(!is_active("/en/live-chat-archive", "/en/live-chat"));
    assert!(!is_active("/en/dashboard", "/en/live-chat"));
}
