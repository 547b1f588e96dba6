use super::*;

#[test]
fn permission_entry_accepts_plain_strings() {
    let entry: PermissionEntry = serde_json::from_str("\"view-role\"").expect("parse");
    assert_eq!(entry.name(), Some("view-role"));
}

#[test]
fn permission_entry_accepts_name_objects() {
    let entry: PermissionEntry =
        serde_json::from_str(r#"{"name":"add-role","id":7}"#).expect("parse");
    assert_eq!(entry.name(), Some("add-role"));
}

#[test]
fn permission_entry_without_name_yields_none() {
    let entry: PermissionEntry = serde_json::from_str(r#"{"id":7}"#).expect("parse");
    assert_eq!(entry.name(), None);
}

#[test]
fn profile_envelope_reads_user_variant() {
    let json = r#"{"response":{"user":{"id":"u1","name":"Amira","role":null}}}"#;
    let envelope: ProfileEnvelope = serde_json::from_str(json).expect("parse");
    let user = envelope.into_user().expect("user");
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Amira");
    assert!(user.role.is_none());
}

#[test]
fn profile_envelope_reads_admin_variant() {
    let json = r#"{"response":{"admin":{"id":"a1","name":"Root"}}}"#;
    let envelope: ProfileEnvelope = serde_json::from_str(json).expect("parse");
    assert_eq!(envelope.into_user().expect("user").id, "a1");
}

#[test]
fn profile_envelope_without_record_yields_none() {
    let json = r#"{"response":{}}"#;
    let envelope: ProfileEnvelope = serde_json::from_str(json).expect("parse");
    assert!(envelope.into_user().is_none());
}

#[test]
fn role_permissions_mix_strings_and_objects() {
    let json = r#"{"name":"agent","permissions":["view-chat",{"name":"view-admin"}]}"#;
    let role: Role = serde_json::from_str(json).expect("parse");
    let names: Vec<_> = role.permissions.iter().filter_map(PermissionEntry::name).collect();
    assert_eq!(names, vec!["view-chat", "view-admin"]);
}

#[test]
fn token_body_tolerates_missing_fields() {
    let envelope: TokenEnvelope = serde_json::from_str(r#"{"response":{}}"#).expect("parse");
    assert!(envelope.response.token.is_none());
    assert!(envelope.response.refresh_token.is_none());
}
