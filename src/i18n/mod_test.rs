use super::*;

#[test]
fn lookup_returns_the_requested_language() {
    assert_eq!(t(Language::En, "dashboard"), "Dashboard");
    assert_eq!(t(Language::Ar, "dashboard"), "لوحة التحكم");
    assert_eq!(t(Language::Id, "dashboard"), "Dasbor");
}

#[test]
fn unknown_key_falls_back_to_the_key_itself() {
    assert_eq!(t(Language::En, "nonexistent-key"), "nonexistent-key");
    assert_eq!(t(Language::Ar, "nonexistent-key"), "nonexistent-key");
}

#[test]
fn every_english_key_exists_in_all_languages() {
    for (key, _) in EN {
        assert!(
            lookup(Language::Ar, key).is_some(),
            "missing Arabic entry for {key}"
        );
        assert!(
            lookup(Language::Id, key).is_some(),
            "missing Indonesian entry for {key}"
        );
    }
}
