//! Active interface language.
//!
//! The URL is the source of truth: when a supported language prefix appears
//! in the path, the active language follows it and the preference is
//! persisted under the `country` key for the next session. A malformed or
//! missing stored value falls back to the default (Arabic).

#[cfg(test)]
#[path = "lang_test.rs"]
mod lang_test;

use crate::storage::{KeyValueStore, keys};

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    En,
    #[default]
    Ar,
    Id,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Self; 3] = [Self::En, Self::Ar, Self::Id];

    /// Parse a language code; anything outside the supported set is rejected.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    /// The URL / storage code for this language.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::Id => "id",
        }
    }

    /// Text direction for this language.
    #[must_use]
    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::En | Self::Id => "ltr",
        }
    }

    /// Read the persisted preference, ignoring malformed values.
    #[must_use]
    pub fn from_store(store: &dyn KeyValueStore) -> Self {
        store
            .get(keys::COUNTRY)
            .as_deref()
            .and_then(Self::parse)
            .unwrap_or_default()
    }

    /// Persist this language as the preference for the next session.
    pub fn persist(self, store: &dyn KeyValueStore) {
        store.set(keys::COUNTRY, self.code());
    }
}
