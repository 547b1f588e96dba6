//! Path normalizer: language-prefix extraction and canonical path
//! computation.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use crate::state::lang::Language;

/// Parsed route, recomputed on every navigation event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathInfo {
    /// The raw browser path as observed.
    pub raw: String,
    /// The supported language found in the first segment, if any.
    pub lang: Option<Language>,
    /// The path below the language prefix (always slash-leading).
    pub remainder: String,
    /// Corrected path to redirect to when the prefix is missing.
    pub canonical: Option<String>,
}

impl PathInfo {
    /// Whether the first segment is a supported language code.
    #[must_use]
    pub fn is_supported_lang(&self) -> bool {
        self.lang.is_some()
    }
}

/// Parse `raw_path` and compute the canonical corrected path when the
/// language prefix is missing.
///
/// The root path maps to the distinguished default landing
/// `/{preferred}/dashboard`; any other unprefixed path gets the preferred
/// language prepended. Pure: the caller decides whether the canonical path
/// warrants a redirect.
#[must_use]
pub fn normalize(raw_path: &str, preferred: Language) -> PathInfo {
    let mut segments = raw_path.split('/').filter(|s| !s.is_empty());

    let Some(first) = segments.next() else {
        // Root (or empty) path: distinguished default-landing rule.
        return PathInfo {
            raw: raw_path.to_owned(),
            lang: None,
            remainder: "/".to_owned(),
            canonical: Some(format!("/{}/dashboard", preferred.code())),
        };
    };

    if let Some(lang) = Language::parse(first) {
        let rest = segments.collect::<Vec<_>>().join("/");
        return PathInfo {
            raw: raw_path.to_owned(),
            lang: Some(lang),
            remainder: format!("/{rest}"),
            canonical: None,
        };
    }

    let canonical = if raw_path.starts_with('/') {
        format!("/{}{raw_path}", preferred.code())
    } else {
        format!("/{}/{raw_path}", preferred.code())
    };
    PathInfo {
        raw: raw_path.to_owned(),
        lang: None,
        remainder: raw_path.to_owned(),
        canonical: Some(canonical),
    }
}

/// Rewrite `path` so its language prefix is `lang`, prepending the prefix if
/// the path has none. Used by the language switcher.
#[must_use]
pub fn with_lang_prefix(path: &str, lang: Language) -> String {
    let info = normalize(path, lang);
    if info.is_supported_lang() {
        format!("/{}{}", lang.code(), info.remainder)
    } else {
        info.canonical.unwrap_or_else(|| format!("/{}", lang.code()))
    }
}
