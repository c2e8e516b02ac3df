//! Core types used throughout the project.

use std::borrow::Borrow;
use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Locale identifier (e.g., `"en"`, `"fr"`).
///
/// No validation happens here; membership in the configured locale set is
/// checked by whoever reads a locale from outside (see `LocaleStore::open`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn locale_compares_with_str() {
        let locale = Locale::from("fr");

        expect_that!(locale == "fr", eq(true));
        expect_that!(locale == "en", eq(false));
        expect_that!(locale.to_string(), eq("fr"));
    }

    #[googletest::test]
    fn locale_is_usable_as_str_keyed_map_key() {
        let mut map = HashMap::new();
        map.insert(Locale::from("en"), 1);

        expect_that!(map.get("en"), some(eq(&1)));
        expect_that!(map.get("fr"), none());
    }

    #[googletest::test]
    fn locale_serializes_as_plain_string() {
        let json = serde_json::to_string(&Locale::from("en")).unwrap();

        expect_that!(json, eq("\"en\""));
    }
}
