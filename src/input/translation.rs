//! Dictionary and translation tree definitions

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::num::FpCategory;

use serde_json::Value;
use thiserror::Error;

use crate::types::Locale;

/// Separator used when none is configured.
pub const DEFAULT_KEY_SEPARATOR: &str = ".";

#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The resource is not valid JSON.
    #[error("Failed to parse dictionary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Dictionary root must be an object mapping locales to translation trees")]
    /// The resource is JSON but not an object keyed by locale.
    NotAnObject,
}

/// A node of a translation tree: a leaf string or a nested tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// Leaf string.
    Text(String),
    /// Nested sub-tree.
    Tree(TranslationTree),
}

/// Nested mapping from key segments to nodes (e.g. `nav` -> `home` -> "Home").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTree {
    /// Children by key segment.
    children: BTreeMap<String, TranslationNode>,
}

impl TranslationTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a JSON value.
    ///
    /// Strings become leaves; non-zero numbers and `true` become leaves
    /// holding their JSON text. Falsy values (`null`, `false`, `0`) and arrays
    /// are dropped, as is anything at the root that is not an object.
    #[must_use]
    pub fn from_json(json: &Value) -> Self {
        let Value::Object(map) = json else {
            return Self::new();
        };

        let children = map
            .iter()
            .filter_map(|(key, value)| {
                let node = match value {
                    Value::Object(_) => TranslationNode::Tree(Self::from_json(value)),
                    Value::String(s) => TranslationNode::Text(s.clone()),
                    Value::Number(n) if !is_zero(n) => TranslationNode::Text(n.to_string()),
                    Value::Bool(true) => TranslationNode::Text("true".to_string()),
                    Value::Number(_) | Value::Bool(false) | Value::Null | Value::Array(_) => {
                        tracing::debug!(key = %key, "Dropping translation value without text");
                        return None;
                    }
                };
                Some((key.clone(), node))
            })
            .collect();

        Self { children }
    }

    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&TranslationNode> {
        self.children.get(segment)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Walk the tree one segment at a time.
    ///
    /// Returns `None` when a segment is absent, when a leaf is reached before
    /// the path is exhausted, when the path ends on a sub-tree, or when the
    /// leaf is empty (an empty string never replaces existing content).
    pub fn resolve<'a, I>(&self, segments: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = self;
        let mut segments = segments.into_iter().peekable();

        while let Some(segment) = segments.next() {
            match current.get(segment)? {
                TranslationNode::Tree(tree) => current = tree,
                TranslationNode::Text(text) => {
                    let exhausted = segments.peek().is_none();
                    return (exhausted && !text.is_empty()).then_some(text.as_str());
                }
            }
        }

        None
    }

    /// Flatten into a `joined.key -> text` map.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use site_i18n::input::translation::TranslationTree;
    ///
    /// let tree = TranslationTree::from_json(&json!({
    ///     "nav": { "home": "Home", "docs": "Docs" }
    /// }));
    ///
    /// let flattened = tree.flatten(".");
    /// assert_eq!(flattened.get("nav.home"), Some(&"Home".to_string()));
    /// assert_eq!(flattened.get("nav.docs"), Some(&"Docs".to_string()));
    /// ```
    #[must_use]
    pub fn flatten(&self, separator: &str) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        self.flatten_into(separator, None, &mut result);
        result
    }

    /// Recursive step of `flatten`; `prefix` is the joined key of `self`.
    fn flatten_into(
        &self,
        separator: &str,
        prefix: Option<&str>,
        result: &mut BTreeMap<String, String>,
    ) {
        for (key, node) in &self.children {
            let full_key =
                prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
            match node {
                TranslationNode::Tree(tree) => {
                    tree.flatten_into(separator, Some(full_key.as_str()), result);
                }
                TranslationNode::Text(text) => {
                    result.insert(full_key, text.clone());
                }
            }
        }
    }
}

/// `0`, `-0`, `0.0` and friends.
fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero)
}

/// Mapping from locale to its translation tree.
///
/// Immutable once built; the applier caches one for the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Tree per locale.
    trees: HashMap<Locale, TranslationTree>,
}

impl Dictionary {
    /// A dictionary mapping every given locale to an empty tree.
    ///
    /// Every lookup against it is not-found, so applying it changes nothing.
    #[must_use]
    pub fn empty<'a>(locales: impl IntoIterator<Item = &'a Locale>) -> Self {
        Self { trees: locales.into_iter().map(|l| (l.clone(), TranslationTree::new())).collect() }
    }

    /// Parse a dictionary from its JSON text.
    ///
    /// # Errors
    /// - Invalid JSON
    /// - Root is not an object
    pub fn from_json_str(text: &str) -> Result<Self, DictionaryError> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }

    /// # Errors
    /// Returns `DictionaryError::NotAnObject` when the root is not an object.
    pub fn from_json(json: &Value) -> Result<Self, DictionaryError> {
        let Value::Object(map) = json else {
            return Err(DictionaryError::NotAnObject);
        };

        let trees = map
            .iter()
            .map(|(locale, tree)| (Locale::from(locale.as_str()), TranslationTree::from_json(tree)))
            .collect();

        Ok(Self { trees })
    }

    #[must_use]
    pub fn tree(&self, locale: &str) -> Option<&TranslationTree> {
        self.trees.get(locale)
    }

    /// Locales present in the dictionary, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<_> = self.trees.keys().collect();
        locales.sort();
        locales
    }

    /// Resolve a dotted key in the tree of `locale`.
    #[must_use]
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.lookup_with_separator(locale, key, DEFAULT_KEY_SEPARATOR)
    }

    /// Resolve `key` split on `separator` in the tree of `locale`.
    ///
    /// There is no fallback to another locale: a key missing from `locale`
    /// is not-found even if another locale has it.
    #[must_use]
    pub fn lookup_with_separator(&self, locale: &str, key: &str, separator: &str) -> Option<&str> {
        self.tree(locale)?.resolve(key.split(separator))
    }

    /// All leaf keys of `locale`, joined with `separator`.
    #[must_use]
    pub fn flatten(&self, locale: &str, separator: &str) -> BTreeMap<String, String> {
        self.tree(locale).map(|tree| tree.flatten(separator)).unwrap_or_default()
    }

    /// Leaf keys of `reference` that do not resolve in `locale`, sorted.
    #[must_use]
    pub fn missing_keys(&self, reference: &str, locale: &str, separator: &str) -> Vec<String> {
        self.flatten(reference, separator)
            .into_keys()
            .filter(|key| self.lookup_with_separator(locale, key, separator).is_none())
            .collect()
    }
}

/// Look up `key` for `locale` in `dictionary`.
///
/// # Examples
/// ```
/// use site_i18n::input::translation::{Dictionary, lookup};
///
/// let dictionary = Dictionary::from_json_str(
///     r#"{"en": {"nav": {"home": "Home"}}, "fr": {"nav": {"home": "Accueil"}}}"#,
/// ).unwrap();
///
/// assert_eq!(lookup(&dictionary, "fr", "nav.home"), Some("Accueil"));
/// assert_eq!(lookup(&dictionary, "de", "nav.home"), None);
/// ```
#[must_use]
pub fn lookup<'a>(dictionary: &'a Dictionary, locale: &str, key: &str) -> Option<&'a str> {
    dictionary.lookup(locale, key)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    /// English tree with edge-case leaves, French tree with `nav.home` only.
    fn sample() -> Dictionary {
        Dictionary::from_json(&json!({
            "en": {
                "nav": { "home": "Home", "docs": "Documentation" },
                "contact": { "submit": "Send" },
                "empty": "",
                "version": 2,
                "count": 0
            },
            "fr": {
                "nav": { "home": "Accueil" }
            }
        }))
        .unwrap()
    }

    #[rstest]
    #[case::leaf("en", "nav.home", Some("Home"))]
    #[case::other_locale("fr", "nav.home", Some("Accueil"))]
    #[case::missing_in_locale("fr", "nav.docs", None)]
    #[case::unknown_locale("de", "nav.home", None)]
    #[case::absent_segment("en", "footer.copyright", None)]
    #[case::ends_on_subtree("en", "nav", None)]
    #[case::leaf_before_end("en", "nav.home.title", None)]
    #[case::case_sensitive("en", "Nav.Home", None)]
    #[case::empty_leaf("en", "empty", None)]
    #[case::number_leaf("en", "version", Some("2"))]
    #[case::zero_leaf("en", "count", None)]
    #[case::empty_key("en", "", None)]
    fn test_lookup(#[case] locale: &str, #[case] key: &str, #[case] expected: Option<&str>) {
        let dictionary = sample();

        assert_eq!(lookup(&dictionary, locale, key), expected);
    }

    #[rstest]
    fn test_lookup_with_custom_separator() {
        let dictionary = sample();

        assert_eq!(dictionary.lookup_with_separator("en", "nav/home", "/"), Some("Home"));
        assert_eq!(dictionary.lookup_with_separator("en", "nav.home", "/"), None);
    }

    #[googletest::test]
    fn test_from_json_drops_values_without_text() {
        let tree = TranslationTree::from_json(&json!({
            "null": null,
            "no": false,
            "zero": 0,
            "negative_zero": -0.0,
            "yes": true,
            "items": ["a", "b"],
            "text": "kept"
        }));

        let flattened = tree.flatten(".");

        let keys: Vec<String> = flattened.keys().cloned().collect();
        expect_that!(keys, elements_are![eq("text"), eq("yes")]);
        expect_that!(flattened.get("yes"), some(eq(&"true".to_string())));
    }

    #[rstest]
    fn test_from_json_str_rejects_non_object_root() {
        let not_object = Dictionary::from_json_str(r#"["en"]"#);
        let not_json = Dictionary::from_json_str("{ not json");

        assert!(matches!(not_object, Err(DictionaryError::NotAnObject)));
        assert!(matches!(not_json, Err(DictionaryError::Parse(_))));
    }

    #[rstest]
    fn test_non_object_locale_becomes_empty_tree() {
        let dictionary = Dictionary::from_json(&json!({ "en": "Hello" })).unwrap();

        assert_eq!(dictionary.tree("en").map(TranslationTree::is_empty), Some(true));
    }

    #[googletest::test]
    fn test_empty_dictionary_maps_every_locale_to_empty_tree() {
        let locales = [Locale::from("en"), Locale::from("fr")];
        let dictionary = Dictionary::empty(&locales);

        let codes: Vec<String> = dictionary.locales().iter().map(ToString::to_string).collect();
        expect_that!(codes, elements_are![eq("en"), eq("fr")]);
        expect_that!(dictionary.tree("fr").is_some_and(TranslationTree::is_empty), eq(true));
        expect_that!(dictionary.lookup("en", "nav.home").is_none(), eq(true));
    }

    #[googletest::test]
    fn test_flatten_nested() {
        let flattened = sample().flatten("en", ".");

        expect_that!(flattened.get("nav.home"), some(eq(&"Home".to_string())));
        expect_that!(flattened.get("contact.submit"), some(eq(&"Send".to_string())));
        expect_that!(flattened.get("empty"), some(eq(&String::new())));
        expect_that!(flattened.len(), eq(5));
    }

    #[rstest]
    fn test_flatten_unknown_locale_is_empty() {
        assert!(sample().flatten("de", ".").is_empty());
    }

    #[googletest::test]
    fn test_missing_keys() {
        let missing = sample().missing_keys("en", "fr", ".");

        expect_that!(
            missing,
            elements_are![eq("contact.submit"), eq("empty"), eq("nav.docs"), eq("version")]
        );
    }
}
