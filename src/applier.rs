//! Dictionary loading and translation application.

use crate::document::{
    Document,
    TranslationTarget,
    assign,
};
use crate::input::source::DictionarySource;
use crate::input::translation::Dictionary;
use crate::types::Locale;

/// Outcome of one `apply` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Elements whose text or value was replaced.
    pub applied: usize,
    /// Keys that did not resolve; their elements were left as they were.
    pub missing: Vec<String>,
}

/// Loads the dictionary once and pushes resolved strings into documents.
#[derive(Debug, Clone)]
pub struct TranslationApplier {
    /// `None` until the first `load`; `apply` is a no-op in that state.
    dictionary: Option<Dictionary>,
    /// Locales given empty trees when loading fails.
    locales: Vec<Locale>,
    /// Separator between key segments.
    key_separator: String,
}

impl TranslationApplier {
    /// # Arguments
    /// * `locales` - known locales, mapped to empty trees if loading fails
    /// * `key_separator` - separator between translation key segments
    #[must_use]
    pub fn new(locales: Vec<Locale>, key_separator: &str) -> Self {
        Self { dictionary: None, locales, key_separator: key_separator.to_string() }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.dictionary.is_some()
    }

    /// The loaded dictionary, if any.
    #[must_use]
    pub const fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.as_ref()
    }

    /// Fetch and parse the dictionary, once.
    ///
    /// Later calls return the cached dictionary without touching `source`.
    /// A fetch or parse failure yields an empty dictionary over the known
    /// locales, which makes every later `apply` a no-op.
    pub async fn load<S: DictionarySource>(&mut self, source: &S) -> &Dictionary {
        if self.dictionary.is_none() {
            let dictionary = match Self::fetch(source).await {
                Ok(dictionary) => {
                    tracing::debug!(
                        source = %source.describe(),
                        locales = ?dictionary.locales(),
                        "Dictionary loaded"
                    );
                    dictionary
                }
                Err(message) => {
                    tracing::warn!(
                        source = %source.describe(),
                        "{message}; continuing without translations"
                    );
                    Dictionary::empty(&self.locales)
                }
            };
            self.dictionary = Some(dictionary);
        }

        self.dictionary.get_or_insert_with(|| Dictionary::empty(&self.locales))
    }

    /// Fetch and parse, flattening both failure kinds into a log message.
    async fn fetch<S: DictionarySource>(source: &S) -> Result<Dictionary, String> {
        let text = source.fetch().await.map_err(|e| e.to_string())?;
        Dictionary::from_json_str(&text).map_err(|e| e.to_string())
    }

    /// Resolve `key` for `locale` against the loaded dictionary.
    #[must_use]
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.dictionary()?.lookup_with_separator(locale, key, &self.key_separator)
    }

    /// Rewrite every marked element of `document` for `locale`.
    ///
    /// Elements whose key does not resolve keep their content. Before the
    /// dictionary is loaded nothing is touched.
    pub fn apply<D: Document>(&self, document: &mut D, locale: &Locale) -> ApplyReport {
        let mut report = ApplyReport::default();
        let Some(dictionary) = self.dictionary() else {
            tracing::debug!("Dictionary not loaded yet, skipping apply");
            return report;
        };

        for element in document.marked_elements() {
            let Some(key) = element.translation_key().map(ToString::to_string) else {
                continue;
            };

            match dictionary.lookup_with_separator(locale.as_str(), &key, &self.key_separator) {
                Some(translated) => {
                    assign(element, translated);
                    report.applied += 1;
                }
                None => report.missing.push(key),
            }
        }

        tracing::debug!(
            locale = %locale,
            applied = report.applied,
            missing = report.missing.len(),
            "Translations applied"
        );
        report
    }
}
