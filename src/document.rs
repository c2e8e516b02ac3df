//! Toolkit-independent view of a page's translatable elements.
//!
//! The applier only needs to enumerate marked elements and assign a string
//! to each; [`Document`] and [`TranslationTarget`] are that seam. [`Page`] is
//! an in-memory implementation, serializable as JSON, used by the CLI and
//! tests.

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    /// The page file could not be read.
    #[error("Failed to read page: {0}")]
    Io(#[from] std::io::Error),

    /// The page is not valid page JSON.
    #[error("Failed to parse page: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How a resolved string lands on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Ordinary element: the string replaces its display text.
    Text,
    /// Submit-type input: the string replaces its value attribute.
    SubmitInput,
    /// The page title.
    Title,
    /// The page's meta description: the string replaces its content attribute.
    MetaDescription,
}

impl ElementKind {
    /// Whether the string goes into the value/content attribute rather than
    /// the display text.
    #[must_use]
    pub const fn uses_value(self) -> bool {
        matches!(self, Self::SubmitInput | Self::MetaDescription)
    }
}

/// An element the applier can write a translation into.
pub trait TranslationTarget {
    /// The element's translation key, if it is marked.
    fn translation_key(&self) -> Option<&str>;

    /// Where a resolved string lands.
    fn kind(&self) -> ElementKind;

    /// Replace the display text.
    fn set_text(&mut self, text: &str);

    /// Replace the value (or meta content) attribute.
    fn set_value(&mut self, value: &str);
}

/// Assign a resolved string according to the element kind.
pub fn assign<T: TranslationTarget + ?Sized>(target: &mut T, translated: &str) {
    if target.kind().uses_value() {
        target.set_value(translated);
    } else {
        target.set_text(translated);
    }
}

/// A page whose marked elements can be enumerated.
pub trait Document {
    type Element: TranslationTarget;

    /// Every element carrying a translation key, title and meta description
    /// included.
    fn marked_elements(&mut self) -> impl Iterator<Item = &mut Self::Element>;

    /// Whether an element matching `selector` exists, e.g. the switcher's
    /// mount point.
    fn contains(&self, selector: &str) -> bool;
}

/// An element of the in-memory page model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElement {
    /// Tag name, e.g. `"a"`, `"input"`, `"title"`.
    pub tag: String,

    /// The `type` attribute, meaningful for inputs.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    /// The translation key attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<String>,

    #[serde(default)]
    pub text: String,

    /// The `value` attribute, or `content` for a meta element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl PageElement {
    /// A marked element with display text.
    #[must_use]
    pub fn text(tag: &str, key: &str, text: &str) -> Self {
        Self {
            tag: tag.to_string(),
            translate: Some(key.to_string()),
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// A marked submit input.
    #[must_use]
    pub fn submit(key: &str, value: &str) -> Self {
        Self {
            tag: "input".to_string(),
            input_type: Some("submit".to_string()),
            translate: Some(key.to_string()),
            value: Some(value.to_string()),
            ..Self::default()
        }
    }

    /// Whether `type` is `submit`, ignoring case.
    fn is_submit(&self) -> bool {
        self.input_type.as_deref().is_some_and(|t| t.eq_ignore_ascii_case("submit"))
    }
}

impl TranslationTarget for PageElement {
    fn translation_key(&self) -> Option<&str> {
        self.translate.as_deref()
    }

    fn kind(&self) -> ElementKind {
        match self.tag.to_ascii_lowercase().as_str() {
            "input" if self.is_submit() => ElementKind::SubmitInput,
            "title" => ElementKind::Title,
            "meta" => ElementKind::MetaDescription,
            _ => ElementKind::Text,
        }
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn set_value(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// In-memory page: title, meta description and body elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<PageElement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<PageElement>,

    #[serde(default)]
    pub elements: Vec<PageElement>,

    /// Selectors of containers present on the page (e.g. `".nav-menu"`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mount_points: Vec<String>,
}

impl Page {
    /// # Errors
    /// Returns `PageError::Parse` for invalid JSON.
    pub fn from_json_str(text: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(text)?)
    }

    /// # Errors
    /// - File read error
    /// - JSON parse error
    pub fn load(path: &Path) -> Result<Self, PageError> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// # Errors
    /// Returns `PageError::Parse` if serialization fails.
    pub fn to_json_string(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The first body element marked with `key`.
    #[must_use]
    pub fn element(&self, key: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.translate.as_deref() == Some(key))
    }
}

impl Document for Page {
    type Element = PageElement;

    fn marked_elements(&mut self) -> impl Iterator<Item = &mut PageElement> {
        self.title
            .iter_mut()
            .chain(self.meta_description.iter_mut())
            .chain(self.elements.iter_mut())
            .filter(|element| element.translate.is_some())
    }

    fn contains(&self, selector: &str) -> bool {
        self.mount_points.iter().any(|m| m == selector)
    }
}
