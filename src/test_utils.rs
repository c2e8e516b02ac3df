//! Fixtures shared by the unit test modules.
#![cfg(test)]

use crate::document::{
    Page,
    PageElement,
};

/// Dictionary with a complete English tree and a French tree missing `nav.docs`.
pub(crate) const SAMPLE_DICTIONARY: &str = r#"{
  "en": {
    "meta": { "title": "RaghimAI Documentation", "description": "Platform guide" },
    "nav": { "home": "Home", "docs": "Docs" },
    "contact": { "send": "Send" }
  },
  "fr": {
    "meta": { "title": "Documentation RaghimAI", "description": "Guide de la plateforme" },
    "nav": { "home": "Accueil" },
    "contact": { "send": "Envoyer" }
  }
}"#;

/// A page rendered in English with title, meta description, links, a submit
/// input and one unmarked paragraph.
pub(crate) fn sample_page() -> Page {
    Page {
        title: Some(PageElement::text("title", "meta.title", "RaghimAI Documentation")),
        meta_description: Some(PageElement {
            tag: "meta".to_string(),
            translate: Some("meta.description".to_string()),
            value: Some("Platform guide".to_string()),
            ..PageElement::default()
        }),
        elements: vec![
            PageElement::text("a", "nav.home", "Home"),
            PageElement::text("a", "nav.docs", "Docs"),
            PageElement::submit("contact.send", "Send"),
            PageElement {
                tag: "p".to_string(),
                text: "Unmarked".to_string(),
                ..PageElement::default()
            },
        ],
        mount_points: vec![".nav-menu".to_string()],
    }
}
