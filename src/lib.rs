//! site-i18n
//!
//! Locale switching for static documentation sites: a persisted active
//! locale, a dictionary of nested translation trees loaded once, and
//! application of resolved strings to a page's marked elements.

pub mod applier;
pub mod cli;
pub mod config;
pub mod document;
pub mod input;
pub mod session;
pub mod store;
pub mod switcher;
pub mod types;

mod test_utils;

pub use applier::{
    ApplyReport,
    TranslationApplier,
};
pub use session::SiteTranslator;
pub use store::LocaleStore;
