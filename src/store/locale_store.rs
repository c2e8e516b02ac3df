//! The active locale and its persistence.

use super::LocaleStorage;
use crate::config::Settings;
use crate::types::Locale;

/// Owns the active locale for the lifetime of a page session.
///
/// Constructed once at startup and passed to whoever needs the active
/// locale; nothing reads it from global state.
#[derive(Debug)]
pub struct LocaleStore<S> {
    /// Backend the active locale is persisted to.
    storage: S,
    /// Key the raw locale string is stored under.
    storage_key: String,
    /// Current locale; changes only through `set_active`.
    active: Locale,
}

impl<S: LocaleStorage> LocaleStore<S> {
    /// Open the store, restoring the persisted locale.
    ///
    /// Falls back to the default locale when the value is absent, when the
    /// storage cannot be read, or when the value is not a configured locale.
    pub fn open(storage: S, settings: &Settings) -> Self {
        let persisted = match storage.get(&settings.storage_key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read persisted locale, using default: {e}");
                None
            }
        };

        let active = match persisted {
            Some(code) if settings.is_supported(&code) => Locale::from(code),
            Some(code) => {
                tracing::debug!(
                    "Ignoring persisted locale '{code}', falling back to '{}'",
                    settings.default_locale
                );
                settings.default_locale.clone()
            }
            None => settings.default_locale.clone(),
        };
        tracing::debug!(locale = %active, "Active locale restored");

        Self { storage, storage_key: settings.storage_key.clone(), active }
    }

    #[must_use]
    pub const fn get_active(&self) -> &Locale {
        &self.active
    }

    /// Make `locale` the active locale and persist it.
    ///
    /// Returns `false` without touching storage when `locale` is already
    /// active. A failed write is logged; the in-memory locale still changes.
    pub fn set_active(&mut self, locale: Locale) -> bool {
        if locale == self.active {
            return false;
        }

        if let Err(e) = self.storage.set(&self.storage_key, locale.as_str()) {
            tracing::warn!(locale = %locale, "Failed to persist active locale: {e}");
        }
        tracing::debug!(from = %self.active, to = %locale, "Active locale changed");
        self.active = locale;
        true
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage back, e.g. to reopen the store after a reload.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
