//! Startup and locale-switch sequences.

use crate::applier::{
    ApplyReport,
    TranslationApplier,
};
use crate::config::Settings;
use crate::document::Document;
use crate::input::source::DictionarySource;
use crate::store::{
    LocaleStorage,
    LocaleStore,
};
use crate::switcher::{
    LocaleSwitcher,
    SwitcherEvent,
};
use crate::types::Locale;

/// One page session: the locale store, the applier and the switcher.
#[derive(Debug)]
pub struct SiteTranslator<S> {
    /// Settings the session was opened with.
    settings: Settings,
    store: LocaleStore<S>,
    applier: TranslationApplier,
    /// `None` until `start`, and afterwards when the page has no mount point.
    switcher: Option<LocaleSwitcher>,
}

impl<S: LocaleStorage> SiteTranslator<S> {
    /// Open the locale store over `storage`; nothing is loaded yet.
    pub fn new(storage: S, settings: Settings) -> Self {
        let store = LocaleStore::open(storage, &settings);
        let locales = settings.locale_codes().cloned().collect();
        let applier = TranslationApplier::new(locales, &settings.key_separator);
        Self { settings, store, applier, switcher: None }
    }

    /// Load the dictionary, mount the switcher and translate `document` into
    /// the active locale.
    pub async fn start<Src, D>(&mut self, source: &Src, document: &mut D) -> ApplyReport
    where
        Src: DictionarySource,
        D: Document,
    {
        self.applier.load(source).await;
        self.switcher =
            LocaleSwitcher::mount(document.contains(&self.settings.mount_point), &self.settings);
        self.applier.apply(document, self.store.get_active())
    }

    /// Make `locale` active and re-apply the cached dictionary.
    ///
    /// Returns `None` without persisting or re-applying when `locale` is
    /// already active.
    pub fn switch_to<D: Document>(
        &mut self,
        locale: Locale,
        document: &mut D,
    ) -> Option<ApplyReport> {
        if !self.store.set_active(locale) {
            tracing::debug!(locale = %self.store.get_active(), "Locale already active");
            return None;
        }
        Some(self.applier.apply(document, self.store.get_active()))
    }

    /// Route a switcher interaction; a selection switches the locale.
    ///
    /// Events are ignored when the switcher was never mounted.
    pub fn handle<D: Document>(
        &mut self,
        event: SwitcherEvent,
        document: &mut D,
    ) -> Option<ApplyReport> {
        let switcher = self.switcher.as_mut()?;
        let selected = switcher.handle(event, self.store.get_active())?;
        self.switch_to(selected, document)
    }

    #[must_use]
    pub const fn active_locale(&self) -> &Locale {
        self.store.get_active()
    }

    #[must_use]
    pub const fn applier(&self) -> &TranslationApplier {
        &self.applier
    }

    #[must_use]
    pub const fn switcher(&self) -> Option<&LocaleSwitcher> {
        self.switcher.as_ref()
    }

    /// End the session, handing back the storage.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::Page;
    use crate::input::source::StaticSource;
    use crate::store::MemoryStorage;
    use crate::test_utils::{
        SAMPLE_DICTIONARY,
        sample_page,
    };

    /// Session over empty in-memory storage and default settings.
    fn translator() -> SiteTranslator<MemoryStorage> {
        SiteTranslator::new(MemoryStorage::new(), Settings::default())
    }

    #[tokio::test]
    async fn start_with_default_locale_keeps_english() {
        let mut translator = translator();
        let mut page = sample_page();

        let report = translator.start(&StaticSource::new(SAMPLE_DICTIONARY), &mut page).await;

        assert_eq!(report.applied, 5);
        assert_eq!(page, sample_page());
        assert!(translator.switcher().is_some());
    }

    #[tokio::test]
    async fn start_restores_persisted_locale() {
        let storage = MemoryStorage::with_entry("raghim-language", "fr");
        let mut translator = SiteTranslator::new(storage, Settings::default());
        let mut page = sample_page();

        translator.start(&StaticSource::new(SAMPLE_DICTIONARY), &mut page).await;

        assert_eq!(translator.active_locale().as_str(), "fr");
        assert_eq!(page.element("nav.home").unwrap().text, "Accueil");
    }

    #[tokio::test]
    async fn start_without_mount_point_still_translates() {
        let storage = MemoryStorage::with_entry("raghim-language", "fr");
        let mut translator = SiteTranslator::new(storage, Settings::default());
        let mut page = Page { mount_points: Vec::new(), ..sample_page() };

        translator.start(&StaticSource::new(SAMPLE_DICTIONARY), &mut page).await;
        let english = SwitcherEvent::OptionClicked(Locale::from("en"));
        let report = translator.handle(english, &mut page);

        assert!(translator.switcher().is_none());
        assert!(report.is_none());
        assert_eq!(page.element("nav.home").unwrap().text, "Accueil");
    }

    #[tokio::test]
    async fn switch_to_same_locale_is_noop() {
        let mut translator = translator();
        let mut page = sample_page();
        translator.start(&StaticSource::new(SAMPLE_DICTIONARY), &mut page).await;

        assert!(translator.switch_to(Locale::from("fr"), &mut page).is_some());
        assert!(translator.switch_to(Locale::from("fr"), &mut page).is_none());
    }

    #[tokio::test]
    async fn switcher_selection_switches_and_persists() {
        let mut translator = translator();
        let mut page = sample_page();
        translator.start(&StaticSource::new(SAMPLE_DICTIONARY), &mut page).await;

        translator.handle(SwitcherEvent::ButtonClicked, &mut page);
        let french = SwitcherEvent::OptionClicked(Locale::from("fr"));
        let report = translator.handle(french, &mut page);

        assert_eq!(report.map(|r| r.applied), Some(4));
        assert_eq!(page.element("contact.send").unwrap().value.as_deref(), Some("Envoyer"));
        assert_eq!(
            translator.switcher().unwrap().button(translator.active_locale()).unwrap().label,
            "Français"
        );

        let storage = translator.into_storage();
        assert_eq!(storage.get("raghim-language").unwrap().as_deref(), Some("fr"));
    }
}
