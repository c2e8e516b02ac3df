//! Locale switcher menu state.
//!
//! Purely presentational state: whether the dropdown is open and which
//! option the button shows. Selecting a locale is reported back to the
//! caller, which owns the `LocaleStore`.

use crate::config::{
    LocaleOption,
    Settings,
};
use crate::types::Locale;

/// User interaction with the switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitcherEvent {
    /// The dropdown button was clicked.
    ButtonClicked,
    /// A menu entry was clicked.
    OptionClicked(Locale),
    /// A click landed anywhere outside the switcher.
    ClickedOutside,
}

/// Dropdown listing the configured locales.
#[derive(Debug, Clone)]
pub struct LocaleSwitcher {
    /// Menu entries, in settings order.
    options: Vec<LocaleOption>,
    /// Shown on the button when the active locale has no option.
    default_locale: Locale,
    /// Whether the dropdown is showing.
    menu_open: bool,
}

impl LocaleSwitcher {
    /// Create the switcher if the page has somewhere to mount it.
    ///
    /// Without a mount point the switcher is skipped; translation itself
    /// keeps working.
    #[must_use]
    pub fn mount(has_mount_point: bool, settings: &Settings) -> Option<Self> {
        if !has_mount_point {
            tracing::warn!(
                mount_point = %settings.mount_point,
                "Mount point not found, skipping locale switcher"
            );
            return None;
        }

        Some(Self {
            options: settings.locales.clone(),
            default_locale: settings.default_locale.clone(),
            menu_open: false,
        })
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn options(&self) -> &[LocaleOption] {
        &self.options
    }

    /// The option the button displays for `active`.
    ///
    /// A locale without its own option shows the default locale's option.
    #[must_use]
    pub fn button(&self, active: &Locale) -> Option<&LocaleOption> {
        self.options
            .iter()
            .find(|option| option.code == *active)
            .or_else(|| self.options.iter().find(|option| option.code == self.default_locale))
    }

    /// Update menu state for `event`.
    ///
    /// Returns the locale to switch to when an option other than `active` was
    /// picked.
    pub fn handle(&mut self, event: SwitcherEvent, active: &Locale) -> Option<Locale> {
        match event {
            SwitcherEvent::ButtonClicked => {
                self.menu_open = !self.menu_open;
                None
            }
            SwitcherEvent::OptionClicked(locale) => {
                self.menu_open = false;
                (locale != *active).then_some(locale)
            }
            SwitcherEvent::ClickedOutside => {
                self.menu_open = false;
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// Switcher over the default settings, mounted.
    fn switcher() -> Option<LocaleSwitcher> {
        LocaleSwitcher::mount(true, &Settings::default())
    }

    #[googletest::test]
    fn mount_without_mount_point_is_skipped() {
        expect_that!(LocaleSwitcher::mount(false, &Settings::default()).is_none(), eq(true));
    }

    #[googletest::test]
    fn button_toggles_menu() {
        let Some(mut switcher) = switcher() else { panic!("switcher should mount") };
        let en = Locale::from("en");

        expect_that!(switcher.is_menu_open(), eq(false));
        expect_that!(switcher.handle(SwitcherEvent::ButtonClicked, &en).is_none(), eq(true));
        expect_that!(switcher.is_menu_open(), eq(true));
        switcher.handle(SwitcherEvent::ButtonClicked, &en);
        expect_that!(switcher.is_menu_open(), eq(false));
    }

    #[googletest::test]
    fn outside_click_closes_menu() {
        let Some(mut switcher) = switcher() else { panic!("switcher should mount") };
        let en = Locale::from("en");

        switcher.handle(SwitcherEvent::ButtonClicked, &en);
        switcher.handle(SwitcherEvent::ClickedOutside, &en);

        expect_that!(switcher.is_menu_open(), eq(false));
    }

    #[rstest]
    #[case::other_locale("en", "fr", Some("fr"))]
    #[case::same_locale("fr", "fr", None)]
    #[case::unconfigured_locale("en", "de", Some("de"))]
    fn option_click_selects_and_closes(
        #[case] active: &str,
        #[case] clicked: &str,
        #[case] expected: Option<&str>,
    ) {
        let Some(mut switcher) = switcher() else { panic!("switcher should mount") };
        let active = Locale::from(active);
        switcher.handle(SwitcherEvent::ButtonClicked, &active);

        let event = SwitcherEvent::OptionClicked(Locale::from(clicked));
        let selected = switcher.handle(event, &active);

        assert_eq!(selected.as_ref().map(Locale::as_str), expected);
        assert!(!switcher.is_menu_open());
    }

    #[rstest]
    #[case::english("en", "English", "🇺🇸")]
    #[case::french("fr", "Français", "🇫🇷")]
    #[case::unknown_shows_default("de", "English", "🇺🇸")]
    fn button_reflects_active_locale(
        #[case] active: &str,
        #[case] label: &str,
        #[case] flag: &str,
    ) {
        let Some(switcher) = switcher() else { panic!("switcher should mount") };

        let option = switcher.button(&Locale::from(active));

        assert_eq!(option.map(|o| (o.label.as_str(), o.flag.as_str())), Some((label, flag)));
    }

    #[googletest::test]
    fn options_follow_settings_order() {
        let Some(switcher) = switcher() else { panic!("switcher should mount") };

        let codes: Vec<String> = switcher.options().iter().map(|o| o.code.to_string()).collect();

        expect_that!(codes, elements_are![eq("en"), eq("fr")]);
    }
}
