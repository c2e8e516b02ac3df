//! Command line front end: drives a page session against files on disk.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use clap::{
    Parser,
    Subcommand,
};

use crate::applier::TranslationApplier;
use crate::config::{
    ConfigManager,
    Settings,
};
use crate::document::Page;
use crate::input::source::FileSource;
use crate::session::SiteTranslator;
use crate::store::{
    FileStorage,
    LocaleStore,
};
use crate::types::Locale;

#[derive(Debug, Parser)]
#[command(name = "site-i18n")]
#[command(version)]
#[command(about = "Locale switching and translation for static documentation pages")]
pub struct Cli {
    /// Site root holding `.site-i18n.json`, the dictionary and the storage file
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate a page (JSON page model) into the active locale and print it
    Apply {
        /// Page model file
        #[arg(value_name = "PAGE")]
        page: PathBuf,

        /// Switch to this locale first, as if picked in the switcher
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Persist a new active locale
    Switch {
        /// Locale code, e.g. `fr`
        #[arg(value_name = "LOCALE")]
        locale: String,
    },

    /// Print the active locale
    Current,

    /// List the translation keys of a locale
    Keys {
        /// Defaults to the active locale
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// List keys of the default locale that other locales lack
    Missing,
}

/// Applier over the configured locales and separator.
fn applier_for(settings: &Settings) -> TranslationApplier {
    TranslationApplier::new(settings.locale_codes().cloned().collect(), &settings.key_separator)
}

/// Load and validate settings from `root`.
fn load_config(root: PathBuf) -> Result<ConfigManager> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(root)).context("Failed to load settings")?;
    Ok(config_manager)
}

/// Run one command, writing its output to `out`.
///
/// # Errors
/// - Invalid settings
/// - Unreadable page
/// - Failed write to `out`
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config_manager = load_config(cli.root)?;
    let settings = config_manager.get_settings().clone();
    let storage = FileStorage::new(config_manager.resolve(&settings.storage_path));
    let source = FileSource::new(config_manager.resolve(&settings.dictionary_path));

    match cli.command {
        Command::Apply { page, locale } => {
            let mut page = Page::load(&page)
                .with_context(|| format!("Failed to load page {}", page.display()))?;
            let mut translator = SiteTranslator::new(storage, settings);

            let mut report = translator.start(&source, &mut page).await;
            if let Some(locale) = locale
                && let Some(switched) = translator.switch_to(Locale::from(locale), &mut page)
            {
                report = switched;
            }

            for key in &report.missing {
                tracing::info!(locale = %translator.active_locale(), "No translation for '{key}'");
            }
            writeln!(out, "{}", page.to_json_string()?)?;
        }
        Command::Switch { locale } => {
            let mut store = LocaleStore::open(storage, &settings);
            if !settings.is_supported(&locale) {
                tracing::warn!(
                    "'{locale}' is not a configured locale; it will not be restored on reload"
                );
            }
            if store.set_active(Locale::from(locale)) {
                writeln!(out, "Switched to {}", store.get_active())?;
            } else {
                writeln!(out, "Already using {}", store.get_active())?;
            }
        }
        Command::Current => {
            let store = LocaleStore::open(storage, &settings);
            writeln!(out, "{}", store.get_active())?;
        }
        Command::Keys { locale } => {
            let locale = match locale {
                Some(locale) => Locale::from(locale),
                None => LocaleStore::open(storage, &settings).get_active().clone(),
            };
            let mut applier = applier_for(&settings);
            let dictionary = applier.load(&source).await;

            for (key, text) in dictionary.flatten(locale.as_str(), &settings.key_separator) {
                writeln!(out, "{key}\t{text}")?;
            }
        }
        Command::Missing => {
            let mut applier = applier_for(&settings);
            let dictionary = applier.load(&source).await;
            let reference = &settings.default_locale;

            for locale in settings.locale_codes().filter(|locale| *locale != reference) {
                let separator = &settings.key_separator;
                for key in dictionary.missing_keys(reference.as_str(), locale.as_str(), separator) {
                    writeln!(out, "{locale}\t{key}")?;
                }
            }
        }
    }

    Ok(())
}
