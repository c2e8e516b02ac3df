//! Settings management.

use std::path::PathBuf;

use super::{
    ConfigError,
    Settings,
    loader,
};

/// Holds the validated settings and the site root they were read from.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Validated settings in effect.
    current_settings: Settings,

    /// Root the settings were loaded from; relative paths resolve against it.
    site_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: Settings::default(), site_root: None }
    }

    /// Load settings from the site root, falling back to defaults when the
    /// root has no settings file.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, site_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for site root: {:?}", site_root);

        let settings = if let Some(root) = &site_root {
            loader::load_from_site_root(root)?.map_or_else(Settings::default, |settings| {
                tracing::debug!("Loaded site settings: {:?}", settings);
                settings
            })
        } else {
            Settings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.site_root = site_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &Settings {
        &self.current_settings
    }

    #[must_use]
    pub const fn site_root(&self) -> Option<&PathBuf> {
        self.site_root.as_ref()
    }

    /// Resolve a settings path (dictionary, storage) against the site root.
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.site_root.as_ref().map_or_else(|| PathBuf::from(path), |root| root.join(path))
    }
}
