//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    Settings,
};

/// Name of the settings file looked up in the site root.
pub(super) const CONFIG_FILE_NAME: &str = ".site-i18n.json";

/// Load settings from the site root.
///
/// # Returns
/// - `Ok(Some(settings))`: the settings file exists and parsed
/// - `Ok(None)`: no settings file
/// - `Err(ConfigError)`: read or parse failure
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_site_root(site_root: &Path) -> Result<Option<Settings>, ConfigError> {
    let config_path = site_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: Settings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
