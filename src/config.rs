//! Settings for the translation layer and where they come from.

/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    LocaleOption,
    Settings,
    ValidationError,
};
