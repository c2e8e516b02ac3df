//! Dictionary resource sources.

use std::future::Future;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// The dictionary file could not be read.
    #[error("Failed to read dictionary resource {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource cannot be reached at all.
    #[error("Dictionary resource unavailable: {0}")]
    Unavailable(String),
}

/// Something the dictionary text can be fetched from.
///
/// Fetching is the only suspension point of the translation layer.
pub trait DictionarySource {
    /// Fetch the raw dictionary text.
    ///
    /// # Errors
    /// Returns `SourceError` when the resource cannot be read.
    fn fetch(&self) -> impl Future<Output = Result<String, SourceError>> + Send;

    /// Human readable location, used in logs.
    fn describe(&self) -> String;
}

/// Dictionary stored as a file relative to the site root.
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Dictionary file, already resolved against the site root.
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DictionarySource for FileSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Read { path: self.path.clone(), source })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dictionary text already in memory, or a resource known to be unreachable.
#[derive(Debug, Clone)]
pub struct StaticSource {
    /// `None` makes every fetch fail.
    text: Option<String>,
}

impl StaticSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    /// A source whose every fetch fails.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { text: None }
    }
}

impl DictionarySource for StaticSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        self.text.clone().ok_or_else(|| SourceError::Unavailable(self.describe()))
    }

    fn describe(&self) -> String {
        "<static>".to_string()
    }
}
