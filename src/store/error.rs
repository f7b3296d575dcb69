use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing translation files
#[derive(Error, Debug)]
pub enum StoreError {
    /// The file could not be read
    #[error("Failed to read translation file '{}': {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    /// The file is not a `locale -> key -> text` JSON document
    #[error("Failed to parse translation file '{}': {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    /// The store could not be rendered as JSON
    #[error("Failed to serialize translations: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The file could not be replaced
    #[error("Failed to write translation file '{}': {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },
}
