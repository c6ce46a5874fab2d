use std::path::PathBuf;
use thiserror::Error;

/// Conditions a catalog operation can run into.
///
/// The `Display` text of `InvalidIndex` and `FileOpen` is exactly what the
/// manager writes to its error sink, so keep those two messages stable.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid index")]
    InvalidIndex { index: usize, len: usize },

    #[error("Unable to open file")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
