use crate::core::{CatalogError, NumberFormat, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name the demonstration export writes to
pub const DEFAULT_OUTPUT_PATH: &str = "reservoirs.txt";

/// Catalog configuration
///
/// Every field has a default, so a config file only needs to name the
/// settings it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Target of the text export
    pub output_path: PathBuf,

    /// Rendering of real numbers in listings and in the export
    pub number_format: NumberFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            number_format: NumberFormat::Shortest,
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the export target
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the number rendering rule
    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Shorthand for `number_format(NumberFormat::Fixed(precision))`
    pub fn precision(self, precision: usize) -> Self {
        self.number_format(NumberFormat::Fixed(precision))
    }

    /// Load from a JSON file
    ///
    /// ```json
    /// { "output_path": "out/reservoirs.txt", "number_format": { "fixed": 2 } }
    /// ```
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
