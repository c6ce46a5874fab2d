// ============================================================================
// Reservoir Catalog Library
// ============================================================================

pub mod config;
pub mod core;
pub mod storage;

// Re-export main types for convenience
pub use crate::config::{CatalogConfig, DEFAULT_OUTPUT_PATH};
pub use crate::core::{CatalogError, Dimensions, NumberFormat, Reservoir, Result};
pub use crate::storage::{ReservoirManager, TextExporter};
