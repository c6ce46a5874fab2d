pub mod manager;
pub mod persistence;

pub use manager::ReservoirManager;
pub use persistence::{FIELD_DELIMITER, TextExporter};
