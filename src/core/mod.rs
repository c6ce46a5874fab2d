pub mod error;
pub mod reservoir;
pub mod types;

pub use error::{CatalogError, Result};
pub use reservoir::{Listing, Reservoir};
pub use types::{Dimensions, FormattedNumber, NumberFormat};
