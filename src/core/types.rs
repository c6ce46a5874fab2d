use serde::{Deserialize, Serialize};
use std::fmt;

/// Width, length and maximum depth of a reservoir, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
    pub max_depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, length: f64, max_depth: f64) -> Self {
        Self { width, length, max_depth }
    }
}

impl From<(f64, f64, f64)> for Dimensions {
    fn from((width, length, max_depth): (f64, f64, f64)) -> Self {
        Self { width, length, max_depth }
    }
}

impl From<Dimensions> for (f64, f64, f64) {
    fn from(dims: Dimensions) -> Self {
        (dims.width, dims.length, dims.max_depth)
    }
}

/// How real numbers are rendered in listings and in the text export.
///
/// `Shortest` is the shortest string that parses back to the same `f64`
/// (`83544960`, `0.5`). `Fixed(p)` always prints `p` decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    #[default]
    Shortest,
    Fixed(usize),
}

impl NumberFormat {
    pub fn apply(self, value: f64) -> FormattedNumber {
        FormattedNumber { value, format: self }
    }
}

/// An `f64` paired with the rule used to print it.
#[derive(Debug, Clone, Copy)]
pub struct FormattedNumber {
    value: f64,
    format: NumberFormat,
}

impl fmt::Display for FormattedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            NumberFormat::Shortest => write!(f, "{}", self.value),
            NumberFormat::Fixed(precision) => write!(f, "{:.*}", precision, self.value),
        }
    }
}
