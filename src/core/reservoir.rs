use crate::core::types::{Dimensions, NumberFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// A single water body: a name, a free-form type label and its box dimensions.
///
/// No bounds are enforced on the dimensions. Zero and negative values are
/// stored and computed with as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservoir {
    name: String,
    #[serde(rename = "type")]
    reservoir_type: String,
    #[serde(flatten)]
    dimensions: Dimensions,
}

impl Default for Reservoir {
    fn default() -> Self {
        Self {
            name: "Undefined".to_string(),
            reservoir_type: "Unknown".to_string(),
            dimensions: Dimensions::default(),
        }
    }
}

impl Reservoir {
    pub fn new(
        name: impl Into<String>,
        width: f64,
        length: f64,
        max_depth: f64,
        reservoir_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            reservoir_type: reservoir_type.into(),
            dimensions: Dimensions::new(width, length, max_depth),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_type(&mut self, reservoir_type: impl Into<String>) {
        self.reservoir_type = reservoir_type.into();
    }

    pub fn reservoir_type(&self) -> &str {
        &self.reservoir_type
    }

    /// Replace all three dimensions at once.
    pub fn set_dimensions(&mut self, width: f64, length: f64, max_depth: f64) {
        self.dimensions = Dimensions::new(width, length, max_depth);
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn calculate_volume(&self) -> f64 {
        let Dimensions { width, length, max_depth } = self.dimensions;
        width * length * max_depth
    }

    pub fn calculate_surface_area(&self) -> f64 {
        self.dimensions.width * self.dimensions.length
    }

    /// Exact, case-sensitive comparison of the type labels.
    pub fn is_same_type(&self, other: &Reservoir) -> bool {
        self.reservoir_type == other.reservoir_type
    }

    /// Strictly greater surface area; equal areas give `false`.
    pub fn has_larger_surface_area_than(&self, other: &Reservoir) -> bool {
        self.calculate_surface_area() > other.calculate_surface_area()
    }

    /// Print the listing line to stdout.
    pub fn display(&self) {
        println!("{}", self);
    }

    /// Write the listing line, newline included, to `out`.
    pub fn display_to<W: Write>(&self, out: &mut W, format: NumberFormat) -> io::Result<()> {
        writeln!(out, "{}", self.listing(format))
    }

    pub fn listing(&self, format: NumberFormat) -> Listing<'_> {
        Listing { reservoir: self, format }
    }
}

impl fmt::Display for Reservoir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.listing(NumberFormat::default()), f)
    }
}

/// The one-line human readable rendering of a [`Reservoir`].
pub struct Listing<'a> {
    reservoir: &'a Reservoir,
    format: NumberFormat,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.reservoir;
        let num = |v: f64| self.format.apply(v);
        write!(
            f,
            "Name: {}, Type: {}, Width: {}m, Length: {}m, Max Depth: {}m, Volume: {}m³, Surface Area: {}m²",
            r.name,
            r.reservoir_type,
            num(r.dimensions.width),
            num(r.dimensions.length),
            num(r.dimensions.max_depth),
            num(r.calculate_volume()),
            num(r.calculate_surface_area()),
        )
    }
}
