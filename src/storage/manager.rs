use crate::config::CatalogConfig;
use crate::core::{CatalogError, Reservoir, Result};
use crate::storage::persistence::TextExporter;
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Ordered collection of reservoirs.
///
/// Records are stored as independent copies in insertion order, which is
/// also the listing and export order. Listings go to the display sink;
/// the two recoverable conditions (`Invalid index`, `Unable to open file`)
/// are written to the error sink and never abort the caller.
pub struct ReservoirManager<D: Write = Stdout, E: Write = Stderr> {
    reservoirs: Vec<Reservoir>,
    config: CatalogConfig,
    display: D,
    errors: E,
}

impl ReservoirManager {
    /// Empty manager printing to stdout/stderr
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self::with_sinks(io::stdout(), io::stderr()).config(config)
    }
}

impl Default for ReservoirManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Write, E: Write> ReservoirManager<D, E> {
    /// Empty manager writing listings to `display` and error reports to `errors`
    pub fn with_sinks(display: D, errors: E) -> Self {
        Self {
            reservoirs: Vec::new(),
            config: CatalogConfig::default(),
            display,
            errors,
        }
    }

    /// Replace the configuration
    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog_config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Append a copy of `reservoir`
    pub fn add_reservoir(&mut self, reservoir: &Reservoir) {
        self.reservoirs.push(reservoir.clone());
        debug!(name = reservoir.name(), len = self.reservoirs.len(), "reservoir added");
    }

    /// Remove and return the record at `index`, shifting later records down.
    ///
    /// An out-of-range index writes `Invalid index` to the error sink and
    /// leaves the collection as it was.
    pub fn remove_reservoir(&mut self, index: usize) -> Option<Reservoir> {
        match self.try_remove_reservoir(index) {
            Ok(removed) => Some(removed),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    /// Like [`remove_reservoir`](Self::remove_reservoir) but hands the error back
    /// instead of reporting it.
    pub fn try_remove_reservoir(&mut self, index: usize) -> Result<Reservoir> {
        let len = self.reservoirs.len();
        if index >= len {
            return Err(CatalogError::InvalidIndex { index, len });
        }
        let removed = self.reservoirs.remove(index);
        debug!(index, name = removed.name(), "reservoir removed");
        Ok(removed)
    }

    /// List every record as a `Reservoir <N>:` header line followed by its
    /// listing line. N starts at 1.
    pub fn display_all(&mut self) -> Result<()> {
        let format = self.config.number_format;
        for (i, reservoir) in self.reservoirs.iter().enumerate() {
            writeln!(self.display, "Reservoir {}:", i + 1)?;
            reservoir.display_to(&mut self.display, format)?;
        }
        self.display.flush()?;
        Ok(())
    }

    /// Export to `path` as `name,type,volume,surfaceArea` lines.
    ///
    /// If the file cannot be opened, `Unable to open file` goes to the error
    /// sink and nothing is written. Returns the number of lines written.
    pub fn save_to_text_file<P: AsRef<Path>>(&mut self, path: P) -> Option<usize> {
        match self.try_save_to_text_file(path) {
            Ok(written) => Some(written),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    /// Export to the configured `output_path`
    pub fn save(&mut self) -> Option<usize> {
        let path = self.config.output_path.clone();
        self.save_to_text_file(path)
    }

    pub fn try_save_to_text_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let exporter = TextExporter::new(path, self.config.number_format);
        let written = exporter.export(&self.reservoirs)?;
        debug!(path = %exporter.path().display(), written, "reservoirs saved");
        Ok(written)
    }

    /// Write `err` to the error sink.
    pub fn report(&mut self, err: &CatalogError) {
        warn!(error = ?err, "{}", err);
        if let Err(e) = writeln!(self.errors, "{}", err) {
            warn!(error = %e, "failed to write to error sink");
        }
    }

    pub fn len(&self) -> usize {
        self.reservoirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservoirs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reservoir> {
        self.reservoirs.iter()
    }

    pub fn display_sink(&self) -> &D {
        &self.display
    }

    pub fn error_sink(&self) -> &E {
        &self.errors
    }

    pub fn into_sinks(self) -> (D, E) {
        (self.display, self.errors)
    }
}

impl<'a, D: Write, E: Write> IntoIterator for &'a ReservoirManager<D, E> {
    type Item = &'a Reservoir;
    type IntoIter = std::slice::Iter<'a, Reservoir>;

    fn into_iter(self) -> Self::IntoIter {
        self.reservoirs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NumberFormat;

    type BufferedManager = ReservoirManager<Vec<u8>, Vec<u8>>;

    fn manager() -> BufferedManager {
        ReservoirManager::with_sinks(Vec::new(), Vec::new())
    }

    fn names(m: &BufferedManager) -> Vec<&str> {
        m.iter().map(|r| r.name()).collect()
    }

    fn filled(names: &[&str]) -> BufferedManager {
        let mut m = manager();
        for (i, name) in names.iter().enumerate() {
            m.add_reservoir(&Reservoir::new(*name, i as f64 + 1.0, 2.0, 3.0, "Lake"));
        }
        m
    }

    #[test]
    fn test_starts_empty() {
        let m = manager();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn test_add_stores_independent_copy() {
        let mut m = manager();
        let mut original = Reservoir::new("Lake Baikal", 80.0, 636.0, 1642.0, "Lake");
        m.add_reservoir(&original);
        original.set_name("Renamed");
        original.set_dimensions(1.0, 1.0, 1.0);

        let stored = m.iter().next().unwrap();
        assert_eq!(stored.name(), "Lake Baikal");
        assert_eq!(stored.calculate_surface_area(), 50_880.0);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut m = manager();
        let r = Reservoir::default();
        m.add_reservoir(&r);
        m.add_reservoir(&r);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut m = filled(&["a", "b", "c", "d"]);
        let removed = m.remove_reservoir(1).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(names(&m), vec!["a", "c", "d"]);
        assert!(m.error_sink().is_empty());
    }

    #[test]
    fn test_remove_out_of_range_reports() {
        let mut m = filled(&["a", "b"]);
        assert!(m.remove_reservoir(2).is_none());
        assert!(m.remove_reservoir(usize::MAX).is_none());
        assert_eq!(names(&m), vec!["a", "b"]);
        assert_eq!(m.error_sink().as_slice(), b"Invalid index\nInvalid index\n");
    }

    #[test]
    fn test_try_remove_does_not_report() {
        let mut m = manager();
        let err = m.try_remove_reservoir(0).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidIndex { index: 0, len: 0 }));
        assert!(m.error_sink().is_empty());
    }

    #[test]
    fn test_display_all_labels_in_order() {
        let mut m = filled(&["first", "second", "third"]);
        m.display_all().unwrap();
        let (display, errors) = m.into_sinks();
        let text = String::from_utf8(display).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Reservoir 1:");
        assert!(lines[1].starts_with("Name: first, Type: Lake, Width: 1m"));
        assert_eq!(lines[2], "Reservoir 2:");
        assert!(lines[3].starts_with("Name: second,"));
        assert_eq!(lines[4], "Reservoir 3:");
        assert!(lines[5].starts_with("Name: third,"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_display_all_empty_writes_nothing() {
        let mut m = manager();
        m.display_all().unwrap();
        assert!(m.display_sink().is_empty());
    }

    #[test]
    fn test_display_all_uses_configured_format() {
        let mut m = manager().config(CatalogConfig::new().number_format(NumberFormat::Fixed(1)));
        m.add_reservoir(&Reservoir::new("Tank", 1.0, 2.0, 3.0, "Cistern"));
        m.display_all().unwrap();
        assert_eq!(
            String::from_utf8(m.display_sink().clone()).unwrap(),
            "Reservoir 1:\nName: Tank, Type: Cistern, Width: 1.0m, Length: 2.0m, \
             Max Depth: 3.0m, Volume: 6.0m³, Surface Area: 2.0m²\n"
        );
    }

    #[test]
    fn test_iterates_by_reference() {
        let m = filled(&["x", "y"]);
        let mut seen = Vec::new();
        for r in &m {
            seen.push(r.name().to_string());
        }
        assert_eq!(seen, vec!["x", "y"]);
    }
}
