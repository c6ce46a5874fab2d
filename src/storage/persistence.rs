//! Comma-separated text export of a reservoir collection

use crate::core::{CatalogError, NumberFormat, Reservoir, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Field separator of the export. Names and types are written verbatim, so a
/// comma inside either shifts the columns of that line.
pub const FIELD_DELIMITER: char = ',';

/// Writes `name,type,volume,surfaceArea` lines, one per reservoir.
pub struct TextExporter {
    path: PathBuf,
    number_format: NumberFormat,
}

impl TextExporter {
    pub fn new<P: AsRef<Path>>(path: P, number_format: NumberFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            number_format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate (or create) the target and write every record.
    ///
    /// Opening failure returns `FileOpen` before anything is touched. The
    /// file is flushed and closed before this returns.
    pub fn export<'a, I>(&self, reservoirs: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Reservoir>,
    {
        let file = File::create(&self.path).map_err(|source| CatalogError::FileOpen {
            path: self.path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let mut written = 0;
        for reservoir in reservoirs {
            write_line(&mut writer, reservoir, self.number_format)?;
            written += 1;
        }
        writer.flush()?;
        Ok(written)
    }
}

/// One export line, newline included.
pub fn write_line<W: Write>(out: &mut W, reservoir: &Reservoir, format: NumberFormat) -> Result<()> {
    writeln!(
        out,
        "{}{d}{}{d}{}{d}{}",
        reservoir.name(),
        reservoir.reservoir_type(),
        format.apply(reservoir.calculate_volume()),
        format.apply(reservoir.calculate_surface_area()),
        d = FIELD_DELIMITER,
    )?;
    Ok(())
}
