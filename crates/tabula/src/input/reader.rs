//! Delimited-text reader with delimiter detection.

use std::fs;
use std::path::Path;

use log::debug;

use super::source::SourceMetadata;
use crate::error::{Result, TabulaError};
use crate::table::Table;

/// Delimiters tried during auto-detection, comma first.
const DELIMITERS: &[u8] = &[b',', b'\t', b';', b'|'];

/// Lines sampled for delimiter detection.
const DETECT_LINES: usize = 10;

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the first record labels the columns.
    pub has_header: bool,
    /// Whether the first field of each record labels the row.
    pub has_index: bool,
    /// Maximum raw records to read, header included (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            has_index: false,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Reads delimited files into grids and tables.
#[derive(Debug, Clone)]
pub struct Reader {
    config: ReaderConfig,
}

impl Reader {
    /// Create a reader with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
        }
    }

    /// Create a reader with custom configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read a file into a table using the configured header/index flags,
    /// along with where it came from and how it was parsed.
    pub fn read_table(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();
        let raw = self.load(path)?;
        let records = raw.grid.len();
        let table = Table::from_grid(raw.grid, self.config.has_header, self.config.has_index)?;
        let source =
            SourceMetadata::new(path, &raw.bytes, raw.delimiter, &self.config, records, &table);
        Ok((table, source))
    }

    /// Read a file into a rectangular grid of text cells.
    ///
    /// No header interpretation happens here; every record is a grid row.
    /// Short records are padded with empty strings to the widest record.
    pub fn read_grid(&self, path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
        Ok(self.load(path.as_ref())?.grid)
    }

    fn load(&self, path: &Path) -> Result<RawGrid> {
        let bytes = fs::read(path).map_err(|e| TabulaError::SourceRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&bytes)?,
        };

        let grid = self.parse_bytes(&bytes, delimiter)?;
        if grid.is_empty() {
            return Err(TabulaError::EmptyData("No records found".to_string()));
        }

        debug!(
            "read {} with delimiter {:?}: {} records x {} fields",
            path.display(),
            char::from(delimiter),
            grid.len(),
            grid[0].len()
        );

        Ok(RawGrid {
            bytes,
            delimiter,
            grid,
        })
    }

    /// Parse raw bytes into a padded grid.
    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Vec<Vec<String>>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut grid = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            if self.config.max_rows.is_some_and(|max| idx >= max) {
                break;
            }
            let record = result?;
            grid.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut grid {
            row.resize(width, String::new());
        }

        Ok(grid)
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

/// File contents with the grid parsed from them.
struct RawGrid {
    bytes: Vec<u8>,
    delimiter: u8,
    grid: Vec<Vec<String>>,
}

/// Pick the delimiter that splits every sampled line into the same number
/// of fields (at least two), preferring the widest split. Ragged samples
/// fall back to the widest split of the first line, then to comma.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let sample: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(DETECT_LINES)
        .collect();

    let Some(first) = sample.first() else {
        return Err(TabulaError::EmptyData("No lines to analyze".to_string()));
    };

    let uniform = DELIMITERS
        .iter()
        .rev()
        .filter_map(|&d| {
            let width = fields_in_line(first, d);
            let even = sample.iter().all(|line| fields_in_line(line, d) == width);
            (even && width > 1).then_some((d, width))
        })
        .max_by_key(|&(_, width)| width);
    if let Some((delimiter, _)) = uniform {
        return Ok(delimiter);
    }

    let widest = DELIMITERS
        .iter()
        .rev()
        .map(|&d| (d, fields_in_line(first, d)))
        .filter(|&(_, width)| width > 1)
        .max_by_key(|&(_, width)| width);
    Ok(widest.map_or(b',', |(delimiter, _)| delimiter))
}

/// Number of fields `delimiter` splits `line` into, ignoring delimiters
/// inside double quotes.
fn fields_in_line(line: &str, delimiter: u8) -> usize {
    let mut quoted = false;
    let mut fields = 1;
    for byte in line.bytes() {
        match byte {
            b'"' => quoted = !quoted,
            b if b == delimiter && !quoted => fields += 1,
            _ => {}
        }
    }
    fields
}
