//! Provenance of a table read from disk.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::reader::ReaderConfig;
use crate::table::Table;

/// Where a table came from and how its grid was interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Path the table was read from.
    pub path: PathBuf,
    /// `sha256:<hex>` digest of the raw bytes.
    pub digest: String,
    pub size_bytes: u64,
    /// Field delimiter used for parsing.
    pub delimiter: char,
    /// True when the delimiter was detected rather than configured.
    pub detected: bool,
    /// Whether the first record became the column labels.
    pub has_header: bool,
    /// Whether the first field of each record became the row label.
    pub has_index: bool,
    /// Raw records parsed, header record included.
    pub records: usize,
    /// `(rows, columns)` of the resulting table.
    pub shape: (usize, usize),
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe a table built from `bytes`, read from `path` with `config`.
    pub(crate) fn new(
        path: &Path,
        bytes: &[u8],
        delimiter: u8,
        config: &ReaderConfig,
        records: usize,
        table: &Table,
    ) -> Self {
        Self {
            path: path.to_path_buf(),
            digest: format!("sha256:{:x}", Sha256::digest(bytes)),
            size_bytes: bytes.len() as u64,
            delimiter: char::from(delimiter),
            detected: config.delimiter.is_none(),
            has_header: config.has_header,
            has_index: config.has_index,
            records,
            shape: table.shape(),
            loaded_at: Utc::now(),
        }
    }
}

impl fmt::Display for SourceMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, columns) = self.shape;
        write!(
            f,
            "{} ({} records, delimiter {:?}{}) as {rows}x{columns} table, {}",
            self.path.display(),
            self.records,
            self.delimiter,
            if self.detected { ", detected" } else { "" },
            self.digest
        )
    }
}
