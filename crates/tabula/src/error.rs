//! Error types for the Tabula library.

use std::path::PathBuf;
use thiserror::Error;

use crate::axis::Axis;
use crate::value::CellValue;

/// Main error type for Tabula operations.
#[derive(Debug, Error)]
pub enum TabulaError {
    /// A requested label does not exist on the axis.
    #[error("Label '{label}' not found on {axis} axis")]
    LabelNotFound { axis: Axis, label: CellValue },

    /// A requested position is past the end of the axis.
    #[error("Position {position} out of range for {axis} axis of length {length}")]
    IndexOutOfRange {
        axis: Axis,
        position: usize,
        length: usize,
    },

    /// An axis discriminator other than 0 (rows) or 1 (columns).
    #[error("Illegal axis: {0} (expected 0 for rows or 1 for columns)")]
    IllegalAxis(u8),

    /// Supplied cells do not match the length of the axis they must line up with.
    #[error("Length mismatch: expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// `concat` was called without any tables.
    #[error("Cannot concatenate an empty list of tables")]
    EmptyConcatInput,

    /// Empty grid or file where data was required.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Error reading or accessing a source file.
    #[error("IO error for '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library while parsing a source file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for Tabula operations.
pub type Result<T> = std::result::Result<T, TabulaError>;
