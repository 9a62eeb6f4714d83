//! Axis discriminator and the labeled axis index.

mod labeled;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabulaError};
use crate::value::CellValue;

pub use labeled::{LabeledAxis, Selector};

/// Which side of a table an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// The row dimension (the index).
    Row = 0,
    /// The column dimension (the header).
    Column = 1,
}

impl Axis {
    /// Checked construction from a raw discriminator.
    pub fn new(raw: u8) -> Result<Self> {
        match raw {
            0 => Ok(Axis::Row),
            1 => Ok(Axis::Column),
            other => Err(TabulaError::IllegalAxis(other)),
        }
    }

    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    /// Name given to generated axes on this side.
    pub fn default_name(self) -> CellValue {
        match self {
            Axis::Row => CellValue::from("Index"),
            Axis::Column => CellValue::from("Columns"),
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = TabulaError;

    fn try_from(raw: u8) -> Result<Self> {
        Axis::new(raw)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Axis::Row.opposite(), Axis::Column);
        assert_eq!(Axis::Column.opposite(), Axis::Row);
        assert_eq!(Axis::Row.opposite().opposite(), Axis::Row);
    }

    #[test]
    fn test_checked_construction() {
        assert_eq!(Axis::new(0).unwrap(), Axis::Row);
        assert_eq!(Axis::try_from(1u8).unwrap(), Axis::Column);
        assert!(matches!(Axis::new(2), Err(TabulaError::IllegalAxis(2))));
    }

    #[test]
    fn test_default_names() {
        assert_eq!(Axis::Row.default_name(), CellValue::from("Index"));
        assert_eq!(Axis::Column.default_name(), CellValue::from("Columns"));
    }
}
