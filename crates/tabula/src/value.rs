//! Cell values stored in table bodies and used as axis labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell: text, integer, or absent.
///
/// Equality and hashing use the variant tag together with the payload, so
/// `Text("1")` and `Int(1)` are distinct labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// UTF-8 text.
    Text(String),
    /// Signed integer.
    Int(i64),
    /// Missing value.
    #[default]
    Absent,
}

impl CellValue {
    /// Returns true if this cell holds no value.
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    /// Borrow the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The label used when this label collides during concatenation:
    /// `"<label>_<n>"`. Integers are rendered in decimal first.
    pub fn with_suffix(&self, n: usize) -> CellValue {
        CellValue::Text(format!("{}_{}", self, n))
    }
}

/// Text passes through, integers render in decimal, absent is empty.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Absent => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Absent, Into::into)
    }
}

impl From<&CellValue> for CellValue {
    fn from(value: &CellValue) -> Self {
        value.clone()
    }
}

/// Convert a row of anything cell-like into owned cells.
pub fn row<I, T>(cells: I) -> Vec<CellValue>
where
    I: IntoIterator<Item = T>,
    T: Into<CellValue>,
{
    cells.into_iter().map(Into::into).collect()
}
