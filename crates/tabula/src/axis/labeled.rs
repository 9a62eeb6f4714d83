//! Ordered labels with a derived label-to-positions lookup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Axis;
use crate::error::{Result, TabulaError};
use crate::value::CellValue;

/// Picks one entry on an axis, either by label or by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Every position carrying this label.
    Label(CellValue),
    /// A single zero-based position.
    Position(usize),
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Selector::Label(CellValue::from(value))
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Selector::Label(CellValue::from(value))
    }
}

impl From<CellValue> for Selector {
    fn from(value: CellValue) -> Self {
        Selector::Label(value)
    }
}

impl From<&CellValue> for Selector {
    fn from(value: &CellValue) -> Self {
        Selector::Label(value.clone())
    }
}

impl From<usize> for Selector {
    fn from(value: usize) -> Self {
        Selector::Position(value)
    }
}

/// The label sequence for one side of a table.
///
/// `positions` maps every distinct label to the ascending positions where it
/// occurs and is only ever grown through [`LabeledAxis::append`], so the
/// lookup always partitions `0..len()` exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AxisRepr", into = "AxisRepr")]
pub struct LabeledAxis {
    name: CellValue,
    labels: Vec<CellValue>,
    positions: IndexMap<CellValue, Vec<usize>>,
}

#[derive(Serialize, Deserialize)]
struct AxisRepr {
    name: CellValue,
    labels: Vec<CellValue>,
}

impl From<AxisRepr> for LabeledAxis {
    fn from(repr: AxisRepr) -> Self {
        LabeledAxis::from_labels(repr.labels, repr.name)
    }
}

impl From<LabeledAxis> for AxisRepr {
    fn from(axis: LabeledAxis) -> Self {
        AxisRepr {
            name: axis.name,
            labels: axis.labels,
        }
    }
}

impl LabeledAxis {
    /// Create an empty axis with the given name.
    pub fn new(name: impl Into<CellValue>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            positions: IndexMap::new(),
        }
    }

    /// Build an axis by appending each label in order.
    pub fn from_labels<I, T>(labels: I, name: impl Into<CellValue>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let mut axis = Self::new(name);
        for label in labels {
            axis.append(label);
        }
        axis
    }

    /// Build an axis carrying the generated name for `side`.
    pub fn generic<I, T>(side: Axis, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        Self::from_labels(labels, side.default_name())
    }

    /// A sequential axis `0..len` for `side`.
    ///
    /// The labels are the *text* renderings `"0"`, `"1"`, ... rather than
    /// integers. Label lookups on such an axis must use strings
    /// (`"2"`, not `2`), while positional lookups use plain indices.
    pub fn numeric(side: Axis, len: usize) -> Self {
        Self::generic(side, (0..len).map(|i| i.to_string()))
    }

    /// Append one label; the only way an axis grows.
    pub fn append(&mut self, label: impl Into<CellValue>) {
        let label = label.into();
        let position = self.labels.len();
        self.positions
            .entry(label.clone())
            .or_default()
            .push(position);
        self.labels.push(label);
    }

    /// The name of the axis itself.
    pub fn name(&self) -> &CellValue {
        &self.name
    }

    /// Replace the axis name; labels are untouched.
    pub fn set_name(&mut self, name: impl Into<CellValue>) {
        self.name = name.into();
    }

    /// Labels in positional order.
    pub fn labels(&self) -> &[CellValue] {
        &self.labels
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the axis has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns true if at least one position carries `label`.
    pub fn contains(&self, label: &CellValue) -> bool {
        self.positions.contains_key(label)
    }

    /// Positions carrying `label`, ascending, or `None`.
    pub fn get(&self, label: &CellValue) -> Option<&[usize]> {
        self.positions.get(label).map(Vec::as_slice)
    }

    /// Positions carrying `label`, ascending.
    ///
    /// `side` only labels the error.
    pub fn lookup(&self, side: Axis, label: &CellValue) -> Result<&[usize]> {
        self.get(label).ok_or_else(|| TabulaError::LabelNotFound {
            axis: side,
            label: label.clone(),
        })
    }

    /// The label at `position`.
    pub fn label_at(&self, side: Axis, position: usize) -> Result<&CellValue> {
        self.labels
            .get(position)
            .ok_or(TabulaError::IndexOutOfRange {
                axis: side,
                position,
                length: self.labels.len(),
            })
    }

    /// The first position a selector refers to.
    pub fn resolve(&self, side: Axis, selector: &Selector) -> Result<usize> {
        match selector {
            Selector::Label(label) => Ok(self.lookup(side, label)?[0]),
            Selector::Position(position) => {
                self.label_at(side, *position)?;
                Ok(*position)
            }
        }
    }

    /// Distinct labels in first-seen order.
    pub fn unique_labels(&self) -> Vec<CellValue> {
        self.positions.keys().cloned().collect()
    }
}
