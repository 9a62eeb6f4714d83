//! The labeled two-axis table.
//!
//! A [`Table`] owns a row axis (the index), a column axis (the header) and a
//! row-major body. Every constructor and mutating operation leaves
//! `index.len() == body.len()` and every row `header.len()` cells wide.

mod concat;
mod construct;
mod reshape;
mod select;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, LabeledAxis};
use crate::error::{Result, TabulaError};
use crate::value::CellValue;

pub use concat::concat;

/// A rectangular body with labels on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableRepr")]
pub struct Table {
    index: LabeledAxis,
    header: LabeledAxis,
    body: Vec<Vec<CellValue>>,
}

/// Deserialized parts, shape-checked before becoming a [`Table`].
#[derive(Deserialize)]
struct TableRepr {
    index: LabeledAxis,
    header: LabeledAxis,
    body: Vec<Vec<CellValue>>,
}

impl TryFrom<TableRepr> for Table {
    type Error = TabulaError;

    fn try_from(repr: TableRepr) -> Result<Self> {
        Table::from_parts(repr.index, repr.header, repr.body)
    }
}

impl Table {
    /// Assemble a table from its parts, checking the shape.
    pub fn from_parts(
        index: LabeledAxis,
        header: LabeledAxis,
        body: Vec<Vec<CellValue>>,
    ) -> Result<Self> {
        if body.len() != index.len() {
            return Err(TabulaError::LengthMismatch {
                expected: index.len(),
                actual: body.len(),
            });
        }
        if let Some(row) = body.iter().find(|r| r.len() != header.len()) {
            return Err(TabulaError::LengthMismatch {
                expected: header.len(),
                actual: row.len(),
            });
        }
        Ok(Self { index, header, body })
    }

    /// Assemble without the shape check; callers guarantee the invariants.
    pub(crate) fn from_parts_unchecked(
        index: LabeledAxis,
        header: LabeledAxis,
        body: Vec<Vec<CellValue>>,
    ) -> Self {
        debug_assert_eq!(body.len(), index.len());
        debug_assert!(body.iter().all(|r| r.len() == header.len()));
        Self { index, header, body }
    }

    /// The row axis.
    pub fn index(&self) -> &LabeledAxis {
        &self.index
    }

    /// The column axis.
    pub fn header(&self) -> &LabeledAxis {
        &self.header
    }

    /// The labeled axis for `side`.
    pub fn axis(&self, side: Axis) -> &LabeledAxis {
        match side {
            Axis::Row => &self.index,
            Axis::Column => &self.header,
        }
    }

    /// Row-major cell values.
    pub fn body(&self) -> &[Vec<CellValue>] {
        &self.body
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Length along `side`.
    pub fn len(&self, side: Axis) -> usize {
        self.axis(side).len()
    }

    /// Returns true if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    /// A specific cell.
    pub fn get(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.body.get(row).and_then(|r| r.get(column))
    }

    /// The body as lines along `side`: rows for [`Axis::Row`], columns for
    /// [`Axis::Column`]. Always an owned copy.
    pub(crate) fn lines(&self, side: Axis) -> Vec<Vec<CellValue>> {
        match side {
            Axis::Row => self.body.clone(),
            Axis::Column => transpose_cells(&self.body, self.column_count()),
        }
    }

    /// A single line along `side`, by position.
    pub(crate) fn line(&self, side: Axis, position: usize) -> Vec<CellValue> {
        match side {
            Axis::Row => self.body[position].clone(),
            Axis::Column => self.body.iter().map(|r| r[position].clone()).collect(),
        }
    }

    /// Build a table whose `side` axis is `axis` with the given lines,
    /// keeping the opposite axis of `self`.
    pub(crate) fn with_lines(&self, side: Axis, axis: LabeledAxis, lines: Vec<Vec<CellValue>>) -> Self {
        let opposite = self.axis(side.opposite()).clone();
        Self::oriented(side, axis, opposite, lines)
    }

    /// Assemble from lines running along `side`; `axis` labels those lines
    /// and `opposite` labels the cells within each line.
    pub(crate) fn oriented(
        side: Axis,
        axis: LabeledAxis,
        opposite: LabeledAxis,
        lines: Vec<Vec<CellValue>>,
    ) -> Self {
        match side {
            Axis::Row => Self::from_parts_unchecked(axis, opposite, lines),
            Axis::Column => {
                let body = transpose_cells(&lines, opposite.len());
                Self::from_parts_unchecked(opposite, axis, body)
            }
        }
    }

    /// Replace this table wholesale with the result of `f`, leaving it
    /// untouched if `f` fails.
    pub(crate) fn replace_with(&mut self, f: impl FnOnce(&Self) -> Result<Self>) -> Result<()> {
        let next = f(self)?;
        *self = next;
        Ok(())
    }

    /// The merged header row: the row axis name, then the column labels.
    pub fn header_row(&self) -> Vec<CellValue> {
        std::iter::once(self.index.name().clone())
            .chain(self.header.labels().iter().cloned())
            .collect()
    }

    /// The merged body: each row prefixed by its row label.
    pub fn body_rows(&self) -> Vec<Vec<CellValue>> {
        self.index
            .labels()
            .iter()
            .zip(&self.body)
            .map(|(label, row)| {
                std::iter::once(label.clone())
                    .chain(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// [`Table::header_row`] followed by [`Table::body_rows`].
    pub fn to_grid(&self) -> Vec<Vec<CellValue>> {
        let mut grid = Vec::with_capacity(self.row_count() + 1);
        grid.push(self.header_row());
        grid.extend(self.body_rows());
        grid
    }

    /// [`Table::to_grid`] with every cell rendered as text.
    pub fn to_string_grid(&self) -> Vec<Vec<String>> {
        self.to_grid()
            .iter()
            .map(|r| r.iter().map(ToString::to_string).collect())
            .collect()
    }

    /// Map each label on `side` to its line, plus one entry keyed by the
    /// opposite axis's name holding that axis's labels.
    ///
    /// Lossy: with duplicate labels the last line wins, and a label equal
    /// to the opposite axis name is shadowed by the label list.
    pub fn to_label_map(&self, side: Axis) -> HashMap<CellValue, Vec<CellValue>> {
        let mut map: HashMap<CellValue, Vec<CellValue>> = self
            .axis(side)
            .labels()
            .iter()
            .cloned()
            .zip(self.lines(side))
            .collect();
        let opposite = self.axis(side.opposite());
        map.insert(opposite.name().clone(), opposite.labels().to_vec());
        map
    }
}

/// Transpose a row-major grid whose rows are `width` cells wide.
pub(crate) fn transpose_cells(rows: &[Vec<CellValue>], width: usize) -> Vec<Vec<CellValue>> {
    (0..width)
        .map(|j| rows.iter().map(|r| r[j].clone()).collect())
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::value::row;

    /// The six-row `String`/`Int`/`Float` fixture.
    pub(crate) fn sample() -> Table {
        Table::from_grid(
            vec![
                row(["String", "Int", "Float"]),
                row(["eff", "1", "4.2"]),
                row(["efe", "3", "5.32"]),
                row(["efe", "2", "1.32"]),
                row(["ffs", "52", "2.1"]),
                row(["wg", "34", ".8"]),
                row(["ret", "4", "9.6"]),
            ],
            true,
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_from_parts_checks_shape() {
        let index = LabeledAxis::from_labels(["a"], "Index");
        let header = LabeledAxis::from_labels(["x", "y"], "Columns");
        assert!(Table::from_parts(index.clone(), header.clone(), vec![row(["1", "2"])]).is_ok());
        assert!(matches!(
            Table::from_parts(index.clone(), header.clone(), vec![row(["1"])]),
            Err(TabulaError::LengthMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            Table::from_parts(index, header, vec![]),
            Err(TabulaError::LengthMismatch { expected: 1, actual: 0 })
        ));
    }

    #[test]
    fn test_header_row_and_body_rows() {
        let t = sample();
        assert_eq!(t.header_row(), row(["String", "Int", "Float"]));
        assert_eq!(t.body_rows()[1], row(["efe", "3", "5.32"]));
    }

    #[test]
    fn test_to_grid_matches_source() {
        let grid = sample().to_string_grid();
        assert_eq!(grid.len(), 7);
        assert_eq!(grid[0], vec!["String", "Int", "Float"]);
        assert_eq!(grid[6], vec!["ret", "4", "9.6"]);
    }

    #[test]
    fn test_to_label_map_rows() {
        let map = sample().to_label_map(Axis::Row);
        assert_eq!(map[&CellValue::from("eff")], row(["1", "4.2"]));
        // duplicate label: last line wins
        assert_eq!(map[&CellValue::from("efe")], row(["2", "1.32"]));
        assert_eq!(map[&CellValue::from("Columns")], row(["Int", "Float"]));
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_to_label_map_columns() {
        let map = sample().to_label_map(Axis::Column);
        assert_eq!(map[&CellValue::from("Int")], row(["1", "3", "2", "52", "34", "4"]));
        assert_eq!(
            map[&CellValue::from("String")],
            row(["eff", "efe", "efe", "ffs", "wg", "ret"])
        );
    }

    #[test]
    fn test_deserialize_rejects_bad_shape() {
        let json = r#"{
            "index": {"name": {"kind": "text", "value": "Index"}, "labels": [{"kind": "int", "value": 0}]},
            "header": {"name": {"kind": "absent"}, "labels": []},
            "body": []
        }"#;
        assert!(serde_json::from_str::<Table>(json).is_err());
    }

    #[test]
    fn test_lines_and_line() {
        let t = sample();
        assert_eq!(t.lines(Axis::Column)[0], row(["1", "3", "2", "52", "34", "4"]));
        assert_eq!(t.line(Axis::Column, 1), row(["4.2", "5.32", "1.32", "2.1", ".8", "9.6"]));
        assert_eq!(t.line(Axis::Row, 3), row(["52", "2.1"]));
    }
}
