//! Structural transformations: transpose, index/header resets, column
//! promotion and removal, appending lines.

use crate::axis::{Axis, LabeledAxis, Selector};
use crate::error::{Result, TabulaError};
use crate::value::CellValue;

use super::{Table, transpose_cells};

impl Table {
    /// Swap the row and column axes and transpose the body.
    pub fn transpose(&self) -> Table {
        Table::from_parts_unchecked(
            self.header.clone(),
            self.index.clone(),
            transpose_cells(&self.body, self.column_count()),
        )
    }

    /// Fold the row labels into the body as a leading column and replace
    /// the row axis with a sequential one.
    ///
    /// The new leading column is labeled with the old row axis name.
    pub fn reset_index(&mut self) {
        let folded = self.folded_index();
        self.index = LabeledAxis::numeric(Axis::Row, folded.row_count());
        self.header = folded.header;
        self.body = folded.body;
    }

    /// Replace the column axis with a sequential one. The old column labels
    /// are discarded rather than folded into the body.
    pub fn reset_header(&mut self) {
        self.header = LabeledAxis::numeric(Axis::Column, self.column_count());
    }

    /// Promote a column to become the row axis.
    ///
    /// The current row labels are folded into the body first (as in
    /// [`Table::reset_index`]), then the selected column's values become the
    /// new row labels, named after the column, and the column is removed.
    /// A label selector picks the first column carrying that label.
    pub fn set_index(&mut self, column: impl Into<Selector>) -> Result<()> {
        let selector = column.into();
        self.replace_with(|table| {
            let position = table.header.resolve(Axis::Column, &selector)?;
            let name = table.header.labels()[position].clone();
            let index = LabeledAxis::from_labels(table.line(Axis::Column, position), name);

            let folded = table.folded_index();
            let keep = (0..folded.column_count()).filter(|&j| j != position + 1);
            let remaining = folded.slice_by_position(Axis::Column, keep)?;
            Table::from_parts(index, remaining.header, remaining.body)
        })
    }

    /// Remove exactly one column. A label selector removes the first column
    /// carrying that label.
    pub fn drop_column(&mut self, column: impl Into<Selector>) -> Result<()> {
        let selector = column.into();
        self.replace_with(|table| {
            let position = table.header.resolve(Axis::Column, &selector)?;
            let keep = (0..table.column_count())
                .filter(|&j| j != position)
                .map(Selector::Position);
            table.slice_generic(Axis::Column, keep)
        })
    }

    /// Append one line along `side`: a row for [`Axis::Row`], a column for
    /// [`Axis::Column`].
    ///
    /// `cells` must match the length of the opposite axis.
    pub fn add_slice(
        &mut self,
        side: Axis,
        label: impl Into<CellValue>,
        cells: Vec<CellValue>,
    ) -> Result<()> {
        let expected = self.len(side.opposite());
        if cells.len() != expected {
            return Err(TabulaError::LengthMismatch {
                expected,
                actual: cells.len(),
            });
        }
        match side {
            Axis::Row => {
                self.index.append(label);
                self.body.push(cells);
            }
            Axis::Column => {
                self.header.append(label);
                for (row, cell) in self.body.iter_mut().zip(cells) {
                    row.push(cell);
                }
            }
        }
        Ok(())
    }

    /// A copy with the row labels folded in as a leading column. The row
    /// axis is kept; the column axis takes the generated name.
    fn folded_index(&self) -> Table {
        let header = LabeledAxis::generic(
            Axis::Column,
            std::iter::once(self.index.name().clone())
                .chain(self.header.labels().iter().cloned()),
        );
        Table::from_parts_unchecked(self.index.clone(), header, self.body_rows())
    }
}
