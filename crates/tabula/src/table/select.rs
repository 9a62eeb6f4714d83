//! Axis-generic selection by label, by position, or mixed.
//!
//! Every selection runs against the labeled axis of the requested side and
//! builds a fresh table; nothing is shared with the source.

use log::trace;

use crate::axis::{Axis, LabeledAxis, Selector};
use crate::error::Result;
use crate::value::CellValue;

use super::Table;

impl Table {
    /// Select every line on `side` carrying one of `labels`, in request
    /// order. Duplicate labels expand to all their positions.
    ///
    /// Fails with `LabelNotFound` on the first missing label.
    pub fn slice_by_label<I, T>(&self, side: Axis, labels: I) -> Result<Table>
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let axis = self.axis(side);
        let mut picks = Vec::new();
        for label in labels {
            let label = label.into();
            for &position in axis.lookup(side, &label)? {
                picks.push((label.clone(), position));
            }
        }
        trace!("slice_by_label on {side} axis picked {} lines", picks.len());
        Ok(self.pick(side, picks))
    }

    /// Select lines on `side` by position, in request order.
    ///
    /// Fails with `IndexOutOfRange` if any position is past the end.
    pub fn slice_by_position<I>(&self, side: Axis, positions: I) -> Result<Table>
    where
        I: IntoIterator<Item = usize>,
    {
        let axis = self.axis(side);
        let picks = positions
            .into_iter()
            .map(|position| Ok((axis.label_at(side, position)?.clone(), position)))
            .collect::<Result<Vec<_>>>()?;
        trace!("slice_by_position on {side} axis picked {} lines", picks.len());
        Ok(self.pick(side, picks))
    }

    /// Select lines on `side` with a mix of labels and positions, in
    /// selector order.
    pub fn slice_generic<I, S>(&self, side: Axis, selectors: I) -> Result<Table>
    where
        I: IntoIterator<Item = S>,
        S: Into<Selector>,
    {
        let axis = self.axis(side);
        let mut picks = Vec::new();
        for selector in selectors {
            match selector.into() {
                Selector::Label(label) => {
                    for &position in axis.lookup(side, &label)? {
                        picks.push((label.clone(), position));
                    }
                }
                Selector::Position(position) => {
                    picks.push((axis.label_at(side, position)?.clone(), position));
                }
            }
        }
        Ok(self.pick(side, picks))
    }

    /// Select rows, then columns, by label. An empty list leaves that axis
    /// untouched.
    pub fn loc<R, C>(&self, rows: &[R], columns: &[C]) -> Result<Table>
    where
        R: Clone + Into<CellValue>,
        C: Clone + Into<CellValue>,
    {
        let mut table = self.clone();
        if !rows.is_empty() {
            table = table.slice_by_label(Axis::Row, rows.iter().cloned())?;
        }
        if !columns.is_empty() {
            table = table.slice_by_label(Axis::Column, columns.iter().cloned())?;
        }
        Ok(table)
    }

    /// Select rows, then columns, by position. An empty list leaves that
    /// axis untouched.
    pub fn iloc(&self, rows: &[usize], columns: &[usize]) -> Result<Table> {
        let mut table = self.clone();
        if !rows.is_empty() {
            table = table.slice_by_position(Axis::Row, rows.iter().copied())?;
        }
        if !columns.is_empty() {
            table = table.slice_by_position(Axis::Column, columns.iter().copied())?;
        }
        Ok(table)
    }

    /// Like [`Table::slice_by_label`] but never fails.
    ///
    /// Returns the matched labels and their lines. A label with no match
    /// still yields one entry whose line is all absent, sized to the
    /// opposite axis.
    pub fn paired_slice_by_label<I, T>(
        &self,
        side: Axis,
        labels: I,
    ) -> (Vec<CellValue>, Vec<Vec<CellValue>>)
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let axis = self.axis(side);
        let width = self.len(side.opposite());
        let mut matched = Vec::new();
        let mut lines = Vec::new();
        for label in labels {
            let label = label.into();
            match axis.get(&label) {
                Some(positions) => {
                    for &position in positions {
                        lines.push(self.line(side, position));
                        matched.push(label.clone());
                    }
                }
                None => {
                    lines.push(vec![CellValue::Absent; width]);
                    matched.push(label);
                }
            }
        }
        (matched, lines)
    }

    /// Column vectors for the given selectors.
    pub fn get_columns<I, S>(&self, selectors: I) -> Result<Vec<Vec<CellValue>>>
    where
        I: IntoIterator<Item = S>,
        S: Into<Selector>,
    {
        Ok(self.slice_generic(Axis::Column, selectors)?.lines(Axis::Column))
    }

    /// Build a table from `(label, position)` picks along `side`.
    fn pick(&self, side: Axis, picks: Vec<(CellValue, usize)>) -> Table {
        let mut axis = LabeledAxis::new(self.axis(side).name().clone());
        let mut lines = Vec::with_capacity(picks.len());
        for (label, position) in picks {
            lines.push(self.line(side, position));
            axis.append(label);
        }
        self.with_lines(side, axis, lines)
    }
}
