//! Multi-table concatenation with label alignment and collision renaming.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::axis::{Axis, LabeledAxis, Selector};
use crate::error::{Result, TabulaError};
use crate::value::CellValue;

use super::Table;

/// Stack `tables` along `side`, aligning them on the labels of the opposite
/// axis (an outer join).
///
/// The labels on `side` are the concatenation of every table's labels, in
/// table order, without deduplication. Lines on the opposite axis are matched
/// by label; each table fills its own segment and cells a table does not
/// supply stay absent.
///
/// Collisions are counted per table. When a later table supplies a label
/// already present, it fills the existing line. When one table supplies the
/// same label more than once, the repeats go to `"<label>_1"`, `"<label>_2"`
/// and so on, which later tables fill in the same way. A suffix that some
/// input already uses as a real label is skipped.
///
/// [`Axis::Row`] stacks rows and aligns columns; to merge rows by label
/// (for example `eff, efe, efe_1, ...` with the inputs' columns side by
/// side) concatenate along [`Axis::Column`].
///
/// The result's opposite axis takes the first table's axis name and lists
/// labels in first-seen order, renamed labels placed where they first arose.
pub fn concat<'a, I>(side: Axis, tables: I) -> Result<Table>
where
    I: IntoIterator<Item = &'a Table>,
{
    let tables: Vec<&Table> = tables.into_iter().collect();
    let first = tables.first().ok_or(TabulaError::EmptyConcatInput)?;
    let opposite = side.opposite();

    let total: usize = tables.iter().map(|t| t.len(side)).sum();
    let stacked = LabeledAxis::from_labels(
        tables
            .iter()
            .flat_map(|t| t.axis(side).labels().iter().cloned()),
        first.axis(side).name().clone(),
    );
    let union: IndexSet<CellValue> = tables
        .iter()
        .flat_map(|t| t.axis(opposite).unique_labels())
        .collect();

    let mut lines: IndexMap<CellValue, Vec<CellValue>> = IndexMap::new();
    let mut offset = 0;
    let mut renamed = 0;
    for table in &tables {
        let width = table.len(side);
        let (keys, fetched) = table.paired_slice_by_label(opposite, union.iter().cloned());
        let mut uses: HashMap<CellValue, usize> = HashMap::new();

        for (key, segment) in keys.into_iter().zip(fetched) {
            let count = uses.get(&key).copied().unwrap_or(0);
            let target = if !lines.contains_key(&key) || count == 0 {
                uses.insert(key.clone(), 1);
                key
            } else {
                let mut n = count;
                while union.contains(&key.with_suffix(n)) {
                    n += 1;
                }
                uses.insert(key.clone(), n + 1);
                renamed += 1;
                key.with_suffix(n)
            };
            let line = lines
                .entry(target)
                .or_insert_with(|| vec![CellValue::Absent; total]);
            line[offset..offset + width].clone_from_slice(&segment);
        }
        offset += width;
    }

    let order: Vec<Selector> = lines.keys().cloned().map(Selector::Label).collect();
    let staged = Table::from_label_map(opposite, lines)?;
    let aligned = LabeledAxis::from_labels(
        staged.axis(opposite).labels().to_vec(),
        first.axis(opposite).name().clone(),
    );
    let joined = Table::oriented(opposite, aligned, stacked, staged.lines(opposite));
    let result = joined.slice_generic(opposite, order)?;

    debug!(
        "concat of {} tables along {side} axis: shape {:?}, {renamed} renamed labels",
        tables.len(),
        result.shape()
    );
    Ok(result)
}
