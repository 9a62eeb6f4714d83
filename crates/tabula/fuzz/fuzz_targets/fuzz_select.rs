//! Fuzz target for selection and concatenation.
//!
//! Builds a small table from arbitrary labels and cells, then drives
//! selection, reshaping and concat with arbitrary requests. Errors are
//! fine; panics are not.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tabula::{Axis, CellValue, LabeledAxis, Selector, Table, concat};

#[derive(Debug, Arbitrary)]
enum Cell {
    Text(u8),
    Int(i8),
    Absent,
}

impl From<&Cell> for CellValue {
    fn from(cell: &Cell) -> Self {
        match cell {
            Cell::Text(c) => CellValue::Text(format!("l{}", c % 8)),
            Cell::Int(i) => CellValue::Int(i64::from(*i % 4)),
            Cell::Absent => CellValue::Absent,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    rows: Vec<Cell>,
    cols: Vec<Cell>,
    cells: Vec<Cell>,
    column_side: bool,
    by_label: Vec<Cell>,
    by_position: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let rows = input.rows.len().min(8);
    let cols = input.cols.len().min(8);
    if input.cells.is_empty() && rows * cols > 0 {
        return;
    }

    let index = LabeledAxis::from_labels(input.rows.iter().take(rows).map(CellValue::from), "Index");
    let header = LabeledAxis::from_labels(input.cols.iter().take(cols).map(CellValue::from), "Columns");
    let body = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| CellValue::from(&input.cells[(r * cols + c) % input.cells.len()]))
                .collect()
        })
        .collect();
    let Ok(table) = Table::from_parts(index, header, body) else {
        return;
    };

    let side = if input.column_side { Axis::Column } else { Axis::Row };
    let labels: Vec<CellValue> = input.by_label.iter().map(CellValue::from).collect();
    let positions: Vec<usize> = input.by_position.iter().map(|&p| usize::from(p)).collect();

    let _ = table.slice_by_label(side, labels.clone());
    let _ = table.slice_by_position(side, positions.clone());
    let _ = table.slice_generic(
        side,
        labels
            .iter()
            .cloned()
            .map(Selector::Label)
            .chain(positions.iter().copied().map(Selector::Position)),
    );
    let _ = table.paired_slice_by_label(side, labels);
    let _ = concat(side, [&table, &table.transpose().transpose()]);

    let mut reshaped = table.clone();
    if let Some(&p) = positions.first() {
        let _ = reshaped.set_index(p);
        let _ = reshaped.drop_column(p);
    }
    reshaped.reset_index();
    reshaped.reset_header();
});
