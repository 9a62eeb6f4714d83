//! Building tables from raw grids and label maps.

use std::path::Path;

use log::debug;

use crate::axis::{Axis, LabeledAxis};
use crate::error::{Result, TabulaError};
use crate::input::{Reader, ReaderConfig};
use crate::value::CellValue;

use super::Table;

impl Table {
    /// Build a table from a rectangular grid.
    ///
    /// | `has_header` | `has_index` | columns      | rows         | body             |
    /// |--------------|-------------|--------------|--------------|------------------|
    /// | true         | true        | `row0[1..]`  | `col0[1..]`  | `grid[1..][1..]` |
    /// | true         | false       | `row0`       | `0..R`       | `grid[1..]`      |
    /// | false        | true        | `0..C`       | `col0`       | `grid[..][1..]`  |
    /// | false        | false       | `0..C`       | `0..R`       | `grid`           |
    ///
    /// With both flags the top-left cell names the row axis; otherwise the
    /// row axis is named `"Index"`. The column axis is always `"Columns"`.
    /// Generated axes carry text labels (`"0"`, `"1"`, ...).
    pub fn from_grid<I, R, T>(grid: I, has_header: bool, has_index: bool) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let mut rows: Vec<Vec<CellValue>> = grid
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();

        if let Some(first) = rows.first() {
            let width = first.len();
            if let Some(bad) = rows.iter().find(|r| r.len() != width) {
                return Err(TabulaError::LengthMismatch {
                    expected: width,
                    actual: bad.len(),
                });
            }
            if has_index && width == 0 {
                return Err(TabulaError::EmptyData(
                    "No index column in a grid without columns".to_string(),
                ));
            }
        }

        let mut header_cells = if has_header {
            if rows.is_empty() {
                return Err(TabulaError::EmptyData("No header row found".to_string()));
            }
            Some(rows.remove(0))
        } else {
            None
        };

        let (index, body) = if has_index {
            let mut labels = Vec::with_capacity(rows.len());
            let body: Vec<Vec<CellValue>> = rows
                .into_iter()
                .map(|mut r| {
                    labels.push(r.remove(0));
                    r
                })
                .collect();
            let name = match header_cells.as_mut() {
                Some(cells) => cells.remove(0),
                None => Axis::Row.default_name(),
            };
            (LabeledAxis::from_labels(labels, name), body)
        } else {
            (LabeledAxis::numeric(Axis::Row, rows.len()), rows)
        };

        let header = match header_cells {
            Some(cells) => LabeledAxis::generic(Axis::Column, cells),
            None => {
                let width = body.first().map_or(0, Vec::len);
                LabeledAxis::numeric(Axis::Column, width)
            }
        };

        Table::from_parts(index, header, body)
    }

    /// Build a table from a label-to-line mapping along `side`.
    ///
    /// For [`Axis::Row`] the keys become row labels (axis `"Index"`) and the
    /// columns are generated; for [`Axis::Column`] the keys become column
    /// labels and the rows are generated.
    ///
    /// **Ordering:** lines appear in the iteration order of `map`. Passing a
    /// `HashMap` therefore yields an unspecified order; callers that need a
    /// stable order must pass an ordered map or re-select afterwards with
    /// [`Table::slice_generic`].
    pub fn from_label_map<I, K>(side: Axis, map: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vec<CellValue>)>,
        K: Into<CellValue>,
    {
        let mut labels = Vec::new();
        let mut lines = Vec::new();
        for (key, line) in map {
            labels.push(key.into());
            lines.push(line);
        }

        let width = lines.first().map_or(0, Vec::len);
        if let Some(bad) = lines.iter().find(|l| l.len() != width) {
            return Err(TabulaError::LengthMismatch {
                expected: width,
                actual: bad.len(),
            });
        }

        let axis = LabeledAxis::generic(side, labels);
        let opposite = LabeledAxis::numeric(side.opposite(), width);
        Ok(Table::oriented(side, axis, opposite, lines))
    }

    /// Read a delimited file and build a table from its grid.
    pub fn from_delimited_file(
        path: impl AsRef<Path>,
        has_header: bool,
        has_index: bool,
    ) -> Result<Self> {
        let reader = Reader::with_config(ReaderConfig {
            has_header,
            has_index,
            ..ReaderConfig::default()
        });
        let (table, source) = reader.read_table(path)?;
        debug!("loaded {source}");
        Ok(table)
    }
}
