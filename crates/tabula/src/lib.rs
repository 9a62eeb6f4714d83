//! Tabula: labeled two-axis in-memory tables.
//!
//! A [`Table`] holds a rectangular body of [`CellValue`]s with an ordered,
//! possibly repeating, label sequence on each axis. Every operation is
//! written once against an [`Axis`] and works the same for rows and
//! columns.
//!
//! # Core Operations
//!
//! - **Construction**: from raw grids, label maps, or delimited files
//! - **Selection**: by label, by position, or mixed ([`Selector`])
//! - **Reshaping**: transpose, index/header resets, column promotion
//! - **Concatenation**: outer-join alignment with collision renaming
//!
//! # Example
//!
//! ```
//! use tabula::{Axis, Table};
//!
//! let table = Table::from_grid(
//!     vec![
//!         vec!["String", "Int", "Float"],
//!         vec!["eff", "1", "4.2"],
//!         vec!["efe", "3", "5.32"],
//!         vec!["efe", "2", "1.32"],
//!     ],
//!     true,
//!     true,
//! )
//! .unwrap();
//!
//! let efe = table.slice_by_label(Axis::Row, ["efe"]).unwrap();
//! assert_eq!(efe.shape(), (2, 2));
//!
//! let floats = table.loc(&["eff"], &["Float"]).unwrap();
//! assert_eq!(floats.body()[0][0].to_string(), "4.2");
//! ```

pub mod axis;
pub mod error;
pub mod input;
pub mod table;
pub mod value;

pub use axis::{Axis, LabeledAxis, Selector};
pub use error::{Result, TabulaError};
pub use input::{Reader, ReaderConfig, SourceMetadata};
pub use table::{Table, concat};
pub use value::{CellValue, row};
