//! Delimited-file ingestion: reads a file into a rectangular text grid.

mod reader;
mod source;

pub use reader::{Reader, ReaderConfig};
pub use source::SourceMetadata;
