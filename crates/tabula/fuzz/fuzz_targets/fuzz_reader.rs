//! Fuzz target for the delimited reader.
//!
//! The reader must never panic on malformed input, and every grid it
//! produces must be rectangular under all four header/index combinations.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tabula::{Reader, Table};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            if let Ok(grid) = Reader::new().read_grid(temp_file.path()) {
                for (header, index) in [(true, true), (true, false), (false, true), (false, false)] {
                    let _ = Table::from_grid(grid.clone(), header, index);
                }
            }
        }
    }
});
