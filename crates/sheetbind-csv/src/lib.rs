//! # sheetbind-csv
//!
//! Loads a CSV file into a [`sheetbind_core::Worksheet`] and saves a
//! worksheet back to CSV. Files are opened and closed within each call.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
