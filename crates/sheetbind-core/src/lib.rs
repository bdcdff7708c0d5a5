//! # sheetbind-core
//!
//! In-memory spreadsheet model used by the sheetbind pipeline.
//!
//! This crate provides the collaborator the row extractor and validation
//! engine read from:
//! - [`CellValue`] - Loosely typed cell values (numbers, strings, booleans, dates)
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`Worksheet`] - A sparse cell grid with an extent and declared validation rules
//! - [`Workbook`] - Worksheets plus workbook-level named ranges
//! - [`ValidationRule`] - Per-column data-validation rules
//!
//! ## Example
//!
//! ```rust
//! use sheetbind_core::{CellValue, ValidationRule, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "Quantity").unwrap();
//! sheet.set_cell_value("A2", 42.0).unwrap();
//! sheet.set_cell_value_at(2, 0, CellValue::string("n/a")).unwrap();
//!
//! sheet.add_data_validation(
//!     ValidationRule::whole_number(1, 1, 100).with_error_message("1 to 100 only"),
//! );
//! assert_eq!(sheet.dimension(), Some((3, 1)));
//! ```

pub mod cell;
pub mod error;
pub mod named_range;
pub mod validation;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange, CellValue, SharedString};
pub use error::{Error, Result};
pub use named_range::{NamedRange, NamedRangeCollection, NamedValue};
pub use validation::{RuleKind, ValidationRule};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
