//! # sheetbind
//!
//! Read typed records out of spreadsheet worksheets and check every cell
//! against the worksheet's data-validation rules.
//!
//! ## Features
//!
//! - Lazy row extraction with header-aware column labels
//! - Text length, whole number and list membership checks, with list
//!   values taken from the workbook's named ranges
//! - Validation failures reported as data, one [`SheetMessage`] per cell
//! - Writing typed records back with generated headers
//! - CSV loading and saving
//!
//! ## Example
//!
//! ```rust
//! use sheetbind::prelude::*;
//!
//! struct Order {
//!     item: String,
//!     quantity: i64,
//! }
//!
//! impl FromRow for Order {
//!     fn from_row(row: DataRow) -> sheetbind::Result<Self> {
//!         Ok(Order {
//!             item: row.column("Item")?.to_string(),
//!             quantity: row.column("Quantity")?.to_int()?,
//!         })
//!     }
//! }
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Item").unwrap();
//! sheet.set_cell_value("B1", "Quantity").unwrap();
//! sheet.set_cell_value("A2", "Widget").unwrap();
//! sheet.set_cell_value("B2", 250.0).unwrap();
//!
//! let provider = SheetProvider::with_workbook(workbook);
//! let config = WorksheetConfig::new()
//!     .with_rule(ValidationRule::whole_number(2, 1, 100).with_error_message("1 to 100"));
//!
//! let orders: Sheet<Order> = provider.get_sheet_data("Sheet1", &config).unwrap();
//! assert_eq!(orders.records()[0].item, "Widget");
//! assert_eq!(orders.messages()[0].to_string(), "Sheet1!B2: 1 to 100");
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod extract;
pub mod mapping;
pub mod named_ranges;
pub mod prelude;
pub mod provider;
pub mod record;
pub mod sheet;
pub mod source;
pub mod validate;

pub use config::WorksheetConfig;
pub use data::{DataCell, DataRow};
pub use error::{Error, Result};
pub use extract::{data_rows, DataRows};
pub use mapping::{headings, ColumnIndexMapping};
pub use named_ranges::NamedRangeTable;
pub use provider::SheetProvider;
pub use record::{from_pascal_case, ExportField, ExportRecord, FromRow};
pub use sheet::{MessageKind, Sheet, SheetMessage};
pub use source::{WorkbookSource, WorksheetSink, WorksheetSource};
pub use validate::validate;

// Re-export the workbook model
pub use sheetbind_core::{
    CellAddress, CellRange, CellValue, NamedRange, NamedValue, RuleKind, ValidationRule,
    Workbook, Worksheet,
};

// Re-export CSV types
pub use sheetbind_csv::{CsvError, CsvReadOptions, CsvWriteOptions, LineTerminator};
