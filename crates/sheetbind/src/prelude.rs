//! Prelude module - common imports for sheetbind users
//!
//! ```rust
//! use sheetbind::prelude::*;
//! ```

pub use crate::{
    CellValue, DataCell, DataRow, ExportField, ExportRecord, FromRow, MessageKind, RuleKind,
    Sheet, SheetMessage, SheetProvider, ValidationRule, Workbook, WorkbookSource, Worksheet,
    WorksheetConfig, WorksheetSink, WorksheetSource,
};

pub use crate::{CsvReadOptions, CsvWriteOptions};
