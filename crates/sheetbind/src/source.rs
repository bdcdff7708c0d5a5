//! Collaborator traits over the workbook model
//!
//! The pipeline only needs three capabilities from a spreadsheet: named
//! ranges with their values, a grid of cells with a known extent, and the
//! validation rules declared on a worksheet. These traits describe those
//! capabilities so the pipeline can run over any backing store; they are
//! implemented for [`Workbook`] and [`Worksheet`].
//!
//! Row and column numbers on these traits are 1-based (A1 = row 1, column 1).

use sheetbind_core::{CellValue, NamedValue, ValidationRule, Workbook, Worksheet};

use crate::error::{Error, Result};

/// Read access to one worksheet
pub trait WorksheetSource {
    /// Extent measured from A1 as `(rows, columns)`, `None` when empty
    fn dimension(&self) -> Option<(u32, u16)>;

    /// Value at a 1-based position; unset cells are [`CellValue::Empty`]
    fn cell_value(&self, row: u32, col: u16) -> Result<CellValue>;

    /// Data-validation rules declared on the worksheet
    fn data_validation_rules(&self) -> &[ValidationRule];
}

/// Write access to one worksheet
pub trait WorksheetSink {
    /// Set the value at a 1-based position
    fn set_cell_value(&mut self, row: u32, col: u16, value: CellValue) -> Result<()>;

    /// Insert `count` empty rows so that the first lands at `position`
    fn insert_rows(&mut self, position: u32, count: u32) -> Result<()>;
}

/// A workbook: worksheets looked up by name plus named ranges
pub trait WorkbookSource {
    /// Worksheet type held by the workbook
    type Sheet: WorksheetSource + WorksheetSink;

    /// Find a worksheet by exact name
    fn worksheet(&self, name: &str) -> Option<&Self::Sheet>;

    /// Find a worksheet by exact name for writing
    fn worksheet_mut(&mut self, name: &str) -> Option<&mut Self::Sheet>;

    /// Every named range with its resolved value
    fn named_ranges(&self) -> Vec<(String, NamedValue)>;
}

fn check_position(row: u32, col: u16) -> Result<(u32, u16)> {
    if row < 1 {
        return Err(Error::Range(format!("row {} is below 1", row)));
    }
    if col < 1 {
        return Err(Error::Range(format!("column {} is below 1", col)));
    }
    Ok((row - 1, col - 1))
}

impl WorksheetSource for Worksheet {
    fn dimension(&self) -> Option<(u32, u16)> {
        Worksheet::dimension(self)
    }

    fn cell_value(&self, row: u32, col: u16) -> Result<CellValue> {
        let (row, col) = check_position(row, col)?;
        Ok(self.get_value_at(row, col))
    }

    fn data_validation_rules(&self) -> &[ValidationRule] {
        self.data_validations()
    }
}

impl WorksheetSink for Worksheet {
    fn set_cell_value(&mut self, row: u32, col: u16, value: CellValue) -> Result<()> {
        let (row, col) = check_position(row, col)?;
        self.set_cell_value_at(row, col, value)?;
        Ok(())
    }

    fn insert_rows(&mut self, position: u32, count: u32) -> Result<()> {
        let (row, _) = check_position(position, 1)?;
        Worksheet::insert_rows(self, row, count)?;
        Ok(())
    }
}

impl WorkbookSource for Workbook {
    type Sheet = Worksheet;

    fn worksheet(&self, name: &str) -> Option<&Worksheet> {
        self.worksheet_by_name(name)
    }

    fn worksheet_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheet_by_name_mut(name)
    }

    fn named_ranges(&self) -> Vec<(String, NamedValue)> {
        self.named_range_values()
    }
}
