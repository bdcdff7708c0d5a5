//! Worksheet type

use crate::cell::{CellAddress, CellRange, CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::validation::ValidationRule;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
///
/// Cell indices on this type are 0-based, matching [`CellAddress`].
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
    /// Declared data validations, in declaration order
    data_validations: Vec<ValidationRule>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            data_validations: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell value by address string (e.g., "A1")
    pub fn cell(&self, address: &str) -> Result<Option<&CellValue>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(addr.row, addr.col))
    }

    /// Get a cell value by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(row, col)
    }

    /// Get cell value (convenience method)
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Get cell value by indices, [`CellValue::Empty`] when unset
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells.get(row, col).cloned().unwrap_or_default()
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set(row, col, value.into());
        Ok(())
    }

    // === Range Operations ===

    /// Get the used range (bounds of all non-empty cells)
    pub fn used_range(&self) -> Option<CellRange> {
        self.cells
            .used_bounds()
            .map(|(min_row, min_col, max_row, max_col)| {
                CellRange::from_indices(min_row, min_col, max_row, max_col)
            })
    }

    /// Extent of the sheet measured from A1: `(rows, columns)`
    ///
    /// `None` for a sheet without any values. A sheet whose only value is
    /// in C4 has an extent of `(4, 3)`.
    pub fn dimension(&self) -> Option<(u32, u16)> {
        self.cells
            .used_bounds()
            .map(|(_, _, max_row, max_col)| (max_row + 1, max_col + 1))
    }

    /// Read the values of a range, row-major
    pub fn range_values(&self, range: &CellRange) -> Vec<Vec<CellValue>> {
        (range.start.row..=range.end.row)
            .map(|row| {
                (range.start.col..=range.end.col)
                    .map(|col| self.get_value_at(row, col))
                    .collect()
            })
            .collect()
    }

    // === Row Operations ===

    /// Insert `count` empty rows before `row`, shifting existing rows down
    pub fn insert_rows(&mut self, row: u32, count: u32) -> Result<()> {
        if let Some((_, _, max_row, _)) = self.cells.used_bounds() {
            if max_row >= row {
                let last = max_row as u64 + count as u64;
                if last >= MAX_ROWS as u64 {
                    return Err(Error::RowOutOfBounds(
                        last.min(u32::MAX as u64) as u32,
                        MAX_ROWS - 1,
                    ));
                }
            }
        }
        self.cells.insert_rows(row, count);
        Ok(())
    }

    // === Data Validation ===

    /// Add a data validation rule
    pub fn add_data_validation(&mut self, rule: ValidationRule) {
        self.data_validations.push(rule);
    }

    /// Get all data validation rules
    pub fn data_validations(&self) -> &[ValidationRule] {
        &self.data_validations
    }

    /// Get the first rule declared for a 1-based column
    pub fn data_validation_for_column(&self, column: u16) -> Option<&ValidationRule> {
        self.data_validations.iter().find(|r| r.applies_to(column))
    }

    /// Remove a data validation rule by index
    pub fn remove_data_validation(&mut self, index: usize) -> Option<ValidationRule> {
        if index < self.data_validations.len() {
            Some(self.data_validations.remove(index))
        } else {
            None
        }
    }

    /// Clear all data validation rules
    pub fn clear_data_validations(&mut self) {
        self.data_validations.clear();
    }

    // === Internal ===

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet has no values
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
