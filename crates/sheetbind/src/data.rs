//! Extracted cells and rows

use std::borrow::Cow;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use sheetbind_core::CellValue;

use crate::error::{Error, Result};
use crate::mapping::ColumnIndexMapping;

/// One cell read from a worksheet
///
/// Wraps the raw [`CellValue`] and offers the typed conversions record
/// constructors need.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataCell {
    value: CellValue,
}

impl DataCell {
    /// Wrap a raw cell value
    pub fn new(value: impl Into<CellValue>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The raw value
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Unwrap into the raw value
    pub fn into_value(self) -> CellValue {
        self.value
    }

    /// Check if the cell is empty or holds an empty string
    pub fn is_blank(&self) -> bool {
        self.value.is_blank()
    }

    /// Display form of the value; blank cells give `""`
    pub fn as_str(&self) -> Cow<'_, str> {
        match &self.value {
            CellValue::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Convert to an integer
    ///
    /// Numbers are rounded half to even, booleans count as 1 and 0, and
    /// strings are parsed after trimming, either as an integer or as a
    /// number that is then rounded. Everything else is a type error.
    pub fn to_int(&self) -> Result<i64> {
        let converted = match &self.value {
            CellValue::Number(n) => round_to_int(*n),
            CellValue::Boolean(b) => Some(i64::from(*b)),
            CellValue::String(s) => {
                let text = s.as_str().trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(round_to_int))
            }
            CellValue::Empty | CellValue::DateTime(_) => None,
        };
        converted.ok_or_else(|| self.type_error("integer"))
    }

    /// Convert to a floating point number
    ///
    /// Same coercions as [`to_int`](Self::to_int) without the rounding.
    pub fn to_number(&self) -> Result<f64> {
        let converted = match &self.value {
            CellValue::Number(n) => Some(*n),
            CellValue::Boolean(b) => Some(f64::from(u8::from(*b))),
            CellValue::String(s) => s.as_str().trim().parse::<f64>().ok(),
            CellValue::Empty | CellValue::DateTime(_) => None,
        };
        converted
            .filter(|n| n.is_finite())
            .ok_or_else(|| self.type_error("number"))
    }

    fn type_error(&self, expected: &'static str) -> Error {
        Error::Type {
            expected,
            actual: self.value.type_name(),
            value: self.value.to_string(),
        }
    }
}

fn round_to_int(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }
    let rounded = n.round_ties_even();
    // i64::MAX is not representable; 2^63 is the first value out of range
    if rounded < i64::MIN as f64 || rounded >= 9_223_372_036_854_775_808.0 {
        return None;
    }
    Some(rounded as i64)
}

impl fmt::Display for DataCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<CellValue> for DataCell {
    fn from(value: CellValue) -> Self {
        Self { value }
    }
}

/// The cells of one worksheet row, in column order
///
/// Every row of a pass shares the same [`ColumnIndexMapping`], so cells
/// can be looked up by header label as well as by position.
#[derive(Debug, Clone)]
pub struct DataRow {
    cells: Vec<DataCell>,
    mapping: Arc<ColumnIndexMapping>,
}

impl DataRow {
    /// Create a row from its cells and the column mapping of its worksheet
    pub fn new(cells: Vec<DataCell>, mapping: Arc<ColumnIndexMapping>) -> Self {
        Self { cells, mapping }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a 0-based position
    pub fn cell(&self, index: usize) -> Option<&DataCell> {
        self.cells.get(index)
    }

    /// Cell under a column label
    ///
    /// Whitespace in `label` is ignored, so `"Unit Price"` and
    /// `"UnitPrice"` find the same column.
    pub fn get(&self, label: &str) -> Option<&DataCell> {
        self.mapping
            .index_of(label)
            .and_then(|index| self.cells.get(index))
    }

    /// Like [`get`](Self::get), but a missing label is an error
    pub fn column(&self, label: &str) -> Result<&DataCell> {
        self.get(label)
            .ok_or_else(|| Error::NotFound(format!("column '{}'", label)))
    }

    /// All cells
    pub fn cells(&self) -> &[DataCell] {
        &self.cells
    }

    /// The shared column mapping
    pub fn mapping(&self) -> &ColumnIndexMapping {
        &self.mapping
    }

    /// Iterate over the cells
    pub fn iter(&self) -> std::slice::Iter<'_, DataCell> {
        self.cells.iter()
    }
}

impl Index<usize> for DataRow {
    type Output = DataCell;

    fn index(&self, index: usize) -> &DataCell {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a DataRow {
    type Item = &'a DataCell;
    type IntoIter = std::slice::Iter<'a, DataCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
