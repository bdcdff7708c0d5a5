//! Row extraction
//!
//! Turns the cell grid of a worksheet into a lazy sequence of [`DataRow`]s.
//! Each row holds exactly as many cells as the worksheet has columns, read
//! left to right from column 1.

use std::iter::FusedIterator;
use std::sync::Arc;

use crate::data::{DataCell, DataRow};
use crate::error::{Error, Result};
use crate::mapping::ColumnIndexMapping;
use crate::source::WorksheetSource;

/// Lazy iterator over the data rows of a worksheet
///
/// Borrows the worksheet for its whole lifetime. Call [`data_rows`] again
/// for a fresh pass.
#[derive(Debug)]
pub struct DataRows<'a, S: ?Sized> {
    sheet: &'a S,
    mapping: Arc<ColumnIndexMapping>,
    next_row: u64,
    last_row: u64,
    columns: u16,
}

/// Start a pass over the data rows of `sheet`
///
/// With headers the first data row is row 2 and row 1 supplies the column
/// labels; without headers every row is data. An empty worksheet is a
/// range error.
pub fn data_rows<S: WorksheetSource + ?Sized>(
    sheet: &S,
    has_headers: bool,
) -> Result<DataRows<'_, S>> {
    let (rows, columns) = sheet
        .dimension()
        .ok_or_else(|| Error::Range("worksheet has no dimension".into()))?;
    let mapping = ColumnIndexMapping::from_worksheet(sheet, has_headers)?;

    Ok(DataRows {
        sheet,
        mapping: Arc::new(mapping),
        next_row: if has_headers { 2 } else { 1 },
        last_row: u64::from(rows),
        columns,
    })
}

/// Read the cells of one 1-based row
pub fn extract_cells<S: WorksheetSource + ?Sized>(
    sheet: &S,
    row: u32,
    columns: u16,
) -> Result<Vec<DataCell>> {
    if row < 1 {
        return Err(Error::Range(format!("row {} is below 1", row)));
    }
    (1..=columns)
        .map(|col| sheet.cell_value(row, col).map(DataCell::from))
        .collect()
}

impl<'a, S: ?Sized> DataRows<'a, S> {
    /// Column mapping shared by every row of this pass
    pub fn mapping(&self) -> &ColumnIndexMapping {
        &self.mapping
    }
}

impl<'a, S: WorksheetSource + ?Sized> Iterator for DataRows<'a, S> {
    type Item = Result<DataRow>;

    fn next(&mut self) -> Option<Self::Item> {
        // Rows are counted in u64 so a sheet ending at u32::MAX still finishes
        if self.next_row > self.last_row {
            return None;
        }
        let row = u32::try_from(self.next_row).ok()?;
        self.next_row += 1;

        Some(
            extract_cells(self.sheet, row, self.columns)
                .map(|cells| DataRow::new(cells, Arc::clone(&self.mapping))),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_row + 1).saturating_sub(self.next_row);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<'a, S: WorksheetSource + ?Sized> ExactSizeIterator for DataRows<'a, S> {}

impl<'a, S: WorksheetSource + ?Sized> FusedIterator for DataRows<'a, S> {}
