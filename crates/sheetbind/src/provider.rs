//! The sheet provider: read and write typed records over a workbook

use std::collections::BTreeMap;
use std::path::Path;

use sheetbind_core::{CellValue, ValidationRule, Workbook, MAX_ROWS};
use sheetbind_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};

use crate::config::WorksheetConfig;
use crate::data::DataRow;
use crate::error::{Error, Result};
use crate::extract::{data_rows, DataRows};
use crate::named_ranges::NamedRangeTable;
use crate::record::{exported_values, headers, ExportRecord, FromRow};
use crate::sheet::Sheet;
use crate::source::{WorkbookSource, WorksheetSink, WorksheetSource};
use crate::validate::{rules_by_column, validate};

/// Reads typed records out of a workbook's worksheets, validating every
/// cell, and writes records back
///
/// The provider owns its workbook together with the [`NamedRangeTable`]
/// built from it. Replacing the workbook rebuilds the table.
#[derive(Debug, Clone)]
pub struct SheetProvider<W = Workbook> {
    workbook: W,
    named_ranges: NamedRangeTable,
}

impl SheetProvider<Workbook> {
    /// Create a provider over an empty workbook
    pub fn new() -> Self {
        Self::with_workbook(Workbook::empty())
    }

    /// Load a CSV file as a single-worksheet workbook
    ///
    /// The worksheet is named after [`CsvReadOptions::sheet_name`].
    pub fn open_csv<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Self> {
        let worksheet = CsvReader::read_file(path, options)?;
        let mut workbook = Workbook::empty();
        workbook.add_existing_worksheet(worksheet)?;
        Ok(Self::with_workbook(workbook))
    }

    /// Save one worksheet to a CSV file
    pub fn save_csv<P: AsRef<Path>>(
        &self,
        sheet_name: &str,
        path: P,
        options: &CsvWriteOptions,
    ) -> Result<()> {
        let worksheet = self.worksheet(sheet_name)?;
        CsvWriter::write_file(worksheet, path, options)?;
        Ok(())
    }
}

impl Default for SheetProvider<Workbook> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WorkbookSource> SheetProvider<W> {
    /// Create a provider over an existing workbook
    pub fn with_workbook(workbook: W) -> Self {
        let named_ranges = NamedRangeTable::from_values(workbook.named_ranges());
        Self {
            workbook,
            named_ranges,
        }
    }

    /// Replace the workbook and rebuild the named range table
    ///
    /// Passing `None` is an argument error and leaves the provider as it
    /// was.
    pub fn set_workbook(&mut self, workbook: impl Into<Option<W>>) -> Result<()> {
        let workbook = workbook
            .into()
            .ok_or_else(|| Error::null_argument("workbook"))?;
        self.named_ranges = NamedRangeTable::from_values(workbook.named_ranges());
        self.workbook = workbook;
        log::debug!("workbook replaced, {} named ranges", self.named_ranges.len());
        Ok(())
    }

    /// Current workbook
    pub fn workbook(&self) -> &W {
        &self.workbook
    }

    /// Current workbook, mutable
    ///
    /// Call [`refresh_named_ranges`](Self::refresh_named_ranges) after
    /// changing named ranges through this reference.
    pub fn workbook_mut(&mut self) -> &mut W {
        &mut self.workbook
    }

    /// Give up the provider and keep its workbook
    pub fn into_workbook(self) -> W {
        self.workbook
    }

    /// Named range table of the current workbook
    pub fn named_ranges(&self) -> &NamedRangeTable {
        &self.named_ranges
    }

    /// Rebuild the named range table from the current workbook
    pub fn refresh_named_ranges(&mut self) {
        self.named_ranges = NamedRangeTable::from_values(self.workbook.named_ranges());
    }

    /// Read a worksheet into typed records and validate every cell
    ///
    /// Cells that break a rule are reported in the returned sheet's
    /// messages. Errors from any stage abort the read.
    ///
    /// With headers, two header labels that are equal once whitespace is
    /// removed fail the read with an argument error, whatever the record
    /// constructor looks at. Read such sheets with
    /// [`WorksheetConfig::with_headers`] set to `false` and skip row 1.
    pub fn get_sheet_data<T: FromRow>(
        &self,
        sheet_name: &str,
        config: &WorksheetConfig,
    ) -> Result<Sheet<T>> {
        self.get_sheet_data_with(sheet_name, config, T::from_row)
    }

    /// Like [`get_sheet_data`](Self::get_sheet_data), building each record
    /// with `factory`
    pub fn get_sheet_data_with<T, F>(
        &self,
        sheet_name: &str,
        config: &WorksheetConfig,
        factory: F,
    ) -> Result<Sheet<T>>
    where
        F: FnMut(DataRow) -> Result<T>,
    {
        let worksheet = self.worksheet(sheet_name)?;
        let rows = data_rows(worksheet, config.has_headers)?.collect::<Result<Vec<_>>>()?;
        let messages = validate(&rows, &config.rules, &self.named_ranges)?;
        let records = rows.into_iter().map(factory).collect::<Result<Vec<_>>>()?;

        log::debug!(
            "read {} records from '{}' with {} messages",
            records.len(),
            sheet_name,
            messages.len()
        );

        let mut sheet = Sheet::new(sheet_name, records)?;
        sheet.extend(messages);
        Ok(sheet)
    }

    /// Read a worksheet with headers into typed records, without validation
    pub fn extract_data<T: FromRow>(&self, sheet_name: &str) -> Result<Vec<T>> {
        self.data_rows(sheet_name, true)?
            .map(|row| row.and_then(T::from_row))
            .collect()
    }

    /// Lazy pass over the data rows of a worksheet
    pub fn data_rows(
        &self,
        sheet_name: &str,
        has_headers: bool,
    ) -> Result<DataRows<'_, W::Sheet>> {
        data_rows(self.worksheet(sheet_name)?, has_headers)
    }

    /// Rules declared on a worksheet, keyed by 1-based column
    pub fn data_validations(&self, sheet_name: &str) -> Result<BTreeMap<u16, ValidationRule>> {
        let worksheet = self.worksheet(sheet_name)?;
        Ok(rules_by_column(worksheet.data_validation_rules())?
            .into_iter()
            .map(|(column, rule)| (column, rule.clone()))
            .collect())
    }

    /// Write records into an existing worksheet starting at A1
    ///
    /// Each record takes one row, its exported fields laid out left to
    /// right. With `print_headers` a row is inserted above the data and
    /// filled with one label per exported field. Every record is exported
    /// before the worksheet is touched, so an error leaves it unchanged.
    pub fn load_data<T: ExportRecord>(
        &mut self,
        sheet_name: &str,
        records: &[T],
        print_headers: bool,
    ) -> Result<()> {
        if sheet_name.is_empty() {
            return Err(Error::null_argument("sheet_name"));
        }
        let labels = if print_headers { headers::<T>()? } else { Vec::new() };
        let rows = records
            .iter()
            .map(exported_values)
            .collect::<Result<Vec<Vec<CellValue>>>>()?;
        let needed = rows.len() + usize::from(print_headers);
        if needed > MAX_ROWS as usize {
            return Err(Error::Range(format!(
                "{} rows do not fit a worksheet of {} rows",
                needed, MAX_ROWS
            )));
        }

        let worksheet = self
            .workbook
            .worksheet_mut(sheet_name)
            .ok_or_else(|| Error::sheet_not_found(sheet_name))?;

        for (row, values) in (1u32..).zip(rows) {
            for (col, value) in (1u16..).zip(values) {
                worksheet.set_cell_value(row, col, value)?;
            }
        }

        if print_headers {
            worksheet.insert_rows(1, 1)?;
            for (col, label) in (1u16..).zip(labels) {
                worksheet.set_cell_value(1, col, label.into())?;
            }
        }

        log::debug!(
            "wrote {} records to '{}' (headers: {})",
            records.len(),
            sheet_name,
            print_headers
        );
        Ok(())
    }

    fn worksheet(&self, sheet_name: &str) -> Result<&W::Sheet> {
        if sheet_name.is_empty() {
            return Err(Error::null_argument("sheet_name"));
        }
        self.workbook
            .worksheet(sheet_name)
            .ok_or_else(|| Error::sheet_not_found(sheet_name))
    }
}
