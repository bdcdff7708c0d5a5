//! Workbook type - the main document structure

use crate::cell::{CellRange, CellValue};
use crate::error::{Error, Result};
use crate::named_range::{NamedRange, NamedRangeCollection, NamedValue};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// A workbook contains worksheets and workbook-level named ranges.
#[derive(Debug, Clone)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Named ranges (defined names)
    named_ranges: NamedRangeCollection,
}

impl Workbook {
    /// Create a new empty workbook with one worksheet
    pub fn new() -> Self {
        let mut wb = Self::empty();
        wb.worksheets.push(Worksheet::new("Sheet1"));
        wb
    }

    /// Create an empty workbook with no worksheets
    pub fn empty() -> Self {
        Self {
            worksheets: Vec::new(),
            named_ranges: NamedRangeCollection::new(),
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name (exact match)
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a mutable worksheet by name (exact match)
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|ws| ws.name() == name)
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new worksheet with specified name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.validate_sheet_name(name, None)?;

        let index = self.worksheets.len();
        self.worksheets.push(Worksheet::new(name));
        Ok(index)
    }

    /// Add an existing worksheet to the workbook
    pub fn add_existing_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        self.validate_sheet_name(worksheet.name(), None)?;
        let index = self.worksheets.len();
        self.worksheets.push(worksheet);
        Ok(index)
    }

    /// Remove a worksheet by name
    pub fn remove_worksheet(&mut self, name: &str) -> Result<Worksheet> {
        let index = self
            .sheet_index(name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))?;
        Ok(self.worksheets.remove(index))
    }

    /// Rename a worksheet
    pub fn rename_worksheet(&mut self, name: &str, new_name: &str) -> Result<()> {
        let index = self
            .sheet_index(name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))?;
        self.validate_sheet_name(new_name, Some(index))?;
        self.worksheets[index].set_name(new_name);
        Ok(())
    }

    // ==================== Named Ranges ====================

    /// Define a new named range
    ///
    /// # Example
    /// ```
    /// use sheetbind_core::Workbook;
    ///
    /// let mut wb = Workbook::new();
    /// wb.define_name("TaxRate", "Sheet1!$B$1").unwrap();
    /// assert!(wb.define_name("taxrate", "0.05").is_err());
    /// ```
    pub fn define_name(&mut self, name: &str, refers_to: &str) -> Result<()> {
        if name.trim().is_empty() || name.contains(char::is_whitespace) {
            return Err(Error::InvalidName(format!("'{}' is not a valid name", name)));
        }
        self.named_ranges
            .define(NamedRange::new(name, refers_to))
            .map_err(Error::InvalidName)
    }

    /// Remove a named range
    pub fn remove_name(&mut self, name: &str) -> Option<NamedRange> {
        self.named_ranges.remove(name)
    }

    /// Get the named range collection (read-only)
    pub fn named_ranges(&self) -> &NamedRangeCollection {
        &self.named_ranges
    }

    /// Resolve what a named range currently evaluates to
    ///
    /// Sheet-qualified references of more than one cell resolve to
    /// [`NamedValue::Array`]. Single cells, constants and references to
    /// missing sheets resolve to [`NamedValue::Scalar`].
    pub fn resolve_name(&self, range: &NamedRange) -> NamedValue {
        let expression = range.expression();

        let Ok((sheet, cells)) = CellRange::parse_qualified(expression) else {
            return NamedValue::Scalar(constant_value(expression));
        };

        let worksheet = sheet.as_deref().and_then(|name| self.worksheet_by_name(name));
        match worksheet {
            None => NamedValue::Scalar(CellValue::Empty),
            Some(ws) if cells.cell_count() == 1 => {
                NamedValue::Scalar(ws.get_value_at(cells.start.row, cells.start.col))
            }
            Some(ws) => NamedValue::Array(ws.range_values(&cells)),
        }
    }

    /// Resolve every named range, as `(name, value)` pairs
    pub fn named_range_values(&self) -> Vec<(String, NamedValue)> {
        self.named_ranges
            .iter()
            .map(|range| (range.name.clone(), self.resolve_name(range)))
            .collect()
    }

    /// Validate a sheet name, optionally excluding a sheet from duplicate check
    fn validate_sheet_name(&self, name: &str, exclude_index: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        // Duplicate check is case-insensitive
        let name_lower = name.to_lowercase();
        let duplicate = self
            .worksheets
            .iter()
            .enumerate()
            .any(|(i, ws)| Some(i) != exclude_index && ws.name().to_lowercase() == name_lower);
        if duplicate {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

fn constant_value(expression: &str) -> CellValue {
    let text = expression.trim();
    if let Ok(n) = text.parse::<f64>() {
        return CellValue::Number(n);
    }
    match text.to_uppercase().as_str() {
        "TRUE" => return CellValue::Boolean(true),
        "FALSE" => return CellValue::Boolean(false),
        _ => {}
    }
    let unquoted = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    CellValue::string(unquoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn workbook_with_lists() -> Workbook {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("Lists").unwrap();
        let lists = wb.worksheet_by_name_mut("Lists").unwrap();
        lists.set_cell_value("A1", "Red").unwrap();
        lists.set_cell_value("A2", "Green").unwrap();
        lists.set_cell_value("B1", 7.0).unwrap();
        wb
    }

    #[test]
    fn test_new_workbook() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.worksheet(0).unwrap().name(), "Sheet1");
        assert!(Workbook::empty().is_empty());
    }

    #[test]
    fn test_sheet_names() {
        let mut wb = Workbook::new();

        assert!(wb.add_worksheet_with_name("SHEET1").is_err());
        assert!(wb.add_worksheet_with_name("").is_err());
        assert!(wb.add_worksheet_with_name("Sheet/1").is_err());
        assert!(wb.add_worksheet_with_name(&"A".repeat(MAX_SHEET_NAME_LEN + 1)).is_err());

        assert_eq!(wb.add_worksheet_with_name("Data").unwrap(), 1);
        wb.rename_worksheet("Data", "Orders").unwrap();
        assert!(wb.worksheet_by_name("Orders").is_some());
        assert!(wb.worksheet_by_name("Data").is_none());

        let removed = wb.remove_worksheet("Orders").unwrap();
        assert_eq!(removed.name(), "Orders");
        assert!(matches!(
            wb.remove_worksheet("Orders"),
            Err(Error::SheetNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_range_name() {
        let mut wb = workbook_with_lists();
        wb.define_name("Colors", "Lists!$A$1:$A$3").unwrap();

        let range = wb.named_ranges().get("colors").unwrap();
        assert_eq!(
            wb.resolve_name(range),
            NamedValue::Array(vec![
                vec![CellValue::from("Red")],
                vec![CellValue::from("Green")],
                vec![CellValue::Empty],
            ])
        );
    }

    #[test]
    fn test_resolve_scalar_names() {
        let mut wb = workbook_with_lists();
        wb.define_name("Single", "Lists!$B$1").unwrap();
        wb.define_name("Rate", "0.25").unwrap();
        wb.define_name("Broken", "Missing!A1:A4").unwrap();

        let resolve = |name: &str| wb.resolve_name(wb.named_ranges().get(name).unwrap());
        assert_eq!(resolve("Single"), NamedValue::Scalar(CellValue::Number(7.0)));
        assert_eq!(resolve("Rate"), NamedValue::Scalar(CellValue::Number(0.25)));
        assert_eq!(resolve("Broken"), NamedValue::Scalar(CellValue::Empty));
    }

    #[test]
    fn test_define_name_rejects_blank() {
        let mut wb = Workbook::new();
        assert!(matches!(wb.define_name(" ", "A1"), Err(Error::InvalidName(_))));
        assert!(matches!(
            wb.define_name("Two words", "A1"),
            Err(Error::InvalidName(_))
        ));
        assert_eq!(wb.named_range_values().len(), 0);
    }
}
