//! Column label mapping
//!
//! Row 1 of a worksheet names its columns. The mapping built from it lets
//! record constructors look cells up by label instead of position.

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::source::WorksheetSource;

/// Label of every column in row 1, in column order
///
/// A blank header cell is replaced by its 1-based column number, so every
/// column has a label. Fails with a range error on an empty worksheet.
pub fn headings<S: WorksheetSource + ?Sized>(sheet: &S) -> Result<Vec<String>> {
    let (_, columns) = sheet
        .dimension()
        .ok_or_else(|| Error::Range("worksheet has no dimension".into()))?;

    (1..=columns)
        .map(|col| {
            let value = sheet.cell_value(1, col)?;
            Ok(if value.is_blank() {
                col.to_string()
            } else {
                value.to_string()
            })
        })
        .collect()
}

/// Strip all whitespace from a column label
pub fn normalize_label(label: &str) -> String {
    label.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Mapping from column label to 0-based column index
///
/// Keys are unique and the indices run contiguously from 0.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndexMapping {
    labels: Vec<String>,
    indices: AHashMap<String, usize>,
}

impl ColumnIndexMapping {
    /// Build a mapping from header labels, whitespace removed
    ///
    /// Two labels that normalize to the same key are an argument error,
    /// even for readers that only look cells up by position.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mapping = Self::default();
        for label in labels {
            let key = normalize_label(label.as_ref());
            let index = mapping.labels.len();
            if mapping.indices.insert(key.clone(), index).is_some() {
                return Err(Error::Argument(format!("duplicate column label '{}'", key)));
            }
            mapping.labels.push(key);
        }
        Ok(mapping)
    }

    /// Mapping keyed by 1-based column number, for sheets without headers
    pub fn positional(columns: u16) -> Self {
        let labels: Vec<String> = (1..=columns).map(|col| col.to_string()).collect();
        let indices = labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.clone(), index))
            .collect();
        Self { labels, indices }
    }

    /// Build the mapping for a worksheet
    ///
    /// With headers the labels come from row 1; without, the columns are
    /// keyed by number.
    pub fn from_worksheet<S: WorksheetSource + ?Sized>(
        sheet: &S,
        has_headers: bool,
    ) -> Result<Self> {
        if has_headers {
            Self::from_labels(headings(sheet)?)
        } else {
            let (_, columns) = sheet
                .dimension()
                .ok_or_else(|| Error::Range("worksheet has no dimension".into()))?;
            Ok(Self::positional(columns))
        }
    }

    /// Index of the column under `label`, ignoring whitespace
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.indices
            .get(label)
            .or_else(|| self.indices.get(&normalize_label(label)))
            .copied()
    }

    /// Keys in column order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the mapping has no columns
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate as `(key, index)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.as_str(), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetbind_core::Worksheet;

    fn header_sheet() -> Worksheet {
        let mut ws = Worksheet::new("Data");
        ws.set_cell_value("A1", "Order Id").unwrap();
        ws.set_cell_value("C1", 2024.0).unwrap();
        ws.set_cell_value("A2", 1.0).unwrap();
        ws
    }

    #[test]
    fn test_headings_fill_blanks() {
        let ws = header_sheet();
        assert_eq!(headings(&ws).unwrap(), vec!["Order Id", "2", "2024"]);
    }

    #[test]
    fn test_headings_empty_sheet() {
        let ws = Worksheet::new("Empty");
        assert!(matches!(headings(&ws), Err(Error::Range(_))));
    }

    #[test]
    fn test_mapping_from_headers() {
        let mapping = ColumnIndexMapping::from_worksheet(&header_sheet(), true).unwrap();

        assert_eq!(mapping.labels(), &["OrderId", "2", "2024"]);
        assert_eq!(mapping.index_of("OrderId"), Some(0));
        assert_eq!(mapping.index_of("Order Id"), Some(0));
        assert_eq!(mapping.index_of("2024"), Some(2));
        assert_eq!(mapping.index_of("order id"), None);
    }

    #[test]
    fn test_mapping_without_headers() {
        let mapping = ColumnIndexMapping::from_worksheet(&header_sheet(), false).unwrap();

        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.index_of("1"), Some(0));
        assert_eq!(mapping.index_of("3"), Some(2));
        assert_eq!(
            mapping.iter().collect::<Vec<_>>(),
            vec![("1", 0), ("2", 1), ("3", 2)]
        );
    }

    #[test]
    fn test_duplicate_labels() {
        let result = ColumnIndexMapping::from_labels(["Unit Price", "UnitPrice"]);
        assert!(matches!(result, Err(Error::Argument(_))));

        let mut ws = Worksheet::new("Notes");
        ws.set_cell_value("A1", "Notes").unwrap();
        ws.set_cell_value("B1", "Notes").unwrap();
        assert!(ColumnIndexMapping::from_worksheet(&ws, true).is_err());
        assert_eq!(ColumnIndexMapping::from_worksheet(&ws, false).unwrap().len(), 2);
    }
}
