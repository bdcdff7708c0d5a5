//! Named range definitions
//!
//! A named range binds a workbook-level identifier to a block of cells,
//! a single cell, or a constant.
//!
//! # Example
//!
//! ```rust
//! use sheetbind_core::Workbook;
//!
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet_with_name("Lists").unwrap();
//! workbook.define_name("Colors", "Lists!$A$1:$A$3").unwrap();
//! assert!(workbook.named_ranges().get("colors").is_some());
//! ```

use ahash::AHashMap;

use crate::cell::CellValue;

/// A named range definition
#[derive(Debug, Clone)]
pub struct NamedRange {
    /// The name as declared (e.g. "Colors"); lookups ignore case
    pub name: String,
    /// What the name refers to, e.g.:
    /// - "Lists!$A$1:$A$5" - range
    /// - "Lists!$B$1" - single cell
    /// - "0.0725" - constant
    pub refers_to: String,
    /// Optional comment/description
    pub comment: Option<String>,
}

impl NamedRange {
    /// Create a new named range
    pub fn new(name: impl Into<String>, refers_to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            refers_to: refers_to.into(),
            comment: None,
        }
    }

    /// Set a comment for this named range
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Get the refers_to expression without a leading `=`
    pub fn expression(&self) -> &str {
        self.refers_to.strip_prefix('=').unwrap_or(&self.refers_to)
    }
}

/// The resolved value of a named range
#[derive(Debug, Clone, PartialEq)]
pub enum NamedValue {
    /// A block of more than one cell, row-major
    Array(Vec<Vec<CellValue>>),
    /// A single cell, a constant, or a reference that did not resolve
    Scalar(CellValue),
}

impl NamedValue {
    /// Get the two-dimensional block, if this value is one
    pub fn as_array(&self) -> Option<&[Vec<CellValue>]> {
        match self {
            NamedValue::Array(rows) => Some(rows),
            NamedValue::Scalar(_) => None,
        }
    }
}

/// Collection of named ranges with case-insensitive lookup
#[derive(Debug, Default, Clone)]
pub struct NamedRangeCollection {
    /// Keyed by lowercase name
    ranges: AHashMap<String, NamedRange>,
}

impl NamedRangeCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new named range
    ///
    /// Returns an error if the name (ignoring case) already exists
    pub fn define(&mut self, range: NamedRange) -> Result<(), String> {
        let key = range.name.to_lowercase();

        if self.ranges.contains_key(&key) {
            return Err(format!("Named range '{}' already exists", range.name));
        }

        self.ranges.insert(key, range);
        Ok(())
    }

    /// Define or update a named range
    pub fn define_or_update(&mut self, range: NamedRange) {
        self.ranges.insert(range.name.to_lowercase(), range);
    }

    /// Get a named range by name
    pub fn get(&self, name: &str) -> Option<&NamedRange> {
        self.ranges.get(&name.to_lowercase())
    }

    /// Remove a named range
    pub fn remove(&mut self, name: &str) -> Option<NamedRange> {
        self.ranges.remove(&name.to_lowercase())
    }

    /// Iterate over all named ranges
    pub fn iter(&self) -> impl Iterator<Item = &NamedRange> {
        self.ranges.values()
    }

    /// Get the number of named ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_range_expression() {
        let nr = NamedRange::new("Total", "=Sheet1!$A$1:$A$10");
        assert_eq!(nr.expression(), "Sheet1!$A$1:$A$10");

        let nr = NamedRange::new("Rate", "0.05").with_comment("tax");
        assert_eq!(nr.expression(), "0.05");
        assert_eq!(nr.comment.as_deref(), Some("tax"));
    }

    #[test]
    fn test_case_insensitive() {
        let mut coll = NamedRangeCollection::new();
        coll.define(NamedRange::new("TaxRate", "0.05")).unwrap();

        assert!(coll.get("taxrate").is_some());
        assert!(coll.get("TAXRATE").is_some());
        assert!(coll.define(NamedRange::new("TAXRATE", "0.10")).is_err());

        coll.define_or_update(NamedRange::new("TAXRATE", "0.10"));
        assert_eq!(coll.len(), 1);
        assert_eq!(coll.get("TaxRate").unwrap().refers_to, "0.10");

        assert!(coll.remove("taxRate").is_some());
        assert!(coll.is_empty());
    }

    #[test]
    fn test_named_value_as_array() {
        let array = NamedValue::Array(vec![vec![CellValue::from("a")]]);
        assert_eq!(array.as_array().map(|rows| rows.len()), Some(1));
        assert!(NamedValue::Scalar(CellValue::Empty).as_array().is_none());
    }
}
