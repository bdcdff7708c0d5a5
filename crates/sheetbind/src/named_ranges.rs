//! Named range lookup table
//!
//! List rules reference a named range by identifier. The table resolves
//! those identifiers once per workbook so validation never goes back to
//! the workbook.

use ahash::AHashMap;
use sheetbind_core::{CellValue, NamedValue};

/// Case-insensitive map from named range to its non-empty values
///
/// Only names that resolve to a block of cells are kept. Values are in
/// row-major order.
#[derive(Debug, Clone, Default)]
pub struct NamedRangeTable {
    entries: AHashMap<String, Vec<CellValue>>,
}

impl NamedRangeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from resolved named ranges
    ///
    /// Scalar values (constants, single cells and references that did not
    /// resolve) are skipped.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (String, NamedValue)>,
    {
        let mut entries = AHashMap::new();
        for (name, value) in values {
            match value {
                NamedValue::Array(rows) => {
                    let cells: Vec<CellValue> = rows
                        .into_iter()
                        .flatten()
                        .filter(|v| !v.is_empty())
                        .collect();
                    entries.insert(name.to_lowercase(), cells);
                }
                NamedValue::Scalar(_) => {
                    log::debug!("skipping named range '{}': not a range of cells", name);
                }
            }
        }
        Self { entries }
    }

    /// Values of a named range; a leading `=` on `name` is ignored
    pub fn get(&self, name: &str) -> Option<&[CellValue]> {
        let name = name.strip_prefix('=').unwrap_or(name).trim();
        self.entries.get(&name.to_lowercase()).map(Vec::as_slice)
    }

    /// Check if a named range is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of named ranges
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over lowercase names and their values
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CellValue])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}
