//! Error types for sheetbind

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Text used when a required value is missing or empty
pub(crate) const NULL_VALUE: &str = "Value cannot be null";

/// Text used when a count or bound is negative
pub(crate) const NEGATIVE_VALUE: &str = "Value must larger or equal than zero";

/// Text used when a worksheet lookup fails
pub(crate) const SHEET_NOT_EXIST: &str = "Worksheet does not exist in workbook";

/// Errors raised by the extraction, validation and write pipeline
///
/// Cells that break a validation rule are not errors; they are reported as
/// [`SheetMessage`](crate::SheetMessage) values. An `Error` aborts the whole
/// operation and no partial result is returned.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was empty, duplicated or left unset
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// A value fell outside its allowed domain
    #[error("Out of range: {0}")]
    Range(String),

    /// A worksheet or named range could not be resolved
    #[error("Not found: {0}")]
    NotFound(String),

    /// A cell value could not be converted to the requested type
    #[error("Cannot convert {actual} value '{value}' to {expected}")]
    Type {
        expected: &'static str,
        actual: &'static str,
        value: String,
    },

    /// Error from the in-memory workbook model
    #[error(transparent)]
    Core(#[from] sheetbind_core::Error),

    /// Error while reading or writing CSV
    #[error(transparent)]
    Csv(#[from] sheetbind_csv::CsvError),
}

impl Error {
    pub(crate) fn null_argument(name: &str) -> Self {
        Error::Argument(format!("{}: {}", name, NULL_VALUE))
    }

    pub(crate) fn negative(name: &str, value: i64) -> Self {
        Error::Range(format!("{}: {} (got {})", name, NEGATIVE_VALUE, value))
    }

    pub(crate) fn sheet_not_found(name: &str) -> Self {
        Error::NotFound(format!("{}: '{}'", SHEET_NOT_EXIST, name))
    }
}
