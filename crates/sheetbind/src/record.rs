//! Record contracts
//!
//! [`FromRow`] builds a typed record from an extracted row. [`ExportRecord`]
//! describes how a record is written back: an ordered list of fields, each
//! optionally excluded from export, and one value per field.

use sheetbind_core::CellValue;

use crate::data::DataRow;
use crate::error::{Error, Result};

/// Build a record from one data row
///
/// # Example
///
/// ```rust
/// use sheetbind::{DataRow, FromRow, Result};
///
/// struct Order {
///     item: String,
///     quantity: i64,
/// }
///
/// impl FromRow for Order {
///     fn from_row(row: DataRow) -> Result<Self> {
///         Ok(Order {
///             item: row.column("Item")?.to_string(),
///             quantity: row.column("Quantity")?.to_int()?,
///         })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    /// Construct the record; errors abort the read
    fn from_row(row: DataRow) -> Result<Self>;
}

/// One field of an exported record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportField {
    /// Identifier in PascalCase; the header is derived from it
    pub name: &'static str,
    /// Leave this field out of the worksheet
    pub ignore: bool,
}

impl ExportField {
    /// An exported field
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            ignore: false,
        }
    }

    /// A field that is never written
    pub const fn ignored(name: &'static str) -> Self {
        Self { name, ignore: true }
    }

    /// Header label for this field
    pub fn header(&self) -> Result<String> {
        from_pascal_case(self.name)
    }
}

/// A record that can be written to a worksheet
///
/// [`values`](ExportRecord::values) returns one value per entry of
/// [`fields`](ExportRecord::fields), ignored fields included, in the same
/// order.
pub trait ExportRecord {
    /// Field schema shared by every record of the type
    fn fields() -> &'static [ExportField];

    /// Values of this record, aligned with [`fields`](ExportRecord::fields)
    fn values(&self) -> Vec<CellValue>;
}

/// Header labels of the exported fields of `T`, in order
pub fn headers<T: ExportRecord>() -> Result<Vec<String>> {
    T::fields()
        .iter()
        .filter(|field| !field.ignore)
        .map(ExportField::header)
        .collect()
}

/// Values of the exported fields of one record, in order
///
/// A record whose value count differs from its field count is an argument
/// error.
pub fn exported_values<T: ExportRecord>(record: &T) -> Result<Vec<CellValue>> {
    let fields = T::fields();
    let values = record.values();
    if values.len() != fields.len() {
        return Err(Error::Argument(format!(
            "record has {} values for {} fields",
            values.len(),
            fields.len()
        )));
    }
    Ok(fields
        .iter()
        .zip(values)
        .filter(|(field, _)| !field.ignore)
        .map(|(_, value)| value)
        .collect())
}

/// Split a PascalCase or camelCase identifier into words
///
/// A space goes between an uppercase letter and an uppercase letter that
/// starts a lowercase run (`HTMLParser` -> `HTML Parser`), before an
/// uppercase letter that follows anything else (`UnitPrice` -> `Unit
/// Price`), and between a letter and a following non-letter (`Line2` ->
/// `Line 2`). Only ASCII letters count as letters.
///
/// ```rust
/// use sheetbind::from_pascal_case;
///
/// assert_eq!(from_pascal_case("OrderDate2").unwrap(), "Order Date 2");
/// assert_eq!(from_pascal_case("VATRate").unwrap(), "VAT Rate");
/// ```
pub fn from_pascal_case(identifier: &str) -> Result<String> {
    if identifier.is_empty() {
        return Err(Error::null_argument("identifier"));
    }

    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();

            let acronym_end = prev.is_ascii_uppercase()
                && c.is_ascii_uppercase()
                && next.is_some_and(|n| n.is_ascii_lowercase());
            let word_start = !prev.is_ascii_uppercase() && c.is_ascii_uppercase();
            let letter_end = prev.is_ascii_alphabetic() && !c.is_ascii_alphabetic();

            if acronym_end || word_start || letter_end {
                out.push(' ');
            }
        }
        out.push(c);
    }

    Ok(out)
}
