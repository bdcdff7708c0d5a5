//! Read results: records plus validation messages

use std::fmt;

use sheetbind_core::CellAddress;

use crate::error::{Error, Result};

/// Why a cell was reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    /// The value broke the column's rule
    Invalid,
    /// The value could not be converted to the type the rule checks
    TypeMismatch,
}

/// A validation failure for one cell
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetMessage {
    /// Worksheet the cell belongs to
    pub sheet_name: String,
    /// 1-based row number
    pub row: u32,
    /// 1-based column number
    pub column: u16,
    /// Error text configured on the rule
    pub message: String,
    /// Whether the value broke the rule or could not be converted
    pub kind: MessageKind,
}

impl SheetMessage {
    /// Create a message that is not yet tied to a worksheet
    pub fn new(row: u32, column: u16, message: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            sheet_name: String::new(),
            row,
            column,
            message: message.into(),
            kind,
        }
    }

    /// A1 reference of the reported cell, e.g. `B3`
    pub fn cell_reference(&self) -> String {
        let col = self.column.saturating_sub(1);
        format!("{}{}", CellAddress::column_to_letters(col), self.row)
    }
}

impl fmt::Display for SheetMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sheet_name.is_empty() {
            write!(f, "{}: {}", self.cell_reference(), self.message)
        } else {
            write!(f, "{}!{}: {}", self.sheet_name, self.cell_reference(), self.message)
        }
    }
}

/// Records read from one worksheet together with their validation messages
#[derive(Debug, Clone)]
pub struct Sheet<T> {
    name: String,
    records: Vec<T>,
    messages: Vec<SheetMessage>,
}

impl<T> Sheet<T> {
    /// Create a sheet result; the name must not be empty
    pub fn new(name: impl Into<String>, records: Vec<T>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::null_argument("sheet_name"));
        }
        Ok(Self {
            name,
            records,
            messages: Vec::new(),
        })
    }

    /// Worksheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Materialized records, one per data row
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Take the records, dropping the messages
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Validation messages in the order they were found
    pub fn messages(&self) -> &[SheetMessage] {
        &self.messages
    }

    /// Append a message, stamping it with this sheet's name
    pub fn push_message(&mut self, mut message: SheetMessage) {
        message.sheet_name.clone_from(&self.name);
        self.messages.push(message);
    }

    /// Check if no cell failed validation
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages reported for one 1-based row
    pub fn messages_for_row(&self, row: u32) -> impl Iterator<Item = &SheetMessage> {
        self.messages.iter().filter(move |m| m.row == row)
    }
}

impl<T> Extend<SheetMessage> for Sheet<T> {
    fn extend<I: IntoIterator<Item = SheetMessage>>(&mut self, iter: I) {
        for message in iter {
            self.push_message(message);
        }
    }
}
