//! Data validation rules
//!
//! A worksheet declares at most one rule per column. Each rule names the
//! 1-based column it guards, the kind of constraint, and the error text
//! reported when a cell breaks it.
//!
//! ## Example
//!
//! ```rust
//! use sheetbind_core::{RuleKind, ValidationRule, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! // Column B must be one of the values in the "Colors" named range
//! sheet.add_data_validation(
//!     ValidationRule::list(2, "Colors").with_error_message("Pick a listed color"),
//! );
//!
//! let rule = &sheet.data_validations()[0];
//! assert!(matches!(rule.kind, RuleKind::List { .. }));
//! ```

/// Data validation rule for one column
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationRule {
    /// Column this rule applies to (1-based, A = 1)
    pub column: u16,
    /// Type of validation and its parameters
    pub kind: RuleKind,
    /// Allow blank/empty cells (only consulted by list rules)
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_blank: bool,
    /// Error text reported for a failing cell
    #[cfg_attr(feature = "serde", serde(default))]
    pub error_message: String,
}

impl ValidationRule {
    /// Create a rule with no restriction on `column`
    pub fn new(column: u16) -> Self {
        Self {
            column,
            kind: RuleKind::None,
            allow_blank: false,
            error_message: String::new(),
        }
    }

    /// Text length must fall within `min..=max` characters
    pub fn text_length(column: u16, min: i64, max: i64) -> Self {
        Self::new(column).with_kind(RuleKind::TextLength {
            min: Some(min),
            max: Some(max),
        })
    }

    /// Value must be a whole number within `min..=max`
    pub fn whole_number(column: u16, min: i64, max: i64) -> Self {
        Self::new(column).with_kind(RuleKind::WholeNumber {
            min: Some(min),
            max: Some(max),
        })
    }

    /// Value must be one of the entries of a named range
    ///
    /// `source` is the named range identifier; a leading `=` is tolerated.
    pub fn list(column: u16, source: impl Into<String>) -> Self {
        Self::new(column).with_kind(RuleKind::List {
            source: source.into(),
        })
    }

    /// Value must be a date
    pub fn date(column: u16) -> Self {
        Self::new(column).with_kind(RuleKind::Date)
    }

    /// Value must be a time
    pub fn time(column: u16) -> Self {
        Self::new(column).with_kind(RuleKind::Time)
    }

    /// Custom formula validation
    pub fn custom(column: u16, formula: impl Into<String>) -> Self {
        Self::new(column).with_kind(RuleKind::Custom {
            formula: formula.into(),
        })
    }

    /// Replace the rule kind
    pub fn with_kind(mut self, kind: RuleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set whether blank cells are allowed
    pub fn with_allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    /// Set the error message reported for failing cells
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Check if this rule guards the given 1-based column
    pub fn applies_to(&self, column: u16) -> bool {
        self.column == column
    }
}

/// Kinds of data validation
///
/// Bounds are optional because declared rules may leave them unset; an
/// unset bound is reported when the rule is evaluated.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum RuleKind {
    /// No validation (any value allowed)
    #[default]
    None,

    /// Text length constraint, in characters
    TextLength { min: Option<i64>, max: Option<i64> },

    /// Must be a whole number
    WholeNumber { min: Option<i64>, max: Option<i64> },

    /// Must be from a named range
    List {
        /// Named range identifier
        source: String,
    },

    /// Must be a date
    Date,

    /// Must be a time
    Time,

    /// Custom formula validation
    Custom {
        /// Formula that returns TRUE/FALSE
        formula: String,
    },
}
