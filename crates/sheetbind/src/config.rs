//! Per-worksheet read configuration

use sheetbind_core::ValidationRule;

use crate::source::WorksheetSource;

/// How a worksheet is read and which rules its cells are checked against
///
/// With the `serde` feature enabled a config can be loaded from JSON or
/// any other serde format:
///
/// ```json
/// { "has_headers": true,
///   "rules": [{ "column": 1, "kind": { "type": "wholeNumber", "min": 1, "max": 10 } }] }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorksheetConfig {
    /// Validation rules, at most one per column
    pub rules: Vec<ValidationRule>,
    /// Row 1 holds column labels rather than data
    pub has_headers: bool,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            has_headers: true,
        }
    }
}

impl WorksheetConfig {
    /// Config with headers and no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Config seeded with the rules declared on a worksheet
    pub fn from_worksheet<S: WorksheetSource + ?Sized>(sheet: &S) -> Self {
        Self {
            rules: sheet.data_validation_rules().to_vec(),
            ..Self::default()
        }
    }

    /// Add a rule
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set whether row 1 holds column labels
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetbind_core::Worksheet;

    #[test]
    fn test_defaults() {
        let config = WorksheetConfig::new();
        assert!(config.has_headers);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_from_worksheet() {
        let mut ws = Worksheet::new("Data");
        ws.add_data_validation(ValidationRule::list(2, "Colors"));

        let config = WorksheetConfig::from_worksheet(&ws)
            .with_rule(ValidationRule::whole_number(1, 0, 9))
            .with_headers(false);
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[0], ValidationRule::list(2, "Colors"));
        assert!(!config.has_headers);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: WorksheetConfig = serde_json::from_str(
            r#"{"rules": [{"column": 1, "kind": {"type": "wholeNumber", "min": 1, "max": 10}}]}"#,
        )
        .unwrap();
        assert!(config.has_headers);
        assert_eq!(config.rules, vec![ValidationRule::whole_number(1, 1, 10)]);
    }
}
