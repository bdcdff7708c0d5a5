//! Validation engine
//!
//! Checks every extracted cell against the rule declared for its column.
//! A cell that breaks its rule becomes a [`SheetMessage`]; a rule that
//! cannot be evaluated (unset or negative bounds, unknown named range)
//! aborts the whole run with an [`Error`].

use std::collections::BTreeMap;

use sheetbind_core::{RuleKind, ValidationRule};

use crate::data::{DataCell, DataRow};
use crate::error::{Error, Result};
use crate::named_ranges::NamedRangeTable;
use crate::sheet::{MessageKind, SheetMessage};

/// Rows are reported as if a header row preceded the data
const ROW_OFFSET: usize = 2;

/// Index rules by their 1-based column
///
/// A second rule on the same column is an argument error and column 0 is
/// a range error.
pub fn rules_by_column<'a, I>(rules: I) -> Result<BTreeMap<u16, &'a ValidationRule>>
where
    I: IntoIterator<Item = &'a ValidationRule>,
{
    let mut by_column = BTreeMap::new();
    for rule in rules {
        if rule.column == 0 {
            return Err(Error::Range("validation rule column must be 1 or greater".into()));
        }
        if by_column.insert(rule.column, rule).is_some() {
            return Err(Error::Argument(format!(
                "more than one validation rule for column {}",
                rule.column
            )));
        }
    }
    Ok(by_column)
}

/// Validate rows against per-column rules
///
/// The message for data row `i` (0-based) reports row `i + 2`. Messages
/// are not yet stamped with a sheet name.
pub fn validate(
    rows: &[DataRow],
    rules: &[ValidationRule],
    named_ranges: &NamedRangeTable,
) -> Result<Vec<SheetMessage>> {
    let rules = rules_by_column(rules)?;
    let mut messages = Vec::new();

    if rules.is_empty() {
        return Ok(messages);
    }

    for (offset, row) in rows.iter().enumerate() {
        let row_number = u32::try_from(offset + ROW_OFFSET)
            .map_err(|_| Error::Range(format!("row offset {} is too large", offset)))?;

        for (index, cell) in row.iter().enumerate() {
            let Ok(column) = u16::try_from(index + 1) else {
                break;
            };
            let Some(rule) = rules.get(&column) else {
                continue;
            };

            if let Some(kind) = validate_cell(cell, rule, named_ranges)? {
                log::trace!("row {} column {} failed {:?}", row_number, column, rule.kind);
                messages.push(SheetMessage::new(
                    row_number,
                    column,
                    rule.error_message.clone(),
                    kind,
                ));
            }
        }
    }

    log::debug!(
        "validated {} rows against {} rules: {} messages",
        rows.len(),
        rules.len(),
        messages.len()
    );
    Ok(messages)
}

/// Evaluate one rule against one cell
///
/// Returns `None` when the cell passes.
pub fn validate_cell(
    cell: &DataCell,
    rule: &ValidationRule,
    named_ranges: &NamedRangeTable,
) -> Result<Option<MessageKind>> {
    let valid = match &rule.kind {
        RuleKind::TextLength { min, max } => {
            let (min, max) = bounds(*min, *max)?;
            if min < 0 {
                return Err(Error::negative("min", min));
            }
            if max < 0 {
                return Err(Error::negative("max", max));
            }
            let length = i64::try_from(cell.as_str().chars().count()).unwrap_or(i64::MAX);
            in_range(length, min, max)
        }
        RuleKind::WholeNumber { min, max } => {
            let (min, max) = bounds(*min, *max)?;
            match cell.to_int() {
                Ok(value) => in_range(value, min, max),
                Err(Error::Type { .. }) => return Ok(Some(MessageKind::TypeMismatch)),
                Err(other) => return Err(other),
            }
        }
        RuleKind::List { source } => {
            let values = named_ranges
                .get(source)
                .ok_or_else(|| Error::NotFound(format!("named range '{}'", source)))?;
            if rule.allow_blank {
                true
            } else if cell.is_blank() {
                false
            } else {
                let text = cell.as_str().to_lowercase();
                values.iter().any(|v| v.to_string().to_lowercase() == text)
            }
        }
        RuleKind::Date | RuleKind::Time | RuleKind::Custom { .. } | RuleKind::None => true,
    };

    Ok((!valid).then_some(MessageKind::Invalid))
}

fn bounds(min: Option<i64>, max: Option<i64>) -> Result<(i64, i64)> {
    let min = min.ok_or_else(|| Error::null_argument("min"))?;
    let max = max.ok_or_else(|| Error::null_argument("max"))?;
    Ok((min, max))
}

fn in_range(value: i64, min: i64, max: i64) -> bool {
    value >= min && value <= max
}
