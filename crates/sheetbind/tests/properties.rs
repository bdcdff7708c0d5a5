//! Property tests for extraction counts and rule boundaries

use proptest::prelude::*;
use sheetbind::validate::validate_cell;
use sheetbind::{
    data_rows, validate, CellValue, DataCell, MessageKind, NamedRangeTable, NamedValue,
    ValidationRule, Worksheet,
};

fn filled_sheet(rows: u32, cols: u16) -> Worksheet {
    let mut ws = Worksheet::new("Grid");
    // The bottom-right corner fixes the extent; the rest stays sparse
    ws.set_cell_value_at(rows - 1, cols - 1, "x").unwrap();
    ws.set_cell_value_at(0, 0, "h").unwrap();
    ws
}

fn colors() -> NamedRangeTable {
    NamedRangeTable::from_values(vec![(
        "Colors".to_string(),
        NamedValue::Array(vec![
            vec![CellValue::from("Red")],
            vec![CellValue::from("Green")],
            vec![CellValue::from("Blue")],
        ]),
    )])
}

proptest! {
    #[test]
    fn extraction_counts(rows in 1u32..40, cols in 1u16..12) {
        let ws = filled_sheet(rows, cols);

        let with_headers: Vec<_> = data_rows(&ws, true).unwrap().collect();
        prop_assert_eq!(with_headers.len() as u32, rows - 1);

        let without: Vec<_> = data_rows(&ws, false).unwrap().collect();
        prop_assert_eq!(without.len() as u32, rows);
        for row in without {
            prop_assert_eq!(row.unwrap().len(), cols as usize);
        }
    }

    #[test]
    fn text_length_bounds(text in "[a-z]{0,20}", min in 0i64..15, span in 0i64..10) {
        let max = min + span;
        let rule = ValidationRule::text_length(1, min, max);
        let table = NamedRangeTable::new();
        let outcome = validate_cell(&DataCell::new(text.as_str()), &rule, &table).unwrap();

        let len = text.len() as i64;
        let expected = (len < min || len > max).then_some(MessageKind::Invalid);
        prop_assert_eq!(outcome, expected);
    }

    #[test]
    fn whole_number_bounds(value in -1000i64..1000, min in -500i64..500, span in 0i64..500) {
        let max = min + span;
        let rule = ValidationRule::whole_number(1, min, max);
        let table = NamedRangeTable::new();
        let outcome = validate_cell(&DataCell::new(value), &rule, &table).unwrap();

        prop_assert_eq!(outcome.is_none(), min <= value && value <= max);
    }

    #[test]
    fn list_membership(text in prop::sample::select(vec!["red", "RED", "Green", "bLuE", "pink", ""])) {
        let table = colors();
        let strict = ValidationRule::list(1, "Colors");
        let lenient = ValidationRule::list(1, "Colors").with_allow_blank(true);
        let cell = DataCell::new(text);

        let listed = ["red", "green", "blue"].contains(&text.to_lowercase().as_str());
        prop_assert_eq!(validate_cell(&cell, &strict, &table).unwrap().is_none(), listed);
        prop_assert!(validate_cell(&cell, &lenient, &table).unwrap().is_none());
    }

    #[test]
    fn message_rows_follow_offset(lengths in prop::collection::vec(0usize..6, 1..30)) {
        let mut ws = Worksheet::new("Lengths");
        ws.set_cell_value("A1", "Code").unwrap();
        for (i, len) in lengths.iter().enumerate() {
            ws.set_cell_value_at(i as u32 + 1, 0, "a".repeat(*len)).unwrap();
        }
        let rows: Vec<_> = data_rows(&ws, true).unwrap().collect::<Result<_, _>>().unwrap();
        let rules = [ValidationRule::text_length(1, 1, 3)];

        let messages = validate(&rows, &rules, &NamedRangeTable::new()).unwrap();
        let expected: Vec<u32> = lengths
            .iter()
            .enumerate()
            .filter(|(_, len)| !(1..=3).contains(*len))
            .map(|(i, _)| i as u32 + 2)
            .collect();
        prop_assert_eq!(messages.iter().map(|m| m.row).collect::<Vec<_>>(), expected);
    }
}
