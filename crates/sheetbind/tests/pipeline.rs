//! End-to-end tests for the read path (worksheet -> rows -> validation -> records)

use pretty_assertions::assert_eq;
use sheetbind::prelude::*;
use sheetbind::Error;

#[derive(Debug, PartialEq)]
struct Shirt {
    sku: String,
    color: String,
    size: i64,
}

impl FromRow for Shirt {
    fn from_row(row: DataRow) -> sheetbind::Result<Self> {
        Ok(Shirt {
            sku: row.column("Sku")?.to_string(),
            color: row.column("Color")?.to_string(),
            size: row.column("Size")?.to_int().unwrap_or_default(),
        })
    }
}

/// Workbook with a "Shirts" sheet and a "Lists" sheet backing a named range
fn shirt_workbook() -> Workbook {
    let mut wb = Workbook::new();
    wb.add_worksheet_with_name("Lists").unwrap();
    let lists = wb.worksheet_by_name_mut("Lists").unwrap();
    lists.set_cell_value("A1", "Red").unwrap();
    lists.set_cell_value("A2", "Navy").unwrap();
    lists.set_cell_value("A4", "White").unwrap();
    wb.define_name("Colors", "Lists!$A$1:$A$4").unwrap();
    wb.define_name("DefaultSize", "40").unwrap();

    wb.add_worksheet_with_name("Shirts").unwrap();
    let shirts = wb.worksheet_by_name_mut("Shirts").unwrap();
    let rows: [(&str, &str, CellValue); 4] = [
        ("TS-001", "red", CellValue::Number(38.0)),
        ("TS-0002", "Green", CellValue::Number(44.0)),
        ("TS-003", "", CellValue::from("XL")),
        ("TS-004", "WHITE", CellValue::from("42")),
    ];
    shirts.set_cell_value("A1", "Sku").unwrap();
    shirts.set_cell_value("B1", "Color").unwrap();
    shirts.set_cell_value("C1", "Size").unwrap();
    for (i, (sku, color, size)) in rows.into_iter().enumerate() {
        let row = i as u32 + 1;
        shirts.set_cell_value_at(row, 0, sku).unwrap();
        shirts.set_cell_value_at(row, 1, color).unwrap();
        shirts.set_cell_value_at(row, 2, size).unwrap();
    }
    shirts.add_data_validation(
        ValidationRule::text_length(1, 6, 6).with_error_message("SKU has 6 characters"),
    );
    shirts.add_data_validation(
        ValidationRule::list(2, "Colors").with_error_message("Unknown color"),
    );
    shirts.add_data_validation(
        ValidationRule::whole_number(3, 36, 46).with_error_message("Size 36 to 46"),
    );
    wb
}

/// Every rule kind reports against the right row and column
#[test]
fn test_read_and_validate() {
    let provider = SheetProvider::with_workbook(shirt_workbook());
    let config =
        WorksheetConfig::from_worksheet(provider.workbook().worksheet_by_name("Shirts").unwrap());

    let sheet: Sheet<Shirt> = provider.get_sheet_data("Shirts", &config).unwrap();

    assert_eq!(sheet.records().len(), 4);
    assert_eq!(
        sheet.records()[3],
        Shirt {
            sku: "TS-004".into(),
            color: "WHITE".into(),
            size: 42,
        }
    );

    let reported: Vec<(u32, u16, &str, MessageKind)> = sheet
        .messages()
        .iter()
        .map(|m| (m.row, m.column, m.message.as_str(), m.kind))
        .collect();
    assert_eq!(
        reported,
        vec![
            (3, 1, "SKU has 6 characters", MessageKind::Invalid),
            (3, 2, "Unknown color", MessageKind::Invalid),
            (4, 2, "Unknown color", MessageKind::Invalid),
            (4, 3, "Size 36 to 46", MessageKind::TypeMismatch),
        ]
    );
    assert!(sheet.messages().iter().all(|m| m.sheet_name == "Shirts"));
}

/// Allowing blanks on a list rule accepts any value at all
#[test]
fn test_list_allow_blank() {
    let provider = SheetProvider::with_workbook(shirt_workbook());
    let config =
        WorksheetConfig::new().with_rule(ValidationRule::list(2, "colors").with_allow_blank(true));

    let sheet: Sheet<Shirt> = provider.get_sheet_data("Shirts", &config).unwrap();
    assert!(sheet.is_valid());
}

/// Three data rows: 5, 15 and "abc" against a whole number rule of 1 to 10
#[test]
fn test_whole_number_scenario() {
    let mut wb = Workbook::new();
    let ws = wb.worksheet_mut(0).unwrap();
    ws.set_cell_value("A1", "Amount").unwrap();
    ws.set_cell_value("A2", 5.0).unwrap();
    ws.set_cell_value("A3", 15.0).unwrap();
    ws.set_cell_value("A4", "abc").unwrap();

    let provider = SheetProvider::with_workbook(wb);
    let config = WorksheetConfig::new()
        .with_rule(ValidationRule::whole_number(1, 1, 10).with_error_message("1 to 10"));
    let sheet = provider
        .get_sheet_data_with("Sheet1", &config, |row| Ok(row[0].to_string()))
        .unwrap();

    assert_eq!(sheet.records(), &["5", "15", "abc"]);
    let reported: Vec<(u32, u16, MessageKind)> = sheet
        .messages()
        .iter()
        .map(|m| (m.row, m.column, m.kind))
        .collect();
    assert_eq!(
        reported,
        vec![(3, 1, MessageKind::Invalid), (4, 1, MessageKind::TypeMismatch)]
    );
}

/// Without headers every row is data, but rows are still reported from 2
#[test]
fn test_headerless_rows_keep_offset() {
    let mut wb = Workbook::new();
    let ws = wb.worksheet_mut(0).unwrap();
    ws.set_cell_value("A1", "toolong").unwrap();
    ws.set_cell_value("A2", "ok").unwrap();

    let provider = SheetProvider::with_workbook(wb);
    let config = WorksheetConfig::new()
        .with_headers(false)
        .with_rule(ValidationRule::text_length(1, 0, 3));
    let sheet = provider
        .get_sheet_data_with("Sheet1", &config, |row| Ok(row.len()))
        .unwrap();

    assert_eq!(sheet.records(), &[1, 1]);
    assert_eq!(sheet.messages().len(), 1);
    assert_eq!(sheet.messages()[0].row, 2);
    assert_eq!(sheet.messages()[0].message, "");
}

/// Errors abort the read instead of producing messages
#[test]
fn test_pipeline_errors() {
    let mut provider = SheetProvider::with_workbook(shirt_workbook());

    assert!(matches!(provider.set_workbook(None), Err(Error::Argument(_))));
    assert!(matches!(
        provider.get_sheet_data::<Shirt>("MissingSheet", &WorksheetConfig::new()),
        Err(Error::NotFound(_))
    ));

    let unknown_range = WorksheetConfig::new().with_rule(ValidationRule::list(2, "Sizes"));
    assert!(matches!(
        provider.get_sheet_data::<Shirt>("Shirts", &unknown_range),
        Err(Error::NotFound(_))
    ));

    let scalar_range = WorksheetConfig::new().with_rule(ValidationRule::list(2, "DefaultSize"));
    assert!(matches!(
        provider.get_sheet_data::<Shirt>("Shirts", &scalar_range),
        Err(Error::NotFound(_))
    ));

    let unset = WorksheetConfig::new().with_rule(ValidationRule::new(3).with_kind(
        RuleKind::WholeNumber {
            min: Some(1),
            max: None,
        },
    ));
    assert!(matches!(
        provider.get_sheet_data::<Shirt>("Shirts", &unset),
        Err(Error::Argument(_))
    ));

    let failing_factory = provider.get_sheet_data_with("Shirts", &WorksheetConfig::new(), |row| {
        row.column("Price").map(|cell| cell.to_string())
    });
    assert!(matches!(failing_factory, Err(Error::NotFound(_))));
}

/// Lazy rows and declared rules are available without running validation
#[test]
fn test_supplementary_reads() {
    let provider = SheetProvider::with_workbook(shirt_workbook());

    let rows = provider.data_rows("Shirts", true).unwrap();
    assert_eq!(rows.mapping().labels(), &["Sku", "Color", "Size"]);
    assert_eq!(rows.len(), 4);

    let shirts: Vec<Shirt> = provider.extract_data("Shirts").unwrap();
    assert_eq!(shirts[0].sku, "TS-001");

    let rules = provider.data_validations("Shirts").unwrap();
    assert_eq!(rules.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(matches!(rules[&2].kind, RuleKind::List { .. }));
}
