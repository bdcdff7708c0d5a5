//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use sheetbind_core::{CellValue, Error as CoreError, Worksheet, MAX_COLS};

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV file into a worksheet
    ///
    /// The file handle is dropped before this returns, on success or error.
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let path = path.as_ref();
        log::debug!("reading worksheet '{}' from {}", options.sheet_name, path.display());
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a worksheet
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut worksheet = Worksheet::new(options.sheet_name.as_str());
        let mut row_idx = 0u32;
        let mut header_width = None;

        if options.has_header {
            let headers = csv_reader.headers()?.clone();
            for (col, value) in headers.iter().enumerate() {
                let value = if value.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::string(value)
                };
                worksheet.set_cell_value_at(row_idx, column_index(col)?, value)?;
            }
            header_width = Some(headers.len());
            row_idx += 1;
        }

        for result in csv_reader.records() {
            let record = result?;

            if let Some(width) = header_width {
                if record.len() > width {
                    log::warn!(
                        "row {} has {} fields but the header has {}",
                        row_idx + 1,
                        record.len(),
                        width
                    );
                }
            }

            for (col, field) in record.iter().enumerate() {
                let value = if options.auto_detect_types {
                    Self::detect_type(field)
                } else if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::string(field)
                };

                worksheet.set_cell_value_at(row_idx, column_index(col)?, value)?;
            }

            row_idx += 1;
        }

        Ok(worksheet)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let field = field.trim();

        if field.is_empty() {
            return CellValue::Empty;
        }

        if field.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if field.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        // f64 parsing also accepts "inf" and "NaN"; those stay text
        if field.chars().any(|c| c.is_ascii_digit()) {
            if let Ok(n) = field.parse::<f64>() {
                return CellValue::Number(n);
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(field, "%Y-%m-%d %H:%M:%S") {
                return CellValue::DateTime(dt);
            }
            if let Ok(date) = NaiveDate::parse_from_str(field, "%Y-%m-%d") {
                return CellValue::from(date);
            }
        }

        CellValue::string(field)
    }
}

fn column_index(col: usize) -> CsvResult<u16> {
    u16::try_from(col)
        .ok()
        .filter(|c| *c < MAX_COLS)
        .ok_or_else(|| CoreError::ColumnOutOfBounds(u16::MAX, MAX_COLS - 1).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_with_header() {
        let data = "Name,Qty,Since\nWidget,5,2024-03-01\nGadget,,\n";
        let ws = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(ws.name(), "Sheet1");
        assert_eq!(ws.dimension(), Some((3, 3)));
        assert_eq!(ws.get_value("A1").unwrap(), CellValue::from("Name"));
        assert_eq!(ws.get_value("B2").unwrap(), CellValue::Number(5.0));
        assert_eq!(
            ws.get_value("C2").unwrap(),
            CellValue::from(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert!(ws.get_value("B3").unwrap().is_empty());
    }

    #[test]
    fn test_header_cells_stay_text() {
        let data = "2024,true\n1,false\n";
        let ws = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(ws.get_value("A1").unwrap(), CellValue::from("2024"));
        assert_eq!(ws.get_value("B1").unwrap(), CellValue::from("true"));
        assert_eq!(ws.get_value("B2").unwrap(), CellValue::Boolean(false));
    }

    #[test]
    fn test_read_without_detection() {
        let options = CsvReadOptions {
            has_header: false,
            auto_detect_types: false,
            ..CsvReadOptions::default()
        }
        .with_sheet_name("Raw");
        let ws = CsvReader::read("7;x\n".as_bytes(), &CsvReadOptions { delimiter: b';', ..options })
            .unwrap();

        assert_eq!(ws.name(), "Raw");
        assert_eq!(ws.get_value("A1").unwrap(), CellValue::from("7"));
        assert_eq!(ws.get_value("B1").unwrap(), CellValue::from("x"));
    }

    #[test]
    fn test_detect_type() {
        assert_eq!(CsvReader::detect_type(" 12 "), CellValue::Number(12.0));
        assert_eq!(CsvReader::detect_type("-0.5"), CellValue::Number(-0.5));
        assert_eq!(CsvReader::detect_type("TRUE"), CellValue::Boolean(true));
        assert_eq!(CsvReader::detect_type("NaN"), CellValue::from("NaN"));
        assert_eq!(CsvReader::detect_type("abc"), CellValue::from("abc"));
        assert!(matches!(
            CsvReader::detect_type("2024-01-02 03:04:05"),
            CellValue::DateTime(_)
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = CsvReader::read_file("/definitely/not/here.csv", &CsvReadOptions::default());
        assert!(matches!(result, Err(crate::CsvError::Io(_))));
    }
}
