//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use sheetbind_core::Worksheet;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a worksheet to a CSV file
    ///
    /// The file is flushed and closed before this returns.
    pub fn write_file<P: AsRef<Path>>(
        worksheet: &Worksheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let path = path.as_ref();
        log::debug!("writing worksheet '{}' to {}", worksheet.name(), path.display());
        let file = File::create(path)?;
        Self::write(worksheet, file, options)
    }

    /// Write a worksheet to a writer
    ///
    /// Rows and columns are written from A1 up to the sheet's extent, so
    /// leading blank rows and columns survive a read back.
    pub fn write<W: Write>(
        worksheet: &Worksheet,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        if let Some((rows, cols)) = worksheet.dimension() {
            for row in 0..rows {
                let record: Vec<String> = (0..cols)
                    .map(|col| worksheet.get_value_at(row, col).to_string())
                    .collect();
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
