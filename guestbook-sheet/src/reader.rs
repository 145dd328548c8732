//! Decoding of uploaded files into a [`RawTable`].
//!
//! Spreadsheets are read with calamine (first sheet only), CSV files with the
//! csv crate. Every value stays untyped: CSV fields are text, spreadsheet
//! cells keep whatever the workbook stored.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, Xls, Xlsx};
use guestbook_core::{Cell, RawTable};

use crate::error::SheetError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// File formats accepted for guest-list uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Xlsx,
    Xls,
    Csv,
}

impl FileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
            Self::Csv => "csv",
        }
    }

    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, Self::Xlsx | Self::Xls)
    }

    /// Prefix used when reporting a decode failure for this format.
    pub(crate) fn decode_label(&self) -> &'static str {
        if self.is_spreadsheet() {
            "Failed to parse Excel file"
        } else {
            "CSV parsing error"
        }
    }
}

/// Pick a decoder from the file name's extension (case-insensitive).
pub fn detect_format(file_name: &str) -> Result<FileFormat, SheetError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" => Ok(FileFormat::Xlsx),
        "xls" => Ok(FileFormat::Xls),
        "csv" => Ok(FileFormat::Csv),
        _ => Err(SheetError::UnsupportedFormat(file_name.to_string())),
    }
}

/// Decode a file's bytes into rows of cells.
pub fn read_table(file_name: &str, bytes: &[u8]) -> Result<RawTable, SheetError> {
    match detect_format(file_name)? {
        FileFormat::Csv => read_csv(bytes),
        FileFormat::Xlsx => read_workbook::<Xlsx<_>>(FileFormat::Xlsx, bytes),
        FileFormat::Xls => read_workbook::<Xls<_>>(FileFormat::Xls, bytes),
    }
}

fn read_workbook<R>(format: FileFormat, bytes: &[u8]) -> Result<RawTable, SheetError>
where
    R: Reader<Cursor<Vec<u8>>>,
    R::Error: std::fmt::Display,
{
    let mut workbook =
        R::new(Cursor::new(bytes.to_vec())).map_err(|e| SheetError::decode(format, e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::decode(format, "the workbook does not contain any worksheets"))?
        .map_err(|e| SheetError::decode(format, e.to_string()))?;

    // The range begins at the first used cell; pad so row indices match the sheet.
    let top = range.start().map_or(0, |(row, _)| row as usize);
    Ok(std::iter::repeat_with(Vec::new)
        .take(top)
        .chain(range.rows().map(|row| row.iter().map(cell_from_data).collect()))
        .collect())
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from(s.as_str()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        other => Cell::Text(other.to_string()),
    }
}

fn read_csv(bytes: &[u8]) -> Result<RawTable, SheetError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut table = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SheetError::decode(FileFormat::Csv, e.to_string()))?;
        // Physically empty line
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        table.push(record.iter().map(Cell::from).collect());
    }

    log::debug!("Read {} CSV row(s)", table.len());
    Ok(table)
}

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
