use thiserror::Error;

use crate::reader::FileFormat;

/// Errors raised while turning file bytes into a raw table.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The file extension is not one we can decode. Holds the file name.
    #[error("Unsupported file format. Please upload .xlsx, .xls, or .csv files.")]
    UnsupportedFormat(String),

    /// The file had a known extension but its content could not be decoded.
    #[error("{}: {message}", .format.decode_label())]
    Decode { format: FileFormat, message: String },
}

impl SheetError {
    pub fn decode(format: FileFormat, message: impl Into<String>) -> Self {
        Self::Decode {
            format,
            message: message.into(),
        }
    }
}

/// Errors raised while building a downloadable template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
