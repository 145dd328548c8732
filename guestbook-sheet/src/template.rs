//! Downloadable guest-list templates.
//!
//! The sample row starts with "Contoh", so a template uploaded unchanged
//! parses to zero guests.

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};

use crate::error::TemplateError;

pub const TEMPLATE_HEADERS: [&str; 3] = ["Name", "Phone Number", "Expected Guest Numbers"];

const SAMPLE_NAME: &str = "Contoh: Eddy & Family";
const SAMPLE_PHONE: &str = "6285609918821";
const SAMPLE_GUEST_COUNT: u32 = 3;

const SHEET_NAME: &str = "Guest List";
const COLUMN_WIDTHS: [f64; 3] = [25.0, 18.0, 22.0];

const HEADER_FILL: u32 = 0xE3F2FD;
const HEADER_BORDER: u32 = 0xCCCCCC;
const SAMPLE_FILL: u32 = 0xF0F8FF;

/// The template as CSV text.
pub fn csv_template() -> Result<String, TemplateError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TEMPLATE_HEADERS)?;
    let count = SAMPLE_GUEST_COUNT.to_string();
    writer.write_record([SAMPLE_NAME, SAMPLE_PHONE, count.as_str()])?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// The template as an `.xlsx` workbook.
pub fn xlsx_template() -> Result<Vec<u8>, TemplateError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(HEADER_BORDER));
    let sample_format = Format::new()
        .set_italic()
        .set_background_color(Color::RGB(SAMPLE_FILL));

    for (col, header) in TEMPLATE_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    sheet.write_string_with_format(1, 0, SAMPLE_NAME, &sample_format)?;
    sheet.write_string_with_format(1, 1, SAMPLE_PHONE, &sample_format)?;
    sheet.write_number_with_format(1, 2, SAMPLE_GUEST_COUNT, &sample_format)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    Ok(workbook.save_to_buffer()?)
}
