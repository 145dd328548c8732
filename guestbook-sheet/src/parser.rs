use std::collections::HashSet;
use std::path::Path;

use guestbook_core::{CandidateGuest, ColumnMapping, RawTable, row_is_blank};
use serde::Serialize;

use crate::columns::resolve_columns;
use crate::normalize::{is_sample_row, normalize_row};
use crate::reader::read_table;
use crate::validate::{has_valid_name, validate_candidate};

pub const EMPTY_FILE: &str = "File appears to be empty";
pub const NO_HEADER_ROW: &str = "No valid header row found";
pub const NO_NAME_COLUMN: &str =
    "No name column found. Please ensure your file has a \"Name\" column.";

/// Everything learned from one uploaded file.
///
/// Errors and warnings are prefixed with `Row <n>: ` when they concern a
/// single row. File-level failures leave `guests` empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub guests: Vec<CandidateGuest>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub column_mapping: ColumnMapping,
    /// Number of guests accepted, equal to `guests.len()`.
    pub total_rows: usize,
}

impl ParseOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse an uploaded file. Never fails: decode problems come back as
/// messages in the outcome.
pub fn parse_guest_file(file_name: &str, bytes: &[u8]) -> ParseOutcome {
    match read_table(file_name, bytes) {
        Ok(table) => process_table(&table),
        Err(e) => {
            log::warn!("Could not read {}: {}", file_name, e);
            ParseOutcome::failed(e.to_string())
        }
    }
}

/// Read a file from disk and parse it.
pub fn parse_guest_path(path: &Path) -> std::io::Result<ParseOutcome> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(parse_guest_file(&file_name, &bytes))
}

/// Resolve columns, normalize, and validate a decoded table.
///
/// The first non-blank row is the header. Data rows are numbered from 1 at
/// the top of the table, so the first row under a header on line 1 is
/// `Row 2`.
pub fn process_table(table: &RawTable) -> ParseOutcome {
    if table.is_empty() {
        return ParseOutcome::failed(EMPTY_FILE);
    }

    let Some(header_index) = table.iter().position(|row| !row_is_blank(row)) else {
        return ParseOutcome::failed(NO_HEADER_ROW);
    };

    let headers: Vec<String> = table[header_index]
        .iter()
        .map(|c| c.as_text().trim().to_lowercase())
        .collect();
    let column_mapping = resolve_columns(&headers);

    let mut outcome = ParseOutcome {
        column_mapping,
        ..ParseOutcome::default()
    };
    let mut seen_phones = HashSet::new();

    for (index, row) in table.iter().enumerate().skip(header_index + 1) {
        if row_is_blank(row) || is_sample_row(row) {
            continue;
        }

        let row_number = index + 1;
        let guest = normalize_row(row, &column_mapping, row_number);
        let validation = validate_candidate(&guest, &seen_phones);

        outcome
            .errors
            .extend(validation.errors.iter().map(|e| format!("Row {row_number}: {e}")));
        outcome
            .warnings
            .extend(validation.warnings.iter().map(|w| format!("Row {row_number}: {w}")));

        if has_valid_name(&guest.full_name) {
            if !guest.phone.is_empty() {
                seen_phones.insert(guest.phone.clone());
            }
            outcome.guests.push(guest);
        } else {
            log::debug!("Row {}: dropped, no usable name", row_number);
        }
    }

    if column_mapping.name.is_none() {
        outcome.errors.insert(0, NO_NAME_COLUMN.to_string());
    }

    outcome.total_rows = outcome.guests.len();
    log::info!(
        "Parsed {} guest(s) with {} error(s) and {} warning(s)",
        outcome.total_rows,
        outcome.errors.len(),
        outcome.warnings.len()
    );
    outcome
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
