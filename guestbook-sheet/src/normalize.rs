//! Per-row cleanup: names, phone numbers, and guest counts.
//!
//! Every cleaning function is a fixed point: cleaning an already cleaned
//! value returns it unchanged.

use guestbook_core::{CandidateGuest, Cell, ColumnMapping, MAX_GUEST_COUNT, MIN_GUEST_COUNT};

/// First-cell markers of the sample row shipped in the download template.
const SAMPLE_MARKERS: &[&str] = &["contoh", "example", "eddy"];

/// Country code assumed for local numbers written with a leading `0`.
pub const LOCAL_COUNTRY_CODE: &str = "+62";

/// Local numbers shorter than this are left alone.
const LOCAL_MIN_LEN: usize = 10;

/// Numbers at least this long get a `+` when they lack one.
const INTERNATIONAL_MIN_LEN: usize = 8;

/// Runs of this many digits or more are stripped from names.
const NAME_DIGIT_RUN: usize = 3;

/// Result of parsing a raw guest-count cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestCount {
    Valid(u32),
    /// Letters, no digits, or a count below one.
    Invalid,
}

/// True if the row's first cell looks like the template's sample row.
pub fn is_sample_row(row: &[Cell]) -> bool {
    let first = row.first().map(|c| c.as_text().to_lowercase()).unwrap_or_default();
    SAMPLE_MARKERS.iter().any(|m| first.contains(m))
}

/// Clean a guest's display name.
///
/// Keeps letters and digits from any script, whitespace, and `& - . , ( )`;
/// drops runs of three or more ASCII digits (pasted phone numbers, ids);
/// collapses whitespace.
///
/// ```
/// use guestbook_sheet::clean_name;
///
/// assert_eq!(clean_name("  Budi   & Family!! "), "Budi & Family");
/// assert_eq!(clean_name("Ana 081234 (Bride)"), "Ana (Bride)");
/// assert_eq!(clean_name("Nguyễn Văn An"), "Nguyễn Văn An");
/// ```
pub fn clean_name(raw: &str) -> String {
    let kept: String = raw.chars().filter(|c| is_name_char(*c)).collect();
    let without_numbers = strip_digit_runs(&kept, NAME_DIGIT_RUN);
    without_numbers
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic()
        || c.is_numeric()
        || c.is_whitespace()
        || matches!(c, '&' | '-' | '.' | ',' | '(' | ')')
}

fn strip_digit_runs(s: &str, min_run: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            run.push(c);
            continue;
        }
        if run.len() < min_run {
            out.push_str(&run);
        }
        run.clear();
        out.push(c);
    }
    if run.len() < min_run {
        out.push_str(&run);
    }

    out
}

/// Canonicalize a phone number.
///
/// Keeps digits and a leading `+`. A local number (`0…`, at least 10 digits)
/// gets the default country code; any other number of 8+ digits without a
/// `+` gets one prepended. Shorter numbers pass through.
///
/// ```
/// use guestbook_sheet::clean_phone;
///
/// assert_eq!(clean_phone("0812-3456-7890"), "+6281234567890");
/// assert_eq!(clean_phone("12345678"), "+12345678");
/// assert_eq!(clean_phone("1234567"), "1234567");
/// ```
pub fn clean_phone(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && cleaned.is_empty()) {
            cleaned.push(c);
        }
    }

    if let Some(rest) = cleaned.strip_prefix('0')
        && cleaned.len() >= LOCAL_MIN_LEN
    {
        format!("{LOCAL_COUNTRY_CODE}{rest}")
    } else if !cleaned.starts_with('+') && cleaned.len() >= INTERNATIONAL_MIN_LEN {
        format!("+{cleaned}")
    } else {
        cleaned
    }
}

/// Parse a guest-count cell.
///
/// A blank cell means one guest. Text is rejected rather than guessed at,
/// except for a leading number followed by a unit word ("3 people",
/// "2 orang"). Counts above the maximum are capped.
///
/// ```
/// use guestbook_sheet::{GuestCount, clean_guest_count};
///
/// assert_eq!(clean_guest_count("3"), GuestCount::Valid(3));
/// assert_eq!(clean_guest_count("3 people"), GuestCount::Valid(3));
/// assert_eq!(clean_guest_count("abc"), GuestCount::Invalid);
/// assert_eq!(clean_guest_count("3abc"), GuestCount::Invalid);
/// assert_eq!(clean_guest_count("25"), GuestCount::Valid(20));
/// assert_eq!(clean_guest_count(""), GuestCount::Valid(1));
/// ```
pub fn clean_guest_count(raw: &str) -> GuestCount {
    let s = raw.trim();
    if s.is_empty() {
        return GuestCount::Valid(MIN_GUEST_COUNT);
    }

    let Some(start) = s.find(|c: char| c.is_ascii_digit()) else {
        return GuestCount::Invalid;
    };
    let end = s[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |offset| start + offset);

    if s.chars().any(|c| c.is_ascii_alphabetic()) && !(start == 0 && is_unit_suffix(&s[end..])) {
        return GuestCount::Invalid;
    }

    // Only overflow can fail here: the slice is all ASCII digits.
    let count = s[start..end].parse::<u64>().unwrap_or(u64::MAX);
    if count < u64::from(MIN_GUEST_COUNT) {
        GuestCount::Invalid
    } else if count > u64::from(MAX_GUEST_COUNT) {
        GuestCount::Valid(MAX_GUEST_COUNT)
    } else {
        GuestCount::Valid(count as u32)
    }
}

/// A trailing word such as "people" or "pax", set apart from the number by
/// whitespace: letters, spaces, dots only.
fn is_unit_suffix(rest: &str) -> bool {
    rest.starts_with(char::is_whitespace)
        && rest.chars().any(char::is_alphabetic)
        && rest
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '.')
}

/// Build a candidate guest from one data row.
///
/// `row_number` is the 1-based row in the file (header row included), used in
/// every message about this guest.
pub fn normalize_row(row: &[Cell], mapping: &ColumnMapping, row_number: usize) -> CandidateGuest {
    let mut guest = CandidateGuest::new(row_number);

    let cell_text = |index: Option<usize>| {
        index
            .and_then(|i| row.get(i))
            .map(|c| c.as_text().trim().to_string())
    };

    if let Some(name) = cell_text(mapping.name) {
        guest.full_name = clean_name(&name);
    }

    if let Some(phone) = cell_text(mapping.phone) {
        guest.phone = clean_phone(&phone);
    }

    if mapping.guest_count.is_some() {
        let raw = cell_text(mapping.guest_count).unwrap_or_default();
        match clean_guest_count(&raw) {
            GuestCount::Valid(n) => guest.guest_count = Some(n),
            GuestCount::Invalid => {
                guest.guest_count = None;
                guest.invalid_guest_count = true;
                guest.original_guest_count_value = Some(raw.clone());
            }
        }
        log::debug!(
            "Row {}: guest count {:?} -> {:?}",
            row_number,
            raw,
            guest.guest_count
        );
    }

    guest
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
