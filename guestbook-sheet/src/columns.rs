//! Header resolution: which column holds the name, phone, and guest count.
//!
//! Uploaded lists come with headers in English or Indonesian, with or without
//! underscores, sometimes with extra words ("Guest Name (required)"). Each
//! header is scored against a fixed synonym list per field and the best
//! unclaimed column wins.

use guestbook_core::{ColumnMapping, GuestField};

const NAME_SYNONYMS: &[&str] = &[
    "name",
    "full_name",
    "guest_name",
    "nama",
    "full name",
    "guest name",
    "names",
];

const PHONE_SYNONYMS: &[&str] = &[
    "phone",
    "phone_number",
    "mobile",
    "telephone",
    "telp",
    "hp",
    "phone number",
    "no hp",
    "nomor hp",
    "cell",
    "contact",
];

const GUEST_COUNT_SYNONYMS: &[&str] = &[
    "expected_guest_numbers",
    "guest_count",
    "expected guest numbers",
    "guest numbers",
    "jumlah tamu",
    "expected",
    "count",
    "numbers",
];

pub const SCORE_EXACT: u32 = 100;
pub const SCORE_CONTAINS: u32 = 50;
pub const SCORE_PREFIX: u32 = 25;

/// Recognized header spellings for a field, lower-case.
pub fn synonyms(field: GuestField) -> &'static [&'static str] {
    match field {
        GuestField::Name => NAME_SYNONYMS,
        GuestField::Phone => PHONE_SYNONYMS,
        GuestField::GuestCount => GUEST_COUNT_SYNONYMS,
    }
}

/// Score how well a header matches one synonym. Zero means no match.
///
/// ```
/// use guestbook_sheet::score_header;
///
/// assert_eq!(score_header("Nama", "nama"), 100);
/// assert_eq!(score_header("guest name (required)", "guest name"), 50);
/// assert_eq!(score_header("telephone no", "telp"), 0);
/// assert_eq!(score_header("mobiles", "mobile"), 50);
/// assert_eq!(score_header("mob. number", "mobile"), 0);
/// assert_eq!(score_header("expect count", "expected"), 25);
/// ```
pub fn score_header(header: &str, synonym: &str) -> u32 {
    let header = header.trim().to_lowercase();

    if header == synonym {
        SCORE_EXACT
    } else if header.contains(synonym) {
        SCORE_CONTAINS
    } else if synonym.chars().count() > 3 && header.contains(prefix_chars(synonym, 4)) {
        SCORE_PREFIX
    } else {
        0
    }
}

fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Map headers to canonical fields, one field per column.
///
/// Fields are resolved in [`GuestField::PRIORITY`] order, so `name` gets first
/// pick. For each field the highest-scoring unclaimed column wins; on a tie
/// the earlier column is kept. A field with no positive score is left out.
pub fn resolve_columns(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::default();

    for field in GuestField::PRIORITY {
        let mut best: Option<(usize, u32)> = None;

        for (index, header) in headers.iter().enumerate() {
            if mapping.is_claimed(index) {
                continue;
            }
            for synonym in synonyms(field) {
                let score = score_header(header, synonym);
                if score > best.map_or(0, |(_, s)| s) {
                    best = Some((index, score));
                }
            }
        }

        if let Some((index, score)) = best {
            mapping.set(field, index);
            log::debug!(
                "Mapped {} to column {} ({:?}, score {})",
                field,
                index,
                headers[index],
                score
            );
        } else {
            log::debug!("No column found for {}", field);
        }
    }

    mapping
}

#[cfg(test)]
#[path = "tests/columns_tests.rs"]
mod tests;
