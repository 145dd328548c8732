//! Business rules applied to each candidate guest.

use std::collections::HashSet;

use guestbook_core::{CandidateGuest, ValidationResult};

/// Shortest accepted name, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// Guest counts above this are accepted but flagged.
pub const HIGH_GUEST_COUNT: u32 = 10;

/// Phones shorter than this are accepted but flagged.
pub const MIN_PHONE_LEN: usize = 8;

pub const NAME_REQUIRED: &str = "Name is required and must be at least 2 characters";
pub const NAME_ONLY_NUMBERS: &str = "Name cannot be only numbers";
pub const GUEST_COUNT_REQUIRED: &str = "Guest count is required and must be a valid number";
pub const GUEST_COUNT_HIGH: &str = "Guest count seems unusually high (>10)";
pub const PHONE_MISSING: &str = "No phone number provided";
pub const PHONE_TOO_SHORT: &str = "Phone number seems too short";
pub const PHONE_NO_COUNTRY_CODE: &str = "Phone number should include country code";
pub const PHONE_DUPLICATE: &str = "Duplicate phone number";

/// Validate one candidate against the name, guest-count, and phone rules.
///
/// `seen_phones` holds the phones of rows already accepted from the same
/// file; a repeat is a warning, not an error.
pub fn validate_candidate(guest: &CandidateGuest, seen_phones: &HashSet<String>) -> ValidationResult {
    let mut result = ValidationResult::default();

    if guest.full_name.chars().count() < MIN_NAME_LEN {
        result.error(NAME_REQUIRED);
    }
    if is_all_digits(&guest.full_name) {
        result.error(NAME_ONLY_NUMBERS);
    }

    if guest.invalid_guest_count {
        result.error(format!(
            "Invalid guest count: \"{}\" - No letters are allowed.",
            guest.original_guest_count_value.as_deref().unwrap_or_default()
        ));
    } else {
        match guest.guest_count {
            None => result.error(GUEST_COUNT_REQUIRED),
            Some(n) if n > HIGH_GUEST_COUNT => result.warning(GUEST_COUNT_HIGH),
            Some(_) => {}
        }
    }

    if guest.phone.is_empty() {
        result.warning(PHONE_MISSING);
    } else {
        if guest.phone.len() < MIN_PHONE_LEN {
            result.warning(PHONE_TOO_SHORT);
        }
        if !guest.phone.starts_with('+') {
            result.warning(PHONE_NO_COUNTRY_CODE);
        }
        if seen_phones.contains(&guest.phone) {
            result.warning(PHONE_DUPLICATE);
        }
    }

    result
}

/// True if the name passes both name rules. Candidates failing this are
/// never imported.
pub fn has_valid_name(name: &str) -> bool {
    name_error(name).is_none()
}

/// The first name rule a name breaks, if any.
pub fn name_error(name: &str) -> Option<&'static str> {
    if name.chars().count() < MIN_NAME_LEN {
        Some(NAME_REQUIRED)
    } else if is_all_digits(name) {
        Some(NAME_ONLY_NUMBERS)
    } else {
        None
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
