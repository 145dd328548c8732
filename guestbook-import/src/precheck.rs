//! Last checks on a guest list right before it is imported.
//!
//! These run on already-parsed candidates, numbered by their position in
//! the list (not their row in the source file).

use guestbook_core::{CandidateGuest, MAX_GUEST_COUNT, MIN_GUEST_COUNT};
use serde::Serialize;

pub const NO_GUESTS: &str = "No guests provided for import";

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn validate_for_import(guests: &[CandidateGuest]) -> ImportValidation {
    if guests.is_empty() {
        return ImportValidation {
            valid: false,
            errors: vec![NO_GUESTS.to_string()],
            warnings: Vec::new(),
        };
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (index, guest) in guests.iter().enumerate() {
        let row = index + 1;

        if guest.full_name.trim().chars().count() < MIN_NAME_LEN {
            errors.push(format!(
                "Row {row}: Guest name is required and must be at least 2 characters"
            ));
        }

        if !guest.email.is_empty() && !is_plausible_email(&guest.email) {
            errors.push(format!("Row {row}: Invalid email format"));
        }

        if !guest.phone.is_empty() && guest.phone.len() < MIN_PHONE_LEN {
            warnings.push(format!("Row {row}: Phone number seems too short"));
        }

        if let Some(count) = guest.guest_count
            && !(MIN_GUEST_COUNT..=MAX_GUEST_COUNT).contains(&count)
        {
            warnings.push(format!("Row {row}: Guest count seems unusual ({count})"));
        }
    }

    ImportValidation {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain with text on both sides.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(name: &str) -> CandidateGuest {
        CandidateGuest::named(2, name)
    }

    #[test]
    fn empty_list_is_invalid() {
        let v = validate_for_import(&[]);
        assert!(!v.valid);
        assert_eq!(v.errors, vec![NO_GUESTS]);
    }

    #[test]
    fn rows_are_numbered_by_position() {
        let mut second = guest(" A ");
        second.email = "not-an-email".to_string();
        let v = validate_for_import(&[guest("Ana"), second]);
        assert!(!v.valid);
        assert_eq!(
            v.errors,
            vec![
                "Row 2: Guest name is required and must be at least 2 characters",
                "Row 2: Invalid email format",
            ]
        );
    }

    #[test]
    fn warnings_do_not_invalidate() {
        let mut g = guest("Ana");
        g.phone = "+62811".to_string();
        g.guest_count = Some(25);
        let v = validate_for_import(&[g]);
        assert!(v.valid);
        assert_eq!(
            v.warnings,
            vec![
                "Row 1: Phone number seems too short",
                "Row 1: Guest count seems unusual (25)",
            ]
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_plausible_email("ana@example.com"));
        assert!(is_plausible_email("a.b+c@mail.example.co.id"));
        assert!(!is_plausible_email("ana@example"));
        assert!(!is_plausible_email("ana@@example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("ana @example.com"));
        assert!(!is_plausible_email("ana@.com"));
    }
}
