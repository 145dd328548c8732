use super::*;

fn guest(name: &str, phone: &str, count: Option<u32>) -> CandidateGuest {
    CandidateGuest {
        phone: phone.to_string(),
        guest_count: count,
        ..CandidateGuest::named(2, name)
    }
}

#[test]
fn clean_guest_passes() {
    let result = validate_candidate(&guest("Budi", "+6281234567890", Some(2)), &HashSet::new());
    assert!(result.is_clean(), "{result:?}");
}

#[test]
fn short_or_missing_name_is_an_error() {
    for name in ["", "A"] {
        let result = validate_candidate(&guest(name, "+6281234567890", Some(1)), &HashSet::new());
        assert_eq!(result.errors, vec![NAME_REQUIRED]);
    }
}

#[test]
fn numeric_name_is_an_error() {
    let result = validate_candidate(&guest("42", "+6281234567890", Some(1)), &HashSet::new());
    assert_eq!(result.errors, vec![NAME_ONLY_NUMBERS]);
    assert!(!has_valid_name("42"));
    assert!(has_valid_name("R2"));
}

#[test]
fn invalid_count_reports_raw_value() {
    let mut candidate = guest("Budi", "+6281234567890", None);
    candidate.invalid_guest_count = true;
    candidate.original_guest_count_value = Some("dua".to_string());

    let result = validate_candidate(&candidate, &HashSet::new());
    assert_eq!(
        result.errors,
        vec![r#"Invalid guest count: "dua" - No letters are allowed."#]
    );
}

#[test]
fn missing_count_and_high_count() {
    let result = validate_candidate(&guest("Budi", "+6281234567890", None), &HashSet::new());
    assert_eq!(result.errors, vec![GUEST_COUNT_REQUIRED]);

    let result = validate_candidate(&guest("Budi", "+6281234567890", Some(11)), &HashSet::new());
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings, vec![GUEST_COUNT_HIGH]);

    let result = validate_candidate(&guest("Budi", "+6281234567890", Some(10)), &HashSet::new());
    assert!(result.is_clean());
}

#[test]
fn phone_warnings() {
    let result = validate_candidate(&guest("Budi", "", Some(1)), &HashSet::new());
    assert_eq!(result.warnings, vec![PHONE_MISSING]);

    let result = validate_candidate(&guest("Budi", "1234567", Some(1)), &HashSet::new());
    assert_eq!(result.warnings, vec![PHONE_TOO_SHORT, PHONE_NO_COUNTRY_CODE]);
    assert!(result.errors.is_empty());
}

#[test]
fn repeated_phone_is_a_warning() {
    let seen: HashSet<String> = ["+6281234567890".to_string()].into();
    let result = validate_candidate(&guest("Ana", "+6281234567890", Some(1)), &seen);
    assert_eq!(result.warnings, vec![PHONE_DUPLICATE]);
    assert!(!result.has_errors());
}
