use super::*;

#[test]
fn mapping_tracks_claimed_columns() {
    let mut mapping = ColumnMapping::default();
    assert!(!mapping.is_claimed(0));
    mapping.set(GuestField::Phone, 2);
    assert!(mapping.is_claimed(2));
    assert_eq!(mapping.get(GuestField::Phone), Some(2));
    assert_eq!(mapping.get(GuestField::Name), None);
}

#[test]
fn rsvp_status_parses_case_insensitively() {
    assert_eq!("Confirmed".parse::<RsvpStatus>(), Ok(RsvpStatus::Confirmed));
    assert_eq!(" declined ".parse::<RsvpStatus>(), Ok(RsvpStatus::Declined));
    assert!("maybe".parse::<RsvpStatus>().is_err());
}

#[test]
fn duplicate_matches_on_email_or_phone() {
    let existing = DuplicateGuest {
        guest_id: 7,
        full_name: "Budi".to_string(),
        email: Some("budi@example.com".to_string()),
        phone: Some("+6281234567890".to_string()),
    };

    let mut by_phone = CandidateGuest::named(2, "Budi S");
    by_phone.phone = "+6281234567890".to_string();
    assert!(existing.matches(&by_phone));

    let mut by_email = CandidateGuest::named(3, "Other");
    by_email.email = "budi@example.com".to_string();
    assert!(existing.matches(&by_email));

    assert!(!existing.matches(&CandidateGuest::named(4, "Nobody")));
}

#[test]
fn empty_candidate_fields_never_match() {
    let existing = DuplicateGuest {
        guest_id: 1,
        full_name: "X".to_string(),
        email: None,
        phone: None,
    };
    assert!(!existing.matches(&CandidateGuest::named(2, "Y")));
}

#[test]
fn patch_emptiness() {
    assert!(GuestPatch::default().is_empty());
    assert!(!GuestPatch::qr_code("data:x").is_empty());
}

#[test]
fn new_candidate_defaults_to_one_guest() {
    let c = CandidateGuest::new(5);
    assert_eq!(c.guest_count, Some(1));
    assert_eq!(c.row_number, 5);
    assert!(!c.invalid_guest_count);
}
