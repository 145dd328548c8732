use super::*;

fn headers(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|h| h.to_lowercase()).collect()
}

#[test]
fn indonesian_headers_resolve() {
    let mapping = resolve_columns(&headers(&["Nama", "No HP", "Jumlah Tamu"]));
    assert_eq!(mapping.name, Some(0));
    assert_eq!(mapping.phone, Some(1));
    assert_eq!(mapping.guest_count, Some(2));
}

#[test]
fn template_headers_resolve() {
    let mapping = resolve_columns(&headers(&["Name", "Phone Number", "Expected Guest Numbers"]));
    assert_eq!(mapping.name, Some(0));
    assert_eq!(mapping.phone, Some(1));
    assert_eq!(mapping.guest_count, Some(2));
}

#[test]
fn columns_in_any_order() {
    let mapping = resolve_columns(&headers(&["guest_count", "mobile", "full_name"]));
    assert_eq!(mapping.name, Some(2));
    assert_eq!(mapping.phone, Some(1));
    assert_eq!(mapping.guest_count, Some(0));
}

#[test]
fn claimed_column_is_not_reused() {
    // "phone number" would also score for guest_count via "numb", but phone claims it first.
    let mapping = resolve_columns(&headers(&["name", "phone number"]));
    assert_eq!(mapping.phone, Some(1));
    assert_eq!(mapping.guest_count, None);
}

#[test]
fn exact_match_beats_substring() {
    let mapping = resolve_columns(&headers(&["guest name list", "name"]));
    assert_eq!(mapping.name, Some(1));
}

#[test]
fn ties_keep_first_column() {
    let mapping = resolve_columns(&headers(&["name", "name"]));
    assert_eq!(mapping.name, Some(0));
}

#[test]
fn unknown_headers_leave_fields_absent() {
    let mapping = resolve_columns(&headers(&["alamat", "kota"]));
    assert_eq!(mapping, ColumnMapping::default());
}

#[test]
fn score_tiers() {
    assert_eq!(score_header("phone", "phone"), SCORE_EXACT);
    assert_eq!(score_header("phone (wa)", "phone"), SCORE_CONTAINS);
    assert_eq!(score_header("tamu", "jumlah tamu"), 0);
    assert_eq!(score_header("jumlah org", "jumlah tamu"), SCORE_PREFIX);
    // Short synonyms never get the prefix tier.
    assert_eq!(score_header("h", "hp"), 0);
}
