use chrono::{Duration, TimeZone, Utc};
use guestbook_core::{NewGuest, RsvpStatus};
use guestbook_db::*;

fn new_guest(invite: &str, name: &str, email: Option<&str>, phone: Option<&str>, count: u32) -> NewGuest {
    NewGuest {
        invite_id: invite.to_string(),
        full_name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        email: email.map(str::to_string),
        phone: phone.map(str::to_string),
        guest_count: count,
        dietary_restriction: None,
    }
}

fn setup() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    insert_invite(&conn, "inv-1", "ana-budi", None).unwrap();
    insert_invite(&conn, "inv-2", "citra-dimas", None).unwrap();
    conn
}

#[test]
fn find_existing_matches_email_or_phone_within_invite() {
    let conn = setup();
    insert_guests(
        &conn,
        &[
            new_guest("inv-1", "Ana", Some("ana@example.com"), None, 1),
            new_guest("inv-1", "Budi", None, Some("+6281234567890"), 1),
            new_guest("inv-1", "Citra", None, Some("+6280000000000"), 1),
        ],
        Utc::now(),
    )
    .unwrap();
    insert_guests(
        &conn,
        &[new_guest("inv-2", "Dewi", Some("ana@example.com"), None, 1)],
        Utc::now(),
    )
    .unwrap();

    let found = find_existing(
        &conn,
        "inv-1",
        &["ana@example.com".to_string(), String::new()],
        &["+6281234567890".to_string()],
    )
    .unwrap();
    let names: Vec<&str> = found.iter().map(|g| g.full_name.as_str()).collect();
    assert_eq!(names, ["Ana", "Budi"]);
}

#[test]
fn find_existing_with_nothing_to_match() {
    let conn = setup();
    assert!(find_existing(&conn, "inv-1", &[], &[String::new()]).unwrap().is_empty());
}

#[test]
fn find_existing_binds_quotes_as_values() {
    let conn = setup();
    insert_guests(
        &conn,
        &[new_guest("inv-1", "O'Brien", Some("o'brien@example.com"), None, 1)],
        Utc::now(),
    )
    .unwrap();

    let found = find_existing(
        &conn,
        "inv-1",
        &["o'brien@example.com".to_string()],
        &["') OR 1=1 --".to_string()],
    )
    .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].full_name, "O'Brien");

    let none = find_existing(&conn, "inv-1", &[], &["' OR '1'='1".to_string()]).unwrap();
    assert!(none.is_empty());
}

#[test]
fn stats_breakdown() {
    let conn = setup();
    let now = Utc.with_ymd_and_hms(2026, 7, 10, 12, 0, 0).unwrap();

    let old = insert_guests(
        &conn,
        &[
            new_guest("inv-1", "Ana", None, None, 2),
            new_guest("inv-1", "Budi", None, None, 3),
        ],
        now - Duration::hours(48),
    )
    .unwrap();
    let fresh = insert_guests(
        &conn,
        &[
            new_guest("inv-1", "Citra", None, None, 1),
            new_guest("inv-1", "Dimas", None, None, 4),
        ],
        now - Duration::hours(2),
    )
    .unwrap();
    insert_guests(&conn, &[new_guest("inv-2", "Eka", None, None, 5)], now).unwrap();

    let confirm = |id, status| {
        let rsvp = RsvpSubmission {
            full_name: "x".to_string(),
            email: None,
            phone: None,
            rsvp_status: status,
            guest_count: 2,
            dietary_restriction: None,
            wishes: None,
        };
        record_rsvp(&conn, id, &rsvp, now).unwrap();
    };
    confirm(old[0].guest_id, RsvpStatus::Confirmed);
    confirm(old[1].guest_id, RsvpStatus::Declined);
    confirm(fresh[0].guest_id, RsvpStatus::Pending);
    check_in(&conn, old[0].guest_id, now).unwrap();

    let stats = invite_stats(&conn, "inv-1", now).unwrap();
    assert_eq!(stats.total_guests, 4);
    // 2 (confirmed) + 1 (declined) + 2 (pending) + 4
    assert_eq!(stats.total_attendance, 9);
    assert_eq!(stats.confirmed, 1);
    assert_eq!(stats.declined, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.no_response, 1);
    assert_eq!(stats.checked_in, 1);
    assert_eq!(stats.recent, 2);
}

#[test]
fn stats_for_empty_invite() {
    let conn = setup();
    assert_eq!(invite_stats(&conn, "inv-1", Utc::now()).unwrap(), InviteStats::default());
}
