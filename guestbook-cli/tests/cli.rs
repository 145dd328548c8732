use std::path::Path;
use std::process::{Command, Output};

fn guestbook(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_guestbook"))
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn invite_import_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("data").join("guests.db");
    let list = dir.path().join("guests.csv");
    std::fs::write(
        &list,
        "Name,Phone Number,Expected Guest Numbers\n\
         Ana Wijaya,081234567890,2\n\
         Budi Santoso,082298765432,3 people\n",
    )
    .unwrap();

    let out = guestbook(&db, &["invite", "add", "inv-1", "--slug", "ana-budi"]);
    assert!(out.status.success(), "{}", stdout(&out));

    let out = guestbook(&db, &["import", list.to_str().unwrap(), "--invite", "inv-1", "--json"]);
    assert!(out.status.success(), "{}", stdout(&out));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["imported"], 2);
    assert_eq!(json["guest_ids"].as_array().map(Vec::len), Some(2));

    let out = guestbook(&db, &["stats", "--invite", "inv-1"]);
    let text = stdout(&out);
    assert!(out.status.success(), "{text}");
    assert!(text.contains("Guests:              2"), "{text}");
    assert!(text.contains("Expected attendance: 5"), "{text}");

    // The same file again only finds duplicates.
    let out = guestbook(&db, &["import", list.to_str().unwrap(), "--invite", "inv-1", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["imported"], 0);
    assert_eq!(json["duplicates"].as_array().map(Vec::len), Some(2));
}

#[test]
fn unknown_invite_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("guests.db");
    let list = dir.path().join("guests.csv");
    std::fs::write(&list, "Name\nAna Wijaya\n").unwrap();

    let out = guestbook(&db, &["import", list.to_str().unwrap(), "--invite", "nope"]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("Unknown invite: nope"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("guests.db");
    let list = dir.path().join("guests.csv");
    std::fs::write(&list, "Name,Phone\nAna Wijaya,081234567890\n").unwrap();

    let out = guestbook(
        &db,
        &["import", list.to_str().unwrap(), "--invite", "inv-1", "--dry-run"],
    );
    assert!(out.status.success(), "{}", stdout(&out));
    assert!(stdout(&out).contains("Would import 1 guest(s)"));
    assert!(!db.exists());
}

#[test]
fn template_then_preview() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("guests.db");
    let template = dir.path().join("template.xlsx");

    let out = guestbook(&db, &["template", "-o", template.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stdout(&out));
    assert!(template.exists());

    let out = guestbook(&db, &["preview", template.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stdout(&out));
    assert!(stdout(&out).contains("Guests: 0"));
}
