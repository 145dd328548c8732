use guestbook_db::open_memory;
use guestbook_db::schema::{CURRENT_VERSION, create_schema, get_schema_version};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    for table in ["schema_version", "invites", "guests"] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn reopening_file_database_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guests.db");

    {
        let conn = guestbook_db::open_database(&path).unwrap();
        guestbook_db::insert_invite(&conn, "inv-1", "ana-budi", None).unwrap();
    }

    let conn = guestbook_db::open_database(&path).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
    assert!(guestbook_db::find_invite(&conn, "inv-1").unwrap().is_some());
}

#[test]
fn first_version_has_full_guest_table() {
    assert_eq!(CURRENT_VERSION, 1);
    let conn = open_memory().unwrap();
    for column in ["qr_code_url", "checked_in_at", "submitted_at", "wishes"] {
        let has_column: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM pragma_table_info('guests') WHERE name = ?1)",
                [column],
                |row| row.get(0),
            )
            .unwrap();
        assert!(has_column, "guests.{column} should exist");
    }
}

#[test]
fn newer_database_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE schema_version (version INTEGER NOT NULL, applied_at TEXT);
             INSERT INTO schema_version (version) VALUES (99);",
        )
        .unwrap();
    }

    let err = guestbook_db::open_database(&path).unwrap_err();
    assert!(matches!(
        err,
        guestbook_db::SchemaError::VersionMismatch { found: 99, .. }
    ));
}
