//! SQLite schema creation and migration.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: database is at version {found}, newest known is {expected}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist. Idempotent.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    if get_schema_version(conn)? < CURRENT_VERSION {
        set_schema_version(conn, CURRENT_VERSION)?;
    }
    Ok(())
}

/// Open or create a guest database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        log::debug!("Creating schema v{} in {}", CURRENT_VERSION, path.display());
        create_schema(&conn)?;
    } else if version != CURRENT_VERSION {
        migrate(version)?;
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
pub fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Bring an existing database up to `CURRENT_VERSION`.
///
/// Version 1 is the first released schema, so the only case left to handle
/// is a file written by a newer build.
fn migrate(from_version: i32) -> Result<(), SchemaError> {
    if from_version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: from_version,
        });
    }
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- One invitation site; guests belong to exactly one invite
CREATE TABLE IF NOT EXISTS invites (
    id TEXT PRIMARY KEY,
    slug TEXT NOT NULL UNIQUE,
    title TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS guests (
    guest_id INTEGER PRIMARY KEY AUTOINCREMENT,
    invite_id TEXT NOT NULL REFERENCES invites(id),
    full_name TEXT NOT NULL,
    slug TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    rsvp_status TEXT CHECK (rsvp_status IN ('pending', 'confirmed', 'declined')),
    guest_count INTEGER NOT NULL DEFAULT 1 CHECK (guest_count >= 1),
    dietary_restriction TEXT,
    wishes TEXT,
    checked_in BOOLEAN NOT NULL DEFAULT 0,
    checked_in_at TEXT,
    qr_code_url TEXT,
    created_at TEXT NOT NULL,
    submitted_at TEXT,
    UNIQUE(invite_id, slug)
);
CREATE INDEX IF NOT EXISTS idx_guests_invite ON guests(invite_id);
CREATE INDEX IF NOT EXISTS idx_guests_invite_phone ON guests(invite_id, phone);
CREATE INDEX IF NOT EXISTS idx_guests_invite_email ON guests(invite_id, email);
"#;
