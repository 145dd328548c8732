//! Write operations for invites and guests.

use chrono::{DateTime, SecondsFormat, Utc};
use guestbook_core::{
    GuestId, GuestPatch, MIN_GUEST_COUNT, NewGuest, PersistedGuest, RsvpStatus,
};
use rusqlite::types::Value;
use rusqlite::{Connection, params, params_from_iter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

impl OperationError {
    pub(crate) fn guest_not_found(guest_id: GuestId) -> Self {
        Self::NotFound {
            entity_type: "guest".to_string(),
            id: guest_id.to_string(),
        }
    }

    /// True for UNIQUE, CHECK, NOT NULL, and foreign-key violations.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Sqlite(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

/// Stored form of a timestamp: RFC 3339, UTC, whole seconds.
///
/// All stored timestamps share this format, so they compare correctly as
/// text.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ── Invite Operations ───────────────────────────────────────────────────────

/// Create an invite. Fails on a duplicate id or slug.
pub fn insert_invite(
    conn: &Connection,
    id: &str,
    slug: &str,
    title: Option<&str>,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO invites (id, slug, title, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![id, slug, title, timestamp(Utc::now())],
    )?;
    Ok(())
}

// ── Guest Operations ────────────────────────────────────────────────────────

/// Insert guests in one transaction. Either every guest is stored or none is.
///
/// Returns the stored rows in input order.
pub fn insert_guests(
    conn: &Connection,
    guests: &[NewGuest],
    now: DateTime<Utc>,
) -> Result<Vec<PersistedGuest>, OperationError> {
    let created_at = timestamp(now);
    let tx = conn.unchecked_transaction()?;
    let mut stored = Vec::with_capacity(guests.len());

    {
        let mut stmt = tx.prepare(
            "INSERT INTO guests (invite_id, full_name, slug, email, phone, guest_count,
                 dietary_restriction, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        for guest in guests {
            stmt.execute(params![
                guest.invite_id,
                guest.full_name,
                guest.slug,
                guest.email,
                guest.phone,
                guest.guest_count,
                guest.dietary_restriction,
                created_at,
            ])?;
            stored.push(PersistedGuest {
                guest_id: tx.last_insert_rowid(),
                invite_id: guest.invite_id.clone(),
                full_name: guest.full_name.clone(),
                slug: guest.slug.clone(),
                email: guest.email.clone(),
                phone: guest.phone.clone(),
                rsvp_status: None,
                guest_count: guest.guest_count,
                dietary_restriction: guest.dietary_restriction.clone(),
                wishes: None,
                checked_in: false,
                checked_in_at: None,
                qr_code_url: None,
                created_at: created_at.clone(),
                submitted_at: None,
            });
        }
    }

    tx.commit()?;
    Ok(stored)
}

/// Delete guests by id in one transaction. Returns how many rows went away.
pub fn delete_guests(conn: &Connection, guest_ids: &[GuestId]) -> Result<usize, OperationError> {
    if guest_ids.is_empty() {
        return Ok(0);
    }

    let sql = format!(
        "DELETE FROM guests WHERE guest_id IN ({})",
        placeholders(1, guest_ids.len())
    );
    let tx = conn.unchecked_transaction()?;
    let deleted = tx.execute(&sql, params_from_iter(guest_ids))?;
    tx.commit()?;
    Ok(deleted)
}

/// Apply the set fields of a patch to one guest.
///
/// An empty patch only checks that the guest exists.
pub fn update_guest(
    conn: &Connection,
    guest_id: GuestId,
    patch: &GuestPatch,
) -> Result<(), OperationError> {
    let mut columns: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    let mut set = |column: &'static str, value: Option<Value>| {
        if let Some(value) = value {
            columns.push(column);
            values.push(value);
        }
    };
    set("full_name", patch.full_name.clone().map(Value::Text));
    set("email", patch.email.clone().map(Value::Text));
    set("phone", patch.phone.clone().map(Value::Text));
    set(
        "rsvp_status",
        patch.rsvp_status.map(|s| Value::Text(s.as_str().to_string())),
    );
    set("guest_count", patch.guest_count.map(|n| Value::Integer(n.into())));
    set(
        "dietary_restriction",
        patch.dietary_restriction.clone().map(Value::Text),
    );
    set("wishes", patch.wishes.clone().map(Value::Text));
    set("checked_in", patch.checked_in.map(|b| Value::Integer(b.into())));
    set("checked_in_at", patch.checked_in_at.clone().map(Value::Text));
    set("qr_code_url", patch.qr_code_url.clone().map(Value::Text));
    set("submitted_at", patch.submitted_at.clone().map(Value::Text));

    let changed = if columns.is_empty() {
        let found: i64 = conn.query_row(
            "SELECT COUNT(*) FROM guests WHERE guest_id = ?1",
            params![guest_id],
            |row| row.get(0),
        )?;
        found as usize
    } else {
        let assignments: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ?{}", i + 2))
            .collect();
        let sql = format!(
            "UPDATE guests SET {} WHERE guest_id = ?1",
            assignments.join(", ")
        );
        let mut bound = Vec::with_capacity(values.len() + 1);
        bound.push(Value::Integer(guest_id));
        bound.extend(values);
        conn.execute(&sql, params_from_iter(bound))?
    };

    if changed == 0 {
        return Err(OperationError::guest_not_found(guest_id));
    }
    Ok(())
}

/// A guest's response submitted from their invitation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpSubmission {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rsvp_status: RsvpStatus,
    pub guest_count: u32,
    pub dietary_restriction: Option<String>,
    pub wishes: Option<String>,
}

/// Store an RSVP response and stamp `submitted_at`.
///
/// A declined guest keeps the minimum count of one; the schema has no room
/// for zero.
pub fn record_rsvp(
    conn: &Connection,
    guest_id: GuestId,
    rsvp: &RsvpSubmission,
    at: DateTime<Utc>,
) -> Result<(), OperationError> {
    let guest_count = match rsvp.rsvp_status {
        RsvpStatus::Declined => MIN_GUEST_COUNT,
        _ => rsvp.guest_count.max(MIN_GUEST_COUNT),
    };

    let patch = GuestPatch {
        full_name: Some(rsvp.full_name.clone()),
        email: rsvp.email.clone(),
        phone: rsvp.phone.clone(),
        rsvp_status: Some(rsvp.rsvp_status),
        guest_count: Some(guest_count),
        dietary_restriction: rsvp.dietary_restriction.clone(),
        wishes: rsvp.wishes.clone(),
        submitted_at: Some(timestamp(at)),
        ..GuestPatch::default()
    };
    update_guest(conn, guest_id, &patch)
}

/// Mark a guest as arrived.
pub fn check_in(conn: &Connection, guest_id: GuestId, at: DateTime<Utc>) -> Result<(), OperationError> {
    let patch = GuestPatch {
        checked_in: Some(true),
        checked_in_at: Some(timestamp(at)),
        ..GuestPatch::default()
    };
    update_guest(conn, guest_id, &patch)
}

/// `?start, ?start+1, …` for `count` parameters.
pub(crate) fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}
