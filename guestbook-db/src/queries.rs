//! Read queries for the guest database.

use chrono::{DateTime, Duration, Utc};
use guestbook_core::{DuplicateGuest, GuestId, PersistedGuest, RsvpStatus};
use rusqlite::{Connection, params, params_from_iter};

use crate::operations::{OperationError, placeholders, timestamp};

const GUEST_COLUMNS: &str = "guest_id, invite_id, full_name, slug, email, phone, rsvp_status,
     guest_count, dietary_restriction, wishes, checked_in, checked_in_at, qr_code_url,
     created_at, submitted_at";

// ── Invite Lookups ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    pub id: String,
    pub slug: String,
    pub title: Option<String>,
    pub created_at: String,
}

pub fn find_invite(conn: &Connection, id: &str) -> Result<Option<Invite>, OperationError> {
    let result = conn.query_row(
        "SELECT id, slug, title, created_at FROM invites WHERE id = ?1",
        params![id],
        |row| {
            Ok(Invite {
                id: row.get(0)?,
                slug: row.get(1)?,
                title: row.get(2)?,
                created_at: row.get(3)?,
            })
        },
    );
    match result {
        Ok(invite) => Ok(Some(invite)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Guest Lookups ───────────────────────────────────────────────────────────

/// Guests of an invite that share an email or phone with the given lists.
///
/// Empty strings are ignored. Every value is bound as a parameter.
pub fn find_existing(
    conn: &Connection,
    invite_id: &str,
    emails: &[String],
    phones: &[String],
) -> Result<Vec<DuplicateGuest>, OperationError> {
    let emails: Vec<&String> = emails.iter().filter(|e| !e.is_empty()).collect();
    let phones: Vec<&String> = phones.iter().filter(|p| !p.is_empty()).collect();
    if emails.is_empty() && phones.is_empty() {
        return Ok(Vec::new());
    }

    let mut conditions = Vec::new();
    let mut next = 2;
    if !emails.is_empty() {
        conditions.push(format!("email IN ({})", placeholders(next, emails.len())));
        next += emails.len();
    }
    if !phones.is_empty() {
        conditions.push(format!("phone IN ({})", placeholders(next, phones.len())));
    }

    let sql = format!(
        "SELECT guest_id, full_name, email, phone FROM guests
         WHERE invite_id = ?1 AND ({})
         ORDER BY guest_id",
        conditions.join(" OR ")
    );

    let bound = std::iter::once(invite_id)
        .chain(emails.iter().map(|e| e.as_str()))
        .chain(phones.iter().map(|p| p.as_str()));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(bound), |row| {
        Ok(DuplicateGuest {
            guest_id: row.get(0)?,
            full_name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// All guests of an invite in insertion order.
pub fn guests_for_invite(
    conn: &Connection,
    invite_id: &str,
) -> Result<Vec<PersistedGuest>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {GUEST_COLUMNS} FROM guests WHERE invite_id = ?1 ORDER BY guest_id"
    ))?;
    let rows = stmt.query_map(params![invite_id], row_to_guest)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn find_guest(
    conn: &Connection,
    guest_id: GuestId,
) -> Result<Option<PersistedGuest>, OperationError> {
    let result = conn.query_row(
        &format!("SELECT {GUEST_COLUMNS} FROM guests WHERE guest_id = ?1"),
        params![guest_id],
        row_to_guest,
    );
    match result {
        Ok(guest) => Ok(Some(guest)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// How long a guest counts as recently imported.
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// Summary of an invite's guest list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InviteStats {
    pub total_guests: i64,
    /// Sum of guest counts: the expected head count.
    pub total_attendance: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub declined: i64,
    pub no_response: i64,
    pub checked_in: i64,
    /// Guests created within the last 24 hours before `now`.
    pub recent: i64,
}

pub fn invite_stats(
    conn: &Connection,
    invite_id: &str,
    now: DateTime<Utc>,
) -> Result<InviteStats, OperationError> {
    let since = timestamp(now - Duration::hours(RECENT_WINDOW_HOURS));

    let mut stats = conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(guest_count), 0),
                COALESCE(SUM(checked_in), 0),
                COALESCE(SUM(created_at > ?2), 0)
         FROM guests WHERE invite_id = ?1",
        params![invite_id, since],
        |row| {
            Ok(InviteStats {
                total_guests: row.get(0)?,
                total_attendance: row.get(1)?,
                checked_in: row.get(2)?,
                recent: row.get(3)?,
                ..InviteStats::default()
            })
        },
    )?;

    let mut stmt = conn.prepare(
        "SELECT rsvp_status, COUNT(*) FROM guests WHERE invite_id = ?1 GROUP BY rsvp_status",
    )?;
    let rows = stmt.query_map(params![invite_id], |row| {
        Ok((row.get::<_, Option<String>>(0)?, row.get::<_, i64>(1)?))
    })?;
    for row in rows {
        let (status, count) = row?;
        match status.as_deref().map(str::parse::<RsvpStatus>) {
            Some(Ok(RsvpStatus::Pending)) => stats.pending += count,
            Some(Ok(RsvpStatus::Confirmed)) => stats.confirmed += count,
            Some(Ok(RsvpStatus::Declined)) => stats.declined += count,
            Some(Err(_)) | None => stats.no_response += count,
        }
    }

    Ok(stats)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_guest(row: &rusqlite::Row<'_>) -> rusqlite::Result<PersistedGuest> {
    let status: Option<String> = row.get(6)?;
    Ok(PersistedGuest {
        guest_id: row.get(0)?,
        invite_id: row.get(1)?,
        full_name: row.get(2)?,
        slug: row.get(3)?,
        email: row.get(4)?,
        phone: row.get(5)?,
        rsvp_status: status.and_then(|s| s.parse().ok()),
        guest_count: row.get(7)?,
        dietary_restriction: row.get(8)?,
        wishes: row.get(9)?,
        checked_in: row.get(10)?,
        checked_in_at: row.get(11)?,
        qr_code_url: row.get(12)?,
        created_at: row.get(13)?,
        submitted_at: row.get(14)?,
    })
}

