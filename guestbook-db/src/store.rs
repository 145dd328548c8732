//! The persistence seam used by the importer.
//!
//! [`GuestStore`] is the narrow async contract the import coordinator
//! writes through. [`SqliteStore`] implements it over a rusqlite
//! connection; tests substitute their own implementations to inject
//! failures.

use std::path::Path;

use chrono::Utc;
use guestbook_core::{DuplicateGuest, GuestId, GuestPatch, NewGuest, PersistedGuest};
use rusqlite::{Connection, ErrorCode};
use thiserror::Error;

use crate::operations::{self, OperationError};
use crate::queries;
use crate::schema::{self, SchemaError};

/// Failures reported by a [`GuestStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(rusqlite::Error),

    /// A uniqueness, check, or foreign-key rule rejected the write.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Another connection held the database past the busy timeout.
    #[error("Store timed out: {0}")]
    Timeout(String),

    /// The store cannot be reached at all. Aborts an import.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Errors that make continuing an import pointless.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
                ErrorCode::ConstraintViolation => Self::Constraint(e.to_string()),
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
                    Self::Timeout(e.to_string())
                }
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::ReadOnly
                | ErrorCode::SystemIoFailure => Self::Unavailable(e.to_string()),
                _ => Self::Sqlite(e),
            },
            _ => Self::Sqlite(e),
        }
    }
}

impl From<OperationError> for StoreError {
    fn from(e: OperationError) -> Self {
        match e {
            OperationError::Sqlite(inner) => inner.into(),
            OperationError::NotFound { entity_type, id } => {
                Self::NotFound(format!("{entity_type} '{id}'"))
            }
        }
    }
}

impl From<SchemaError> for StoreError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::Sqlite(inner) => inner.into(),
            other => Self::Unavailable(other.to_string()),
        }
    }
}

/// Persistence operations the importer needs.
#[allow(async_fn_in_trait)]
pub trait GuestStore {
    /// Insert guests atomically and return the stored rows in input order.
    async fn insert_guests(&self, guests: &[NewGuest]) -> Result<Vec<PersistedGuest>, StoreError>;

    /// Guests of `invite_id` sharing a non-empty email or phone with the lists.
    async fn find_existing(
        &self,
        invite_id: &str,
        emails: &[String],
        phones: &[String],
    ) -> Result<Vec<DuplicateGuest>, StoreError>;

    /// Delete guests by id, returning how many were removed.
    async fn delete_guests(&self, guest_ids: &[GuestId]) -> Result<usize, StoreError>;

    async fn update_guest(&self, guest_id: GuestId, patch: &GuestPatch) -> Result<(), StoreError>;
}

/// A [`GuestStore`] backed by a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open (creating or migrating as needed) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(schema::open_database(path)?))
    }

    pub fn open_memory() -> Result<Self, StoreError> {
        Ok(Self::new(schema::open_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl GuestStore for SqliteStore {
    async fn insert_guests(&self, guests: &[NewGuest]) -> Result<Vec<PersistedGuest>, StoreError> {
        Ok(operations::insert_guests(&self.conn, guests, Utc::now())?)
    }

    async fn find_existing(
        &self,
        invite_id: &str,
        emails: &[String],
        phones: &[String],
    ) -> Result<Vec<DuplicateGuest>, StoreError> {
        Ok(queries::find_existing(&self.conn, invite_id, emails, phones)?)
    }

    async fn delete_guests(&self, guest_ids: &[GuestId]) -> Result<usize, StoreError> {
        Ok(operations::delete_guests(&self.conn, guest_ids)?)
    }

    async fn update_guest(&self, guest_id: GuestId, patch: &GuestPatch) -> Result<(), StoreError> {
        Ok(operations::update_guest(&self.conn, guest_id, patch)?)
    }
}
