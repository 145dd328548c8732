//! SQLite persistence layer for invites and their guests.
//!
//! Provides schema creation, CRUD operations, read queries, and
//! [`SqliteStore`], the [`GuestStore`] implementation the importer writes
//! through.

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{
    OperationError, RsvpSubmission, check_in, delete_guests, insert_guests, insert_invite,
    record_rsvp, timestamp, update_guest,
};
pub use queries::{
    Invite, InviteStats, find_existing, find_guest, find_invite, guests_for_invite, invite_stats,
};
pub use schema::{SchemaError, open_database, open_memory};
pub use store::{GuestStore, SqliteStore, StoreError};
