//! Core data model for guest-list ingestion.
//!
//! These types are shared by the sheet parser, the persistence layer, and the
//! import coordinator. Nothing in this crate performs I/O.

pub mod guest;
pub mod outcome;
pub mod table;

pub use guest::{
    CandidateGuest, ColumnMapping, DuplicateGuest, GuestField, GuestId, GuestPatch, NewGuest,
    ParseRsvpStatusError, PersistedGuest, RsvpStatus, ValidationResult,
};
pub use outcome::{ImportResult, RollbackOutcome};
pub use table::{Cell, RawTable, row_is_blank};

/// Lowest guest count a persisted guest may carry.
pub const MIN_GUEST_COUNT: u32 = 1;

/// Counts above this are capped during normalization.
pub const MAX_GUEST_COUNT: u32 = 20;
