//! Guest records at each stage of the pipeline: candidate rows parsed from a
//! file, insertable records, and rows already persisted for an invite.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned by the store when a guest row is inserted.
pub type GuestId = i64;

// ── Column mapping ──────────────────────────────────────────────────────────

/// Canonical fields a header column can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestField {
    Name,
    Phone,
    GuestCount,
}

impl GuestField {
    /// Resolution order: earlier fields claim columns first.
    pub const PRIORITY: [GuestField; 3] = [Self::Name, Self::Phone, Self::GuestCount];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::GuestCount => "guest_count",
        }
    }
}

impl std::fmt::Display for GuestField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which column index each canonical field was resolved to.
///
/// A field may be absent. No two fields share a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<usize>,
}

impl ColumnMapping {
    pub fn get(&self, field: GuestField) -> Option<usize> {
        match field {
            GuestField::Name => self.name,
            GuestField::Phone => self.phone,
            GuestField::GuestCount => self.guest_count,
        }
    }

    pub fn set(&mut self, field: GuestField, index: usize) {
        match field {
            GuestField::Name => self.name = Some(index),
            GuestField::Phone => self.phone = Some(index),
            GuestField::GuestCount => self.guest_count = Some(index),
        }
    }

    /// True if some field already claimed this column.
    pub fn is_claimed(&self, index: usize) -> bool {
        GuestField::PRIORITY
            .iter()
            .any(|f| self.get(*f) == Some(index))
    }
}

// ── Candidate ───────────────────────────────────────────────────────────────

/// A guest parsed from one row of an uploaded file, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateGuest {
    pub full_name: String,
    pub phone: String,
    /// `None` when the raw value could not be parsed.
    pub guest_count: Option<u32>,
    pub email: String,
    pub dietary_restriction: String,
    /// 1-based row number in the source file, header included.
    pub row_number: usize,
    pub invalid_guest_count: bool,
    pub original_guest_count_value: Option<String>,
}

impl CandidateGuest {
    /// An empty candidate for the given row with the default guest count of 1.
    pub fn new(row_number: usize) -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            guest_count: Some(crate::MIN_GUEST_COUNT),
            email: String::new(),
            dietary_restriction: String::new(),
            row_number,
            invalid_guest_count: false,
            original_guest_count_value: None,
        }
    }

    pub fn named(row_number: usize, full_name: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            ..Self::new(row_number)
        }
    }
}

/// Errors and warnings collected for a candidate or a whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

// ── RSVP ────────────────────────────────────────────────────────────────────

/// A guest's response. A guest that has not responded has no status at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Pending,
    Confirmed,
    Declined,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
        }
    }
}

impl std::fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown RSVP status: {0}")]
pub struct ParseRsvpStatusError(pub String);

impl FromStr for RsvpStatus {
    type Err = ParseRsvpStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "declined" => Ok(Self::Declined),
            _ => Err(ParseRsvpStatusError(s.to_string())),
        }
    }
}

// ── Persisted ───────────────────────────────────────────────────────────────

/// The insertable form of a candidate after slug assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGuest {
    pub invite_id: String,
    pub full_name: String,
    pub slug: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guest_count: u32,
    pub dietary_restriction: Option<String>,
}

/// A guest row as stored for an invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedGuest {
    pub guest_id: GuestId,
    pub invite_id: String,
    pub full_name: String,
    /// Unique within `invite_id`.
    pub slug: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// `None` until the guest responds.
    pub rsvp_status: Option<RsvpStatus>,
    pub guest_count: u32,
    pub dietary_restriction: Option<String>,
    pub wishes: Option<String>,
    pub checked_in: bool,
    pub checked_in_at: Option<String>,
    pub qr_code_url: Option<String>,
    pub created_at: String,
    pub submitted_at: Option<String>,
}

/// The subset of a persisted guest reported when an import skips a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGuest {
    pub guest_id: GuestId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl DuplicateGuest {
    /// True if the candidate shares a non-empty email or phone with this guest.
    pub fn matches(&self, candidate: &CandidateGuest) -> bool {
        let same_email = !candidate.email.is_empty()
            && self.email.as_deref() == Some(candidate.email.as_str());
        let same_phone = !candidate.phone.is_empty()
            && self.phone.as_deref() == Some(candidate.phone.as_str());
        same_email || same_phone
    }
}

impl From<&PersistedGuest> for DuplicateGuest {
    fn from(g: &PersistedGuest) -> Self {
        Self {
            guest_id: g.guest_id,
            full_name: g.full_name.clone(),
            email: g.email.clone(),
            phone: g.phone.clone(),
        }
    }
}

/// A partial update to a persisted guest. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rsvp_status: Option<RsvpStatus>,
    pub guest_count: Option<u32>,
    pub dietary_restriction: Option<String>,
    pub wishes: Option<String>,
    pub checked_in: Option<bool>,
    pub checked_in_at: Option<String>,
    pub qr_code_url: Option<String>,
    pub submitted_at: Option<String>,
}

impl GuestPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn qr_code(url: impl Into<String>) -> Self {
        Self {
            qr_code_url: Some(url.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "tests/guest_tests.rs"]
mod tests;
