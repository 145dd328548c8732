use serde::{Deserialize, Serialize};

use crate::guest::{DuplicateGuest, GuestId};

/// Summary of one import call.
///
/// The caller always gets counts and messages back, even when some batches
/// failed or the import was rolled back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    /// True iff at least one guest was imported and no rollback happened.
    pub success: bool,
    pub imported: usize,
    pub failed: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Candidates skipped because a guest with the same email or phone exists.
    pub duplicates: Vec<DuplicateGuest>,
    /// Ids of every guest inserted by this call, in batch order.
    pub guest_ids: Vec<GuestId>,
    /// Set when a fatal error triggered cleanup of already inserted guests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback: Option<RollbackOutcome>,
}

/// What happened when an import tried to undo its inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RollbackOutcome {
    /// Every inserted guest was deleted.
    RolledBack { deleted: usize },
    /// The delete failed. Manual cleanup is needed; the ids are kept in `guest_ids`.
    Failed { error: String },
}

impl ImportResult {
    pub fn rolled_back(&self) -> bool {
        matches!(self.rollback, Some(RollbackOutcome::RolledBack { .. }))
    }
}
