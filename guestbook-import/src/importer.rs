//! Import candidate guests into an invite through a [`GuestStore`].
//!
//! The import runs in phases: name validation, duplicate detection against
//! already stored guests, slug assignment, and batched inserts. A failing
//! batch is recorded and the next batch still runs; only a fatal store
//! error (or a failed duplicate check) aborts the import, in which case
//! everything inserted so far is deleted again.

use guestbook_core::{
    CandidateGuest, ImportResult, MIN_GUEST_COUNT, NewGuest, RollbackOutcome,
};
use guestbook_db::{GuestStore, StoreError};
use guestbook_sheet::name_error;
use thiserror::Error;

use crate::progress::{ImportProgress, SilentProgress};
use crate::qr::{QrCodeSource, UrlTemplateQr, attach_qr_codes};
use crate::slug::SlugAllocator;

/// Guests written per store call.
pub const BATCH_SIZE: usize = 50;

pub const ALL_GUESTS_EXIST: &str = "All guests already exist in the database";
pub const CONSTRAINT_VIOLATION: &str =
    "Database constraint violation - some guests may already exist";
pub const QR_FAILED: &str = "QR code generation failed (guests imported successfully)";
pub const ROLLED_BACK: &str = "Import rolled back due to error";
pub const ROLLBACK_FAILED: &str = "Rollback failed - manual cleanup may be required";

/// Reasons an import is refused before anything is touched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("No guests to import")]
    NoGuests,
    #[error("Invite ID is required")]
    MissingInvite,
}

/// Failures that end an import early and trigger a rollback.
#[derive(Debug, Error)]
enum Abort {
    #[error("Duplicate check failed: {0}")]
    DuplicateCheck(StoreError),
    #[error("Batch {batch}: {source}")]
    Batch { batch: usize, source: StoreError },
}

/// Where an import currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPhase {
    Validating,
    DuplicateChecking,
    Batching,
    PartiallyImported,
    Imported,
    RolledBack,
}

impl std::fmt::Display for ImportPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Validating => "Validating guests",
            Self::DuplicateChecking => "Checking for existing guests",
            Self::Batching => "Writing guests",
            Self::PartiallyImported => "Import finished with failures",
            Self::Imported => "Import finished",
            Self::RolledBack => "Import rolled back",
        })
    }
}

/// Knobs for [`import_guests`].
pub struct ImportOptions<'a, Q = UrlTemplateQr> {
    pub batch_size: usize,
    pub progress: Option<&'a dyn ImportProgress>,
    /// Source of QR-code URLs. Without one, the QR step is skipped.
    pub qr: Option<&'a Q>,
}

impl<'a> ImportOptions<'a> {
    pub fn new() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            progress: None,
            qr: None,
        }
    }
}

impl Default for ImportOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Q> ImportOptions<'a, Q> {
    pub fn with_progress(mut self, progress: &'a dyn ImportProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_qr<R: QrCodeSource>(self, qr: &'a R) -> ImportOptions<'a, R> {
        ImportOptions {
            batch_size: self.batch_size,
            progress: self.progress,
            qr: Some(qr),
        }
    }
}

/// Import guests into `invite_id`.
///
/// Returns `Err` only when the call is refused up front. Everything that
/// happens once writing has started is reported in the [`ImportResult`].
pub async fn import_guests<S, Q>(
    store: &S,
    guests: &[CandidateGuest],
    invite_id: &str,
    options: &ImportOptions<'_, Q>,
) -> Result<ImportResult, ImportError>
where
    S: GuestStore,
    Q: QrCodeSource,
{
    if guests.is_empty() {
        return Err(ImportError::NoGuests);
    }
    if invite_id.trim().is_empty() {
        return Err(ImportError::MissingInvite);
    }

    let progress = options.progress.unwrap_or(&SilentProgress);
    let mut result = ImportResult::default();

    if let Err(abort) = run(store, guests, invite_id, options, progress, &mut result).await {
        log::error!("Import into {} failed: {}", invite_id, abort);
        result.success = false;
        result.errors.push(abort.to_string());
        rollback(store, &mut result).await;
        progress.on_phase(ImportPhase::RolledBack);
    }

    Ok(result)
}

async fn run<S, Q>(
    store: &S,
    guests: &[CandidateGuest],
    invite_id: &str,
    options: &ImportOptions<'_, Q>,
    progress: &dyn ImportProgress,
    result: &mut ImportResult,
) -> Result<(), Abort>
where
    S: GuestStore,
    Q: QrCodeSource,
{
    progress.on_phase(ImportPhase::Validating);
    let mut candidates = Vec::with_capacity(guests.len());
    for guest in guests {
        match name_error(guest.full_name.trim()) {
            None => candidates.push(guest),
            Some(error) => {
                result.failed += 1;
                result.errors.push(format!("Row {}: {}", guest.row_number, error));
            }
        }
    }
    if candidates.is_empty() {
        return Ok(());
    }

    progress.on_phase(ImportPhase::DuplicateChecking);
    let emails = non_blank_values(candidates.iter().map(|g| g.email.as_str()));
    let phones = non_blank_values(candidates.iter().map(|g| g.phone.as_str()));
    let existing = store
        .find_existing(invite_id, &emails, &phones)
        .await
        .map_err(Abort::DuplicateCheck)?;

    if !existing.is_empty() {
        log::warn!("{} guest(s) already exist in {}", existing.len(), invite_id);
    }
    let to_import: Vec<&CandidateGuest> = candidates
        .into_iter()
        .filter(|g| !existing.iter().any(|d| d.matches(g)))
        .collect();
    result.duplicates = existing;

    if to_import.is_empty() {
        result.success = true;
        result.errors.push(ALL_GUESTS_EXIST.to_string());
        return Ok(());
    }

    let mut slugs = SlugAllocator::new();
    let prepared: Vec<NewGuest> = to_import
        .iter()
        .map(|g| NewGuest {
            invite_id: invite_id.to_string(),
            full_name: g.full_name.trim().to_string(),
            slug: slugs.allocate(&g.full_name),
            email: non_blank(&g.email),
            phone: non_blank(&g.phone),
            guest_count: g.guest_count.unwrap_or(MIN_GUEST_COUNT),
            dietary_restriction: non_blank(&g.dietary_restriction),
        })
        .collect();

    progress.on_phase(ImportPhase::Batching);
    let total = prepared.len();
    for (index, batch) in prepared.chunks(options.batch_size.max(1)).enumerate() {
        let number = index + 1;
        match store.insert_guests(batch).await {
            Ok(stored) => {
                result.imported += batch.len();
                result.guest_ids.extend(stored.iter().map(|g| g.guest_id));
                log::debug!("Batch {}: {} guest(s) written", number, batch.len());
                progress.on_percent(percent(result.imported, total));
            }
            Err(e) if e.is_fatal() => {
                result.failed += batch.len();
                return Err(Abort::Batch {
                    batch: number,
                    source: e,
                });
            }
            Err(e) => {
                log::warn!("Batch {} failed: {}", number, e);
                result.failed += batch.len();
                result.errors.push(format!("Batch {number}: {e}"));
                if e.is_constraint() {
                    result.errors.push(CONSTRAINT_VIOLATION.to_string());
                }
            }
        }
    }

    if let Some(qr) = options.qr
        && !result.guest_ids.is_empty()
    {
        if let Err(e) = attach_qr_codes(store, qr, &result.guest_ids).await {
            log::warn!("QR step failed: {}", e);
            result.warnings.push(QR_FAILED.to_string());
        }
    }

    result.success = result.imported > 0;
    progress.on_phase(if result.failed > 0 {
        ImportPhase::PartiallyImported
    } else {
        ImportPhase::Imported
    });
    progress.on_percent(100);
    log::info!(
        "Imported {} guest(s) into {}, {} failed, {} duplicate(s)",
        result.imported,
        invite_id,
        result.failed,
        result.duplicates.len()
    );

    Ok(())
}

/// Delete every guest this import inserted. Attempted once.
async fn rollback<S: GuestStore>(store: &S, result: &mut ImportResult) {
    if result.guest_ids.is_empty() {
        return;
    }

    match store.delete_guests(&result.guest_ids).await {
        Ok(deleted) => {
            log::info!("Rolled back {} guest(s)", deleted);
            result.errors.push(ROLLED_BACK.to_string());
            result.rollback = Some(RollbackOutcome::RolledBack { deleted });
        }
        Err(e) => {
            log::error!("Rollback failed: {}", e);
            result.errors.push(ROLLBACK_FAILED.to_string());
            result.rollback = Some(RollbackOutcome::Failed {
                error: e.to_string(),
            });
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn non_blank_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values.filter_map(non_blank).collect()
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((done as f64 / total as f64) * 100.0).round() as u8
}
