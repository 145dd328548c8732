//! Import parsed guest lists into an invite.
//!
//! This crate owns the write side of ingestion: slug assignment, duplicate
//! detection against stored guests, batched inserts with partial-failure
//! tolerance, rollback on fatal errors, and the optional QR-code step.

pub mod importer;
pub mod precheck;
pub mod progress;
pub mod qr;
pub mod slug;

pub use importer::{BATCH_SIZE, ImportError, ImportOptions, ImportPhase, import_guests};
pub use precheck::{ImportValidation, validate_for_import};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use qr::{QR_CONCURRENCY, QrCodeSource, QrError, UrlTemplateQr, attach_qr_codes};
pub use slug::{MAX_SLUG_LEN, SlugAllocator, short_hash, slug_for_name};
