//! Attaching QR-code URLs to newly imported guests.
//!
//! Rendering QR images is someone else's job: a [`QrCodeSource`] only maps
//! a guest id to the URL of its code.

use futures::stream::{self, StreamExt};
use guestbook_core::{GuestId, GuestPatch};
use guestbook_db::GuestStore;
use thiserror::Error;

/// Lookups in flight at once.
pub const QR_CONCURRENCY: usize = 4;

#[derive(Debug, Error)]
#[error("QR code for guest {guest_id}: {message}")]
pub struct QrError {
    pub guest_id: GuestId,
    pub message: String,
}

#[allow(async_fn_in_trait)]
pub trait QrCodeSource {
    async fn qr_code_url(&self, guest_id: GuestId) -> Result<String, QrError>;
}

/// Builds URLs by substituting `{guest_id}` into a template.
#[derive(Debug, Clone)]
pub struct UrlTemplateQr {
    template: String,
}

impl UrlTemplateQr {
    pub const PLACEHOLDER: &'static str = "{guest_id}";

    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl QrCodeSource for UrlTemplateQr {
    async fn qr_code_url(&self, guest_id: GuestId) -> Result<String, QrError> {
        if !self.template.contains(Self::PLACEHOLDER) {
            return Err(QrError {
                guest_id,
                message: format!("URL template has no {} placeholder", Self::PLACEHOLDER),
            });
        }
        Ok(self
            .template
            .replace(Self::PLACEHOLDER, &guest_id.to_string()))
    }
}

/// Look up and store a QR URL for every guest.
///
/// Every guest is attempted even after a failure. Returns the number of
/// guests updated, or the first failure.
pub async fn attach_qr_codes<S, Q>(store: &S, source: &Q, guest_ids: &[GuestId]) -> Result<usize, QrError>
where
    S: GuestStore,
    Q: QrCodeSource,
{
    let results: Vec<Result<(), QrError>> = stream::iter(guest_ids.iter().copied())
        .map(|guest_id| async move {
            let url = source.qr_code_url(guest_id).await?;
            store
                .update_guest(guest_id, &GuestPatch::qr_code(url))
                .await
                .map_err(|e| QrError {
                    guest_id,
                    message: e.to_string(),
                })
        })
        .buffer_unordered(QR_CONCURRENCY)
        .collect()
        .await;

    let mut updated = 0;
    let mut first_error = None;
    for result in results {
        match result {
            Ok(()) => updated += 1,
            Err(e) => {
                log::warn!("{}", e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(updated),
    }
}
