use guestbook_core::{CandidateGuest, MIN_GUEST_COUNT};
use serde::Serialize;

/// Rows shown when no limit is given.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// The first few parsed guests plus totals over the whole list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub rows: Vec<CandidateGuest>,
    pub has_more: bool,
    pub summary: PreviewSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewSummary {
    pub total_guests: usize,
    /// Expected attendance; a guest with no valid count counts as one.
    pub total_guest_count: u64,
    pub with_phone: usize,
    /// Rounded to one decimal place. Zero for an empty list.
    pub avg_guest_count: f64,
}

/// Summarize parsed guests for display before import.
pub fn preview(guests: &[CandidateGuest], limit: usize) -> Preview {
    let total_guest_count: u64 = guests
        .iter()
        .map(|g| u64::from(g.guest_count.unwrap_or(MIN_GUEST_COUNT)))
        .sum();

    let avg_guest_count = if guests.is_empty() {
        0.0
    } else {
        (total_guest_count as f64 / guests.len() as f64 * 10.0).round() / 10.0
    };

    Preview {
        rows: guests.iter().take(limit).cloned().collect(),
        has_more: guests.len() > limit,
        summary: PreviewSummary {
            total_guests: guests.len(),
            total_guest_count,
            with_phone: guests.iter().filter(|g| !g.phone.is_empty()).count(),
            avg_guest_count,
        },
    }
}
