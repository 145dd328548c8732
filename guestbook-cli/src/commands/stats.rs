use std::path::Path;

use chrono::Utc;
use guestbook_db::invite_stats;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{open_store, require_invite};
use crate::CliError;

/// Print guest and RSVP counts for an invite.
pub(crate) fn run_stats(invite_id: &str, db: &Path) -> Result<(), CliError> {
    let store = open_store(db)?;
    let invite = require_invite(&store, invite_id)?;
    let stats = invite_stats(store.connection(), &invite.id, Utc::now())?;

    log::info!(
        "{} {}",
        invite
            .title
            .as_deref()
            .unwrap_or(&invite.slug)
            .if_supports_color(Stdout, |t| t.bold()),
        format!("({})", invite.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("");
    log::info!("  Guests:              {}", stats.total_guests);
    log::info!("  Expected attendance: {}", stats.total_attendance);
    log::info!("  Added in last 24h:   {}", stats.recent);
    log::info!("");
    log::info!(
        "  RSVP: {} confirmed, {} declined, {} pending, {} no response",
        stats.confirmed.if_supports_color(Stdout, |t| t.green()),
        stats.declined.if_supports_color(Stdout, |t| t.red()),
        stats.pending.if_supports_color(Stdout, |t| t.yellow()),
        stats.no_response,
    );
    log::info!(
        "  Checked in: {} of {}",
        stats.checked_in.if_supports_color(Stdout, |t| t.bold()),
        stats.total_guests,
    );
    Ok(())
}
