use std::path::Path;

use guestbook_core::CandidateGuest;
use guestbook_sheet::{parse_guest_path, preview};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::print_messages;
use crate::CliError;

/// Parse a guest list and print the first `limit` guests with totals.
pub(crate) fn run_preview(file: &Path, limit: usize) -> Result<(), CliError> {
    let outcome = parse_guest_path(file)?;
    log::debug!("Column mapping: {:?}", outcome.column_mapping);

    log::info!(
        "{} {}",
        "Guest list:".if_supports_color(Stdout, |t| t.bold()),
        file.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    let view = preview(&outcome.guests, limit);
    for guest in &view.rows {
        log::info!("  {}", format_guest_line(guest));
    }
    if view.has_more {
        log::info!(
            "  {}",
            format!("... and {} more", view.summary.total_guests - view.rows.len())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let s = &view.summary;
    log::info!(
        "Guests: {}, expected attendance: {}, with phone: {}, average party: {:.1}",
        s.total_guests.if_supports_color(Stdout, |t| t.bold()),
        s.total_guest_count,
        s.with_phone,
        s.avg_guest_count,
    );

    print_messages(&outcome.errors, &outcome.warnings);
    Ok(())
}

/// One guest as a fixed-width line: row, name, phone, count.
pub(crate) fn format_guest_line(guest: &CandidateGuest) -> String {
    let phone = if guest.phone.is_empty() {
        "-"
    } else {
        guest.phone.as_str()
    };
    format!(
        "{:>4}  {:<30} {:<16} {}",
        guest.row_number,
        guest.full_name,
        phone,
        describe_count(guest)
    )
}

fn describe_count(guest: &CandidateGuest) -> String {
    match (guest.guest_count, &guest.original_guest_count_value) {
        (Some(n), _) => n.to_string(),
        (None, Some(raw)) => format!("invalid ({raw})"),
        (None, None) => "invalid".to_string(),
    }
}
