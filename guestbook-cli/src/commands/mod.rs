pub(crate) mod config;
pub(crate) mod import;
pub(crate) mod invite;
pub(crate) mod preview;
pub(crate) mod stats;
pub(crate) mod template;

use std::path::Path;

use guestbook_db::{Invite, SqliteStore, find_invite};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Open (creating if needed) the database at `db`.
pub(crate) fn open_store(db: &Path) -> Result<SqliteStore, CliError> {
    if let Some(parent) = db.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    log::debug!("Using database {}", db.display());
    SqliteStore::open(db).map_err(|e| CliError::database(format!("{}: {}", db.display(), e)))
}

/// Look up an invite, failing with a hint when it does not exist.
pub(crate) fn require_invite(store: &SqliteStore, id: &str) -> Result<Invite, CliError> {
    match find_invite(store.connection(), id)? {
        Some(invite) => Ok(invite),
        None => {
            log::warn!("Run 'guestbook invite add {} --slug <slug>' to create it.", id);
            Err(CliError::unknown_invite(id))
        }
    }
}

/// Print row-level errors and warnings.
pub(crate) fn print_messages(errors: &[String], warnings: &[String]) {
    if !errors.is_empty() {
        log::warn!(
            "{}",
            format!("Errors ({}):", errors.len()).if_supports_color(Stdout, |t| t.red()),
        );
        for e in errors {
            log::warn!("  {} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
        }
    }
    if !warnings.is_empty() {
        log::info!(
            "{}",
            format!("Warnings ({}):", warnings.len()).if_supports_color(Stdout, |t| t.yellow()),
        );
        for w in warnings {
            log::info!("  {} {}", "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()), w);
        }
    }
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}
