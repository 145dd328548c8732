use std::path::Path;

use guestbook_db::insert_invite;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::open_store;
use crate::CliError;

/// Create an invite row guests can be imported into.
pub(crate) fn run_invite_add(
    id: &str,
    slug: &str,
    title: Option<&str>,
    db: &Path,
) -> Result<(), CliError> {
    let store = open_store(db)?;
    insert_invite(store.connection(), id, slug, title).map_err(|e| {
        if e.is_constraint_violation() {
            CliError::database(format!("An invite with id '{id}' or slug '{slug}' already exists"))
        } else {
            e.into()
        }
    })?;

    log::info!(
        "{} Created invite {} ({})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id.if_supports_color(Stdout, |t| t.bold()),
        slug.if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
