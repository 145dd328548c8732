use std::path::{Path, PathBuf};

use guestbook_core::{ImportResult, RollbackOutcome};
use guestbook_import::{ImportOptions, UrlTemplateQr, import_guests, validate_for_import};
use guestbook_sheet::{parse_guest_path, preview};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::preview::format_guest_line;
use super::{open_store, print_messages, require_invite, runtime};
use crate::CliError;
use crate::progress::BarProgress;

pub(crate) struct ImportArgs {
    pub file: PathBuf,
    pub invite: String,
    pub dry_run: bool,
    pub json: bool,
    pub qr_url: Option<String>,
    pub quiet: bool,
}

/// Parse, check, and import a guest list.
pub(crate) fn run_import(args: ImportArgs, db: &Path) -> Result<(), CliError> {
    let outcome = parse_guest_path(&args.file)?;
    if !args.json {
        print_messages(&outcome.errors, &outcome.warnings);
    }
    if outcome.guests.is_empty() {
        return Err(CliError::sheet(format!(
            "No importable guests in {}",
            args.file.display()
        )));
    }

    let check = validate_for_import(&outcome.guests);
    if !check.valid {
        print_messages(&check.errors, &check.warnings);
        return Err(CliError::sheet("Guest list failed pre-import checks"));
    }
    for w in &check.warnings {
        log::debug!("{}", w);
    }

    if args.dry_run {
        return report_dry_run(&outcome, args.json);
    }

    let store = open_store(db)?;
    let invite = require_invite(&store, &args.invite)?;
    log::info!(
        "Importing {} guest(s) into {}",
        outcome.guests.len(),
        invite.slug.if_supports_color(Stdout, |t| t.cyan()),
    );

    let progress = BarProgress::new(args.quiet || args.json);
    let options = ImportOptions::new().with_progress(&progress);
    let rt = runtime()?;
    let result = match args.qr_url {
        Some(template) => {
            let qr = UrlTemplateQr::new(template);
            rt.block_on(import_guests(
                &store,
                &outcome.guests,
                &invite.id,
                &options.with_qr(&qr),
            ))?
        }
        None => rt.block_on(import_guests(&store, &outcome.guests, &invite.id, &options))?,
    };
    progress.finish();

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::other(format!("Failed to serialize result: {}", e)))?;
        println!("{json}");
    } else {
        report_result(&result);
    }

    if result.success {
        Ok(())
    } else {
        Err(CliError::other("Import did not complete"))
    }
}

fn report_dry_run(outcome: &guestbook_sheet::ParseOutcome, json: bool) -> Result<(), CliError> {
    if json {
        let json = serde_json::to_string_pretty(outcome)
            .map_err(|e| CliError::other(format!("Failed to serialize preview: {}", e)))?;
        println!("{json}");
        return Ok(());
    }

    let view = preview(&outcome.guests, outcome.guests.len());
    log::info!(
        "{}",
        "Dry run: nothing will be written".if_supports_color(Stdout, |t| t.bold()),
    );
    for guest in &view.rows {
        log::info!("  {}", format_guest_line(guest));
    }
    log::info!(
        "Would import {} guest(s), expected attendance {}",
        view.summary.total_guests,
        view.summary.total_guest_count,
    );
    Ok(())
}

fn report_result(result: &ImportResult) {
    let mark = if result.success {
        "\u{2714}".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "\u{2718}".if_supports_color(Stdout, |t| t.red()).to_string()
    };
    log::info!(
        "{} Imported {}, failed {}, duplicates {}",
        mark,
        result.imported.if_supports_color(Stdout, |t| t.bold()),
        result.failed,
        result.duplicates.len(),
    );

    for d in &result.duplicates {
        let contact = d
            .phone
            .as_deref()
            .or(d.email.as_deref())
            .unwrap_or_default();
        log::info!(
            "  {} {} ({})",
            "=".if_supports_color(Stdout, |t| t.dimmed()),
            d.full_name,
            contact,
        );
    }

    match &result.rollback {
        Some(RollbackOutcome::RolledBack { deleted }) => {
            log::warn!("Rolled back {} guest(s)", deleted);
        }
        Some(RollbackOutcome::Failed { error }) => {
            log::error!(
                "Rollback failed ({}); these guest ids may need manual cleanup: {:?}",
                error,
                result.guest_ids,
            );
        }
        None => {}
    }

    print_messages(&result.errors, &result.warnings);
}
