//! guestbook CLI
//!
//! Command-line interface for importing guest lists from spreadsheets into
//! an invite database.

mod cli_types;
mod commands;
mod error;
mod logging;
mod progress;
mod settings;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction, InviteAction};
use commands::config::{run_config_path, run_config_set_db, run_config_show};
use commands::import::{ImportArgs, run_import};
use commands::invite::run_invite_add;
use commands::preview::run_preview;
use commands::stats::run_stats;
use commands::template::run_template;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    // JSON goes to stdout, so everything else moves out of its way.
    let json_output = matches!(cli.command, Commands::Import { json: true, .. });
    if let Err(e) = logging::init(cli.verbose, cli.quiet, json_output, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db = || settings::resolve_db_path(cli.db.clone()).0;

    match cli.command {
        Commands::Preview { file, limit } => run_preview(&file, limit),
        Commands::Import {
            file,
            invite,
            dry_run,
            json,
            qr_url,
        } => run_import(
            ImportArgs {
                file,
                invite,
                dry_run,
                json,
                qr_url,
                quiet: cli.quiet,
            },
            &db(),
        ),
        Commands::Template { format, output } => run_template(format, output.as_deref()),
        Commands::Stats { invite } => run_stats(&invite, &db()),
        Commands::Invite { action } => match action {
            InviteAction::Add { id, slug, title } => {
                run_invite_add(&id, &slug, title.as_deref(), &db())
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(cli.db.clone()),
            ConfigAction::Path => run_config_path(),
            ConfigAction::SetDb { path } => run_config_set_db(&path),
        },
    }
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
