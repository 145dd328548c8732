use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::*;
use crate::cli_types::TemplateFormat;

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn import_arguments() {
    let cli = Cli::try_parse_from([
        "guestbook", "import", "guests.xlsx", "--invite", "inv-1", "--dry-run", "--json",
    ])
    .unwrap();
    match cli.command {
        Commands::Import {
            file,
            invite,
            dry_run,
            json,
            qr_url,
        } => {
            assert_eq!(file, PathBuf::from("guests.xlsx"));
            assert_eq!(invite, "inv-1");
            assert!(dry_run);
            assert!(json);
            assert_eq!(qr_url, None);
        }
        _ => panic!("expected import"),
    }
}

#[test]
fn import_requires_invite() {
    assert!(Cli::try_parse_from(["guestbook", "import", "guests.csv"]).is_err());
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "guestbook", "stats", "--invite", "inv-1", "--db", "/tmp/g.db", "--quiet",
    ])
    .unwrap();
    assert_eq!(cli.db, Some(PathBuf::from("/tmp/g.db")));
    assert!(cli.quiet);
    assert!(!cli.verbose);
}

#[test]
fn template_defaults_to_xlsx() {
    let cli = Cli::try_parse_from(["guestbook", "template"]).unwrap();
    match cli.command {
        Commands::Template { format, output } => {
            assert_eq!(format, TemplateFormat::Xlsx);
            assert_eq!(output, None);
        }
        _ => panic!("expected template"),
    }

    let cli = Cli::try_parse_from(["guestbook", "template", "--format", "csv", "-o", "t.csv"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Template {
            format: TemplateFormat::Csv,
            ..
        }
    ));
}

#[test]
fn preview_limit_default() {
    let cli = Cli::try_parse_from(["guestbook", "preview", "list.csv"]).unwrap();
    assert!(matches!(cli.command, Commands::Preview { limit: 10, .. }));
}

#[test]
fn invite_and_config_subcommands() {
    let cli = Cli::try_parse_from([
        "guestbook", "invite", "add", "inv-1", "--slug", "ana-budi", "--title", "Ana & Budi",
    ])
    .unwrap();
    match cli.command {
        Commands::Invite {
            action: InviteAction::Add { id, slug, title },
        } => {
            assert_eq!(id, "inv-1");
            assert_eq!(slug, "ana-budi");
            assert_eq!(title.as_deref(), Some("Ana & Budi"));
        }
        _ => panic!("expected invite add"),
    }

    let cli = Cli::try_parse_from(["guestbook", "config", "set-db", "g.db"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::SetDb { .. }
        }
    ));
}
