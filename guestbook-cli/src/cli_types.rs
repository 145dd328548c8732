//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "guestbook")]
#[command(about = "Import and manage wedding guest lists", long_about = None)]
pub(crate) struct Cli {
    /// SQLite database to use (defaults to the configured path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Parse a guest list and show what would be imported
    Preview {
        /// CSV, XLSX, or XLS file
        file: PathBuf,

        /// Number of guests to list
        #[arg(short, long, default_value_t = guestbook_sheet::preview::DEFAULT_PREVIEW_LIMIT)]
        limit: usize,
    },

    /// Import a guest list into an invite
    Import {
        /// CSV, XLSX, or XLS file
        file: PathBuf,

        /// Invite the guests belong to
        #[arg(short, long)]
        invite: String,

        /// Parse and check the file without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Print the import result as JSON
        #[arg(long)]
        json: bool,

        /// URL template for guest QR codes, containing `{guest_id}`
        #[arg(long)]
        qr_url: Option<String>,
    },

    /// Write a blank guest list template
    Template {
        #[arg(short, long, value_enum, default_value_t = TemplateFormat::Xlsx)]
        format: TemplateFormat,

        /// Output file (default: guest-list-template.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show guest and RSVP statistics for an invite
    Stats {
        #[arg(short, long)]
        invite: String,
    },

    /// Manage invites
    Invite {
        #[command(subcommand)]
        action: InviteAction,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TemplateFormat {
    Csv,
    Xlsx,
}

impl TemplateFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum InviteAction {
    /// Create an invite
    Add {
        /// Invite id
        id: String,

        /// Public URL slug for the invite
        #[arg(long)]
        slug: String,

        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the database in use
    Show,

    /// Print the settings file path
    Path,

    /// Save the default database path
    SetDb {
        path: PathBuf,
    },
}
