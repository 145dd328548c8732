use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{load_settings_string, resolve_db_path, save_db_path, settings_path};

/// Show the settings file and which database commands will use.
pub(crate) fn run_config_show(db_flag: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "Guestbook Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let (db, source) = resolve_db_path(db_flag);
    log::info!(
        "  Database:      {} {}",
        db.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = load_settings_string(&path) {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Save the default database path in the settings file.
pub(crate) fn run_config_set_db(db: &Path) -> Result<(), CliError> {
    let db = if db.is_absolute() {
        db.to_path_buf()
    } else {
        std::env::current_dir()?.join(db)
    };

    let path = settings_path();
    save_db_path(&path, &db)
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;

    log::info!(
        "{} Default database set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        db.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
