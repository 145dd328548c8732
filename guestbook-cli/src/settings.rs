//! The settings file (`~/.config/guestbook/settings.toml`) and database
//! path resolution.

use std::io;
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "guestbook.db";

/// Canonical path to the settings file: `~/.config/guestbook/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("guestbook").join("settings.toml")
}

/// Database used when neither the flag nor the settings file name one.
pub(crate) fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("guestbook").join(DB_FILE_NAME)
}

/// Where a resolved database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DbSource {
    Flag,
    Settings,
    Default,
}

impl std::fmt::Display for DbSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Flag => "--db flag",
            Self::Settings => "settings file",
            Self::Default => "default",
        })
    }
}

/// Resolve the database path: `--db`, then `[database] path` in the
/// settings file, then the per-user data directory.
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>) -> (PathBuf, DbSource) {
    resolve_db_path_with(cli_override, &settings_path())
}

pub(crate) fn resolve_db_path_with(
    cli_override: Option<PathBuf>,
    settings: &Path,
) -> (PathBuf, DbSource) {
    if let Some(p) = cli_override {
        return (p, DbSource::Flag);
    }
    if let Some(p) = load_db_path(settings) {
        return (p, DbSource::Settings);
    }
    (default_db_path(), DbSource::Default)
}

/// Read `database.path` from a settings file, if set.
pub(crate) fn load_db_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save `database.path`, leaving every other key in the file untouched.
pub(crate) fn save_db_path(settings: &Path, db: &Path) -> io::Result<()> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default())),
        Err(_) => toml::Value::Table(Default::default()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;
    database.insert(
        "path".to_string(),
        toml::Value::String(db.to_string_lossy().into_owned()),
    );

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// The settings file pretty-printed for display.
pub(crate) fn load_settings_string(settings: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
