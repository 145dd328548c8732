use std::path::{Path, PathBuf};

use guestbook_sheet::{csv_template, xlsx_template};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::TemplateFormat;

const DEFAULT_STEM: &str = "guest-list-template";

pub(crate) fn default_output(format: TemplateFormat) -> PathBuf {
    PathBuf::from(format!("{DEFAULT_STEM}.{}", format.extension()))
}

/// Write a blank guest list with the expected headers and one sample row.
pub(crate) fn run_template(format: TemplateFormat, output: Option<&Path>) -> Result<(), CliError> {
    let path = output.map_or_else(|| default_output(format), Path::to_path_buf);

    let bytes = match format {
        TemplateFormat::Csv => csv_template().map(String::into_bytes),
        TemplateFormat::Xlsx => xlsx_template(),
    }
    .map_err(|e| CliError::other(format!("Failed to build template: {}", e)))?;

    std::fs::write(&path, bytes)?;
    log::info!(
        "{} Wrote template to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_follow_format() {
        assert_eq!(
            default_output(TemplateFormat::Csv),
            PathBuf::from("guest-list-template.csv")
        );
        assert_eq!(
            default_output(TemplateFormat::Xlsx),
            PathBuf::from("guest-list-template.xlsx")
        );
    }

    #[test]
    fn csv_template_is_readable_as_guest_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        run_template(TemplateFormat::Csv, Some(&path)).unwrap();

        let outcome = guestbook_sheet::parse_guest_path(&path).unwrap();
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.column_mapping.name, Some(0));
    }
}
