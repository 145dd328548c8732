//! Logger setup: `log` messages are the CLI's output.
//!
//! Normal runs print bare messages to stdout, or to stderr when stdout
//! carries machine-readable output. `--verbose` adds timestamps, levels,
//! and debug output; `--quiet` keeps only warnings and errors. With
//! `--logfile` every line is also written to a file, ANSI codes stripped.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

/// The terminal plus an optional plain-text copy.
struct Tee {
    to_stderr: bool,
    file: Option<File>,
}

impl Tee {
    fn terminal(&self) -> Box<dyn Write> {
        if self.to_stderr {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        }
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.terminal().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.terminal().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

pub(crate) fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. Call once, before any command runs.
pub(crate) fn init(
    verbose: bool,
    quiet: bool,
    to_stderr: bool,
    logfile: Option<&Path>,
) -> io::Result<()> {
    let file = logfile.map(File::create).transpose()?;
    let level = level_for(verbose, quiet);

    let mut builder = env_logger::Builder::new();
    // Dependencies only get to speak up about problems.
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("guestbook", level)
        .target(env_logger::Target::Pipe(Box::new(Tee { to_stderr, file })));

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.try_init().map_err(io::Error::other)
}
