//! Terminal progress bar for imports.

use guestbook_import::{ImportPhase, ImportProgress};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Shows import phases and the share of guests written.
pub(crate) struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    /// When `quiet` is true the bar is hidden.
    pub fn new(quiet: bool) -> Self {
        let bar = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stderr());
        if quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(style) = ProgressStyle::with_template("  {bar:30.cyan/blue} {pos:>3}% {msg}") {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ImportProgress for BarProgress {
    fn on_phase(&self, phase: ImportPhase) {
        self.bar.set_message(phase.to_string());
        log::debug!("{}", phase);
    }

    fn on_percent(&self, percent: u8) {
        self.bar.set_position(u64::from(percent));
    }
}
