use crate::importer::ImportPhase;

/// Callback trait for reporting progress during a guest import.
pub trait ImportProgress {
    /// Called when the import enters a new phase.
    fn on_phase(&self, phase: ImportPhase);

    /// Called with the share of guests written so far, 0 to 100.
    fn on_percent(&self, percent: u8);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_phase(&self, _phase: ImportPhase) {}
    fn on_percent(&self, _percent: u8) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_phase(&self, phase: ImportPhase) {
        log::info!("{}", phase);
    }

    fn on_percent(&self, percent: u8) {
        log::debug!("  {}% imported", percent);
    }
}
