// src/progress.rs
/// Lightweight progress reporting for long-running scrapes.
/// Frontends (CLI today) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages to request.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one (season, week) page has been handled.
    fn page_done(&mut self, _season: u16, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
