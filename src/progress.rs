// src/progress.rs
/// Lightweight progress reporting for per-word runs (reconcile/scrape).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of words.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One word handled; `found` is false when the sentinel was used.
    fn item_done(&mut self, _word: &str, _found: bool) {}

    /// Called at the end.
    fn finish(&mut self) {}
}
