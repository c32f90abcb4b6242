// src/progress.rs
use crate::aggregate::TopicRow;
use crate::error::Gap;

/// Lightweight progress reporting for an update cycle.
/// Frontends implement this to surface status to users; every hook is optional.
pub trait Progress {
    /// Called at the start with the number of pages about to be fetched.
    fn begin(&mut self, _pages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been fetched (or read from its fallback).
    fn page_done(&mut self, _name: &str) {}

    /// Called once per topic row that made it into the report.
    fn topic_done(&mut self, _row: &TopicRow) {}

    /// Something was missing or unreadable; the cycle carries on.
    fn gap(&mut self, _gap: &Gap) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
