//! Progress reporting side channel.
//!
//! The engine invokes a [`ProgressSink`] synchronously at fixed milestones
//! (read, parse, document created, content converted, saved) and for every
//! recovered warning. Sinks must not block or feed anything back into the
//! conversion; a host UI subscribes, the engine has no idea who listens.

/// Callbacks invoked during a conversion run.
pub trait ProgressSink {
    /// Overall progress, 0-100.
    fn on_progress(&mut self, _percent: u8) {}

    /// Short human-readable state ("converting", "done", ...).
    fn on_status(&mut self, _message: &str) {}

    /// One line of the sequential conversion log, including every skipped
    /// resource and recovered warning.
    fn on_log(&mut self, _message: &str) {}
}

/// Sink that discards everything; handy for tests and library callers that
/// do not care about progress.
pub struct NullSink;

impl ProgressSink for NullSink {}
