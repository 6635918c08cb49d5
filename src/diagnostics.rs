//! Non-fatal events reported while breaking text into columns.
//!
//! The breaker never decides how a problem is surfaced. It hands each
//! [Diagnostic] to a [DiagnosticSink], which may log it, collect it, show it to
//! a user, or ignore it.

use derive_more::Display;

use crate::units::Px;

/// A recoverable event raised during layout
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// A line could not be placed in any column and its content was dropped
    #[display("skipping too large content: line {line} ({height} tall, text {start}..{end})")]
    OversizedLineSkipped {
        /// Index of the skipped line in the full-text measurement
        line: usize,
        /// Byte offset of the first dropped character
        start: usize,
        /// Byte offset one past the last dropped character
        end: usize,
        /// Height of the skipped line
        height: Px,
    },
}

/// Receives diagnostics as they are raised
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic),
{
    fn report(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Collects every diagnostic, in the order they were raised
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

/// Forwards diagnostics to the [log] facade as warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

/// Discards all diagnostics
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: &Diagnostic) {}
}
