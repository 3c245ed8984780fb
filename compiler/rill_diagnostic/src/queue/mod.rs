//! Diagnostic queue for collecting and sorting diagnostics.
//!
//! This is the issue-reporting boundary of the grammar compiler: every
//! phase pushes structured diagnostics here and nothing in this
//! workspace ever writes to an output stream. Surrounding tooling
//! flushes the queue and renders.

use crate::{Diagnostic, Severity};

#[cfg(test)]
mod tests;

/// Queue for collecting diagnostics across a construction pass.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    /// Add a diagnostic to the queue.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Number of error-severity diagnostics collected so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Check whether any error-severity diagnostic was collected.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Diagnostics collected so far, in insertion order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the queue, returning diagnostics sorted by position.
    ///
    /// Sort is stable: diagnostics on the same line and column keep
    /// their insertion order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| (d.pos.line, d.pos.col));
        out
    }
}
