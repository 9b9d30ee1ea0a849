//! Diagnostics sinks.
//!
//! Builders and the classifier never log through global state; they are
//! handed a [`DiagnosticSink`] and report into it.

use tracing::{info, warn};

use crate::models::{Diagnostic, DiagnosticLevel};

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    /// Accepts one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Collects diagnostics and forwards each one to `tracing`.
///
/// Warnings go out at `WARN`, informational entries at `INFO`, each with
/// a `tag` field and the `[TAG] message` text.
///
/// # Example
///
/// ```
/// use wage_compliance::classification::{DiagnosticSink, TracingSink};
/// use wage_compliance::models::{Diagnostic, DiagnosticTag};
///
/// let mut sink = TracingSink::default();
/// sink.emit(Diagnostic::new(DiagnosticTag::AreaNotFound, "Area code 999 not found in DB"));
/// assert_eq!(sink.diagnostics().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TracingSink {
    diagnostics: Vec<Diagnostic>,
}

impl TracingSink {
    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the sink, returning the collected diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Warning => warn!(tag = %diagnostic.tag, "{}", diagnostic),
            DiagnosticLevel::Info => info!(tag = %diagnostic.tag, "{}", diagnostic),
        }
        self.diagnostics.push(diagnostic);
    }
}
