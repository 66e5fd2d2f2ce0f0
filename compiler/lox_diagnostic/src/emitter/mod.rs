//! Diagnostic Emitters
//!
//! Each emitter implements [`DiagnosticEmitter`]. Lox ships one format:
//! colored, human-readable terminal output.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the closing `aborting due to ...` line. Silent for zero.
    fn emit_summary(&mut self, error_count: usize);
}
