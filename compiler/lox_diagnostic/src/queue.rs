//! Per-run diagnostic collection.
//!
//! A [`DiagnosticQueue`] keeps at most `error_limit` diagnostics for
//! display and folds exact repeats (same line, code and message). Every
//! diagnostic it is given is counted in [`QueueStats`], shown or not, so
//! the closing summary reports the true number of errors.

use std::collections::HashSet;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// Limits applied while collecting diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Most diagnostics shown per run (0 = unlimited).
    pub error_limit: usize,
    /// Fold a diagnostic identical to one already kept.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// No limit and no folding.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Why [`DiagnosticQueue::push`] did not keep a diagnostic.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Dropped {
    /// The error limit was already reached.
    OverLimit,
    /// An identical diagnostic was already kept.
    Repeat,
}

/// Counts for one run of a [`DiagnosticQueue`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct QueueStats {
    pub shown: usize,
    pub over_limit: usize,
    pub repeated: usize,
}

impl QueueStats {
    /// Every diagnostic pushed, kept or dropped.
    pub fn total(&self) -> usize {
        self.shown + self.over_limit + self.repeated
    }
}

type RepeatKey = (Option<u32>, ErrorCode, String);

#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    kept: Vec<Diagnostic>,
    seen: HashSet<RepeatKey>,
    stats: QueueStats,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Offer a diagnostic to the queue.
    ///
    /// Repeats are folded before the limit is checked, so a repeat never
    /// uses up a display slot.
    pub fn push(&mut self, diag: Diagnostic) -> Result<(), Dropped> {
        if self.config.deduplicate
            && !self.seen.insert((diag.line, diag.code, diag.message.clone()))
        {
            self.stats.repeated += 1;
            return Err(Dropped::Repeat);
        }

        if self.limit_reached() {
            self.stats.over_limit += 1;
            return Err(Dropped::OverLimit);
        }

        self.kept.push(diag);
        self.stats.shown += 1;
        Ok(())
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit != 0 && self.stats.shown >= self.config.error_limit
    }

    pub fn stats(&self) -> QueueStats {
        self.stats
    }

    /// Proof of failure if anything at all was pushed.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.stats.total())
    }

    /// The kept diagnostics ordered by line, plus the final counts.
    ///
    /// Diagnostics on the same line keep their push order; those without a
    /// line come first.
    pub fn into_sorted(mut self) -> (Vec<Diagnostic>, QueueStats) {
        self.kept.sort_by_key(|d| d.line);
        (self.kept, self.stats)
    }
}

#[cfg(test)]
mod tests;
