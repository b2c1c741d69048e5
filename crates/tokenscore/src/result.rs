//! Per-document outcomes and the run summary they fold into.

use std::time::Duration;

use tokenscore_eval::{TokenScore, TokenScoreMetrics};
use tokenscore_ir::Language;

/// What happened to one document.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentOutcome {
    /// Scored successfully.
    Scored(TokenScoreMetrics),
    /// Not scored: unsupported language, too large, not selected.
    Skipped(String),
    /// Scoring was attempted and failed.
    Failed(String),
    /// The document's time budget ran out.
    TimedOut,
}

impl DocumentOutcome {
    pub fn is_scored(&self) -> bool {
        matches!(self, DocumentOutcome::Scored(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, DocumentOutcome::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DocumentOutcome::Failed(_))
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, DocumentOutcome::TimedOut)
    }
}

/// Outcome of one document, as sent from a worker to the coordinator.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentResult {
    pub label: String,
    /// `None` when the language could not be determined.
    pub lang: Option<Language>,
    pub outcome: DocumentOutcome,
}

/// Counts and merged scores of a whole run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub scored: usize,
    pub skipped: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub elapsed: Duration,
    pub score: TokenScore,
    /// First error writing the per-document sink; later rows are dropped.
    pub sink_error: Option<String>,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl RunSummary {
    pub fn new() -> Self {
        RunSummary {
            scored: 0,
            skipped: 0,
            failed: 0,
            timed_out: 0,
            elapsed: Duration::ZERO,
            score: TokenScore::new(),
            sink_error: None,
        }
    }

    /// Count one result and merge its metrics when it was scored.
    pub fn record(&mut self, result: &DocumentResult) {
        match &result.outcome {
            DocumentOutcome::Scored(metrics) => {
                self.scored += 1;
                if let Some(lang) = result.lang {
                    self.score.add(metrics, lang);
                }
            }
            DocumentOutcome::Skipped(_) => self.skipped += 1,
            DocumentOutcome::Failed(_) => self.failed += 1,
            DocumentOutcome::TimedOut => self.timed_out += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.scored + self.skipped + self.failed + self.timed_out
    }

    /// No document failed or timed out, and the sink took every row.
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.timed_out == 0 && self.sink_error.is_none()
    }
}

#[cfg(test)]
mod tests;
