#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn result(lang: Option<Language>, outcome: DocumentOutcome) -> DocumentResult {
    DocumentResult {
        label: "doc".to_string(),
        lang,
        outcome,
    }
}

fn metrics(bytes: u64, compression: f64) -> TokenScoreMetrics {
    TokenScoreMetrics {
        compression,
        total_tokens: 1,
        total_bytes: bytes,
        ..TokenScoreMetrics::default()
    }
}

#[test]
fn test_outcome_predicates() {
    assert!(DocumentOutcome::Scored(TokenScoreMetrics::default()).is_scored());
    assert!(DocumentOutcome::Skipped("x".into()).is_skipped());
    assert!(DocumentOutcome::Failed("x".into()).is_failed());
    assert!(DocumentOutcome::TimedOut.is_timed_out());
    assert!(!DocumentOutcome::TimedOut.is_failed());
}

#[test]
fn test_summary_counts_each_outcome() {
    let mut summary = RunSummary::new();
    summary.record(&result(
        Some(Language::Go),
        DocumentOutcome::Scored(metrics(10, 2.0)),
    ));
    summary.record(&result(None, DocumentOutcome::Skipped("rust".into())));
    summary.record(&result(Some(Language::Go), DocumentOutcome::Failed("x".into())));
    summary.record(&result(Some(Language::Go), DocumentOutcome::TimedOut));

    assert_eq!(
        (summary.scored, summary.skipped, summary.failed, summary.timed_out),
        (1, 1, 1, 1)
    );
    assert_eq!(summary.total(), 4);
    assert!(!summary.is_clean());
}

#[test]
fn test_summary_merges_scores_by_language() {
    let mut summary = RunSummary::new();
    summary.record(&result(
        Some(Language::Python),
        DocumentOutcome::Scored(metrics(10, 2.0)),
    ));
    summary.record(&result(
        Some(Language::Python),
        DocumentOutcome::Scored(metrics(30, 4.0)),
    ));

    let python = summary.score.get(Language::Python).unwrap();
    assert_eq!(python.total_bytes, 40);
    assert!((python.compression - 3.5).abs() < 1e-12);
    assert_eq!(summary.score.total_bytes, 40);
    assert!(summary.is_clean());
}
