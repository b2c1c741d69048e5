#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::io;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokenscore_eval::TokenScoreMetrics;
use tokenscore_ir::Language;

use super::*;
use crate::context::TokenizerChoice;
use crate::sink::CsvSink;

const PYTHON: &str = "def main():\n\tabc = \"abc\"\n";

fn context() -> ScoringContext {
    ScoringContext::build(&Language::ALL, &TokenizerChoice::Bytes, &[]).unwrap()
}

fn python(source: &str) -> Document {
    Document::new(Language::Python, source).unwrap()
}

fn item(label: &str, document: Document) -> CorpusItem {
    CorpusItem::loaded(label, document)
}

#[test]
fn test_score_document_bytes() {
    let ctx = context();
    let runner = Runner::new(&ctx, EvalConfig::default());

    let DocumentOutcome::Scored(metrics) = runner.score_document(&python(PYTHON)) else {
        panic!("expected a scored document");
    };
    assert_eq!(metrics.total_bytes, 25);
    assert_eq!(metrics.total_tokens, 25);
    assert!((metrics.compression - 1.0).abs() < 1e-12);
}

#[test]
fn test_oversized_document_is_skipped() {
    let ctx = context();
    let config = EvalConfig {
        max_document_bytes: 4,
        ..EvalConfig::default()
    };
    let runner = Runner::new(&ctx, config);
    assert!(runner.score_document(&python(PYTHON)).is_skipped());
}

#[test]
fn test_non_utf8_document_is_skipped() {
    let ctx = context();
    let runner = Runner::new(&ctx, EvalConfig::default());
    let document = Document::new(Language::Python, vec![b'a', 0xff, b'b']).unwrap();

    let DocumentOutcome::Skipped(reason) = runner.score_document(&document) else {
        panic!("expected a skipped document");
    };
    assert!(reason.starts_with("not UTF-8 text"), "{reason}");
}

#[test]
fn test_unselected_language_is_skipped() {
    let ctx = context();
    let config = EvalConfig {
        languages: vec![Language::Go],
        ..EvalConfig::default()
    };
    let runner = Runner::new(&ctx, config);
    let outcome = runner.score_document(&python(PYTHON));
    assert_eq!(
        outcome,
        DocumentOutcome::Skipped("language python not selected".to_string())
    );
}

#[test]
fn test_zero_budget_times_out() {
    let ctx = context();
    let config = EvalConfig {
        timeout: Duration::ZERO,
        ..EvalConfig::default()
    };
    let runner = Runner::new(&ctx, config);
    assert!(runner.score_document(&python(PYTHON)).is_timed_out());
}

#[test]
fn test_missing_grammar_fails_document() {
    let ctx = ScoringContext::build(&[Language::Go], &TokenizerChoice::Bytes, &[]).unwrap();
    let runner = Runner::new(&ctx, EvalConfig::default());
    assert!(runner.score_document(&python(PYTHON)).is_failed());
}

#[test]
fn test_run_counts_and_streams_rows() {
    let ctx = context();
    let config = EvalConfig {
        channel_capacity: 1,
        ..EvalConfig::default()
    };
    let runner = Runner::new(&ctx, config);

    let corpus = vec![
        item("a.py", python(PYTHON)),
        item("b.py", python("x = 1\n")),
        item("c.go", Document::new(Language::Go, "package main\n").unwrap()),
        CorpusItem::skipped("d.rs", "unsupported language `rust`"),
        CorpusItem::failed("e.py", "read failed"),
    ];

    let mut sink = CsvSink::new(Vec::new()).unwrap();
    let summary = runner.run(corpus.into_iter(), &mut sink);

    assert_eq!(summary.scored, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.timed_out, 0);
    assert_eq!(summary.total(), 5);
    assert!(summary.sink_error.is_none());
    assert_eq!(sink.rows(), 3);

    let python = summary.score.get(Language::Python).unwrap();
    assert_eq!(python.total_bytes, 31);
    assert!((python.compression - 1.0).abs() < 1e-12);
    assert_eq!(summary.score.total_bytes, 44);
}

#[test]
fn test_run_sequential_pool_matches() {
    let ctx = context();
    let config = EvalConfig {
        threads: 1,
        ..EvalConfig::default()
    };
    let runner = Runner::new(&ctx, config);
    let corpus = (0..20).map(|i| item(&format!("{i}.py"), python("value = 42\n")));
    let summary = runner.run(corpus, &mut crate::sink::NullSink);
    assert_eq!(summary.scored, 20);
    assert_eq!(summary.score.get(Language::Python).unwrap().total_bytes, 220);
}

struct FailingSink {
    attempts: usize,
}

impl MetricsSink for FailingSink {
    fn record(&mut self, _lang: Language, _metrics: &TokenScoreMetrics) -> io::Result<()> {
        self.attempts += 1;
        Err(io::Error::other("disk full"))
    }
}

#[test]
fn test_sink_error_does_not_stop_the_run() {
    let ctx = context();
    let config = EvalConfig {
        channel_capacity: 1,
        ..EvalConfig::default()
    };
    let runner = Runner::new(&ctx, config);
    let corpus = (0..10).map(|i| item(&format!("{i}.py"), python("x = 1\n")));

    let mut sink = FailingSink { attempts: 0 };
    let summary = runner.run(corpus, &mut sink);

    assert_eq!(summary.scored, 10);
    assert_eq!(sink.attempts, 1);
    assert_eq!(summary.sink_error.as_deref(), Some("disk full"));
    assert!(!summary.is_clean());
}

#[test]
fn test_frequencies_count_byte_pieces() {
    let ctx = context();
    let runner = Runner::new(&ctx, EvalConfig::default());
    let corpus = vec![
        item("a.py", python("aab")),
        item("b.py", python("ba")),
        CorpusItem::skipped("c", "unsupported"),
    ];

    let frequencies = runner.frequencies(corpus.into_iter());
    assert_eq!(frequencies.total(), 5);
    assert_eq!(frequencies.unique(), 2);
    assert_eq!(frequencies.count(b"a"), 3);
    assert_eq!(frequencies.count(b"b"), 2);
    assert_eq!(frequencies.never_occurring(), 254);
    assert_eq!(frequencies.summary(3).never_occurring, 254);
}
