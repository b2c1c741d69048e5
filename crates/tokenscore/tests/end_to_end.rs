//! End-to-end runs over temporary corpora.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::fs::{self, File};
use std::io::BufReader;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use tokenscore::input::{directory_corpus, jsonl_corpus};
use tokenscore::sink::{aggregate_csv, CsvSink};
use tokenscore::{EvalConfig, Runner, ScoringContext, TokenizerChoice};
use tokenscore_eval::TokenScore;
use tokenscore_ir::Language;

fn context(tokenizer: &TokenizerChoice) -> ScoringContext {
    ScoringContext::build(&Language::ALL, tokenizer, &[]).unwrap()
}

#[test]
fn directory_corpus_with_byte_tokenizer() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.py"), "def main():\n\tabc = \"abc\"\n").unwrap();
    fs::write(
        dir.path().join("Main.java"),
        "class Main { int count; }\n",
    )
    .unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules").join("dep.js"), "var x;\n").unwrap();
    fs::write(dir.path().join("README.md"), "# readme\n").unwrap();

    let ctx = context(&TokenizerChoice::Bytes);
    let runner = Runner::new(&ctx, EvalConfig::default());
    let summary = runner.run(directory_corpus(dir.path()), &mut tokenscore::sink::NullSink);

    assert_eq!(summary.scored, 2);
    assert_eq!(summary.total(), 2);
    for lang in [Language::Python, Language::Java] {
        let metrics = summary.score.get(lang).unwrap();
        assert!((metrics.compression - 1.0).abs() < 1e-12, "{lang}: {metrics:?}");
        assert!(metrics.token_span_score >= 1.0);
    }
    assert_eq!(summary.score.languages_with_data().count(), 2);
}

#[test]
fn jsonl_corpus_skips_unsupported_and_oversized() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.jsonl");
    let big = "x = 1\n".repeat(100);
    let lines = [
        serde_json::json!({"lang": "Python", "content": "count = 0\n"}).to_string(),
        serde_json::json!({"lang": "Rust", "content": "fn main() {}\n"}).to_string(),
        serde_json::json!({"lang": "python", "content": big}).to_string(),
        serde_json::json!({"lang": "Go", "content": "package main\n"}).to_string(),
    ];
    fs::write(&path, lines.join("\n")).unwrap();

    let ctx = context(&TokenizerChoice::Pretoken);
    let config = EvalConfig {
        max_document_bytes: 64,
        ..EvalConfig::default()
    };
    let runner = Runner::new(&ctx, config);
    let corpus = jsonl_corpus(BufReader::new(File::open(&path).unwrap()), "corpus.jsonl");
    let summary = runner.run(corpus, &mut tokenscore::sink::NullSink);

    assert_eq!(summary.scored, 2);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.score.get(Language::Python).unwrap().total_bytes, 10);
    assert_eq!(summary.score.get(Language::Go).unwrap().total_bytes, 13);
}

#[test]
fn csv_stream_reaggregates_to_the_run_score() {
    let dir = tempdir().unwrap();
    let sources = [
        "def get_user_count(users):\n    return len(users)\n",
        "class HTTPServer:\n    pass\n",
        "x = {'a': 1}\n",
    ];
    for (i, source) in sources.iter().enumerate() {
        fs::write(dir.path().join(format!("f{i}.py")), source).unwrap();
    }

    let ctx = context(&TokenizerChoice::Pretoken);
    let runner = Runner::new(&ctx, EvalConfig::default());
    let csv_path = dir.path().join("rows.csv");
    let mut sink = CsvSink::new(File::create(&csv_path).unwrap()).unwrap();
    let summary = runner.run(directory_corpus(dir.path()), &mut sink);
    assert_eq!(summary.scored, 3);
    assert_eq!(sink.rows(), 3);
    drop(sink);

    let merged = aggregate_csv(BufReader::new(File::open(&csv_path).unwrap())).unwrap();
    let mut exported = TokenScore::new();
    exported.add(&merged, Language::Python);

    let expected = summary.score.get(Language::Python).unwrap();
    let actual = exported.get(Language::Python).unwrap();
    assert_eq!(actual.total_bytes, expected.total_bytes);
    assert_eq!(actual.total_tokens, expected.total_tokens);
    assert!((actual.compression - expected.compression).abs() < 1e-9);
    assert!((actual.token_span_score - expected.token_span_score).abs() < 1e-9);
    assert!((actual.identifier_fertility - expected.identifier_fertility).abs() < 1e-9);
    assert!(
        (actual.identifier_splitting_score - expected.identifier_splitting_score).abs() < 1e-9
    );
}

#[test]
fn frequencies_over_a_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.go"), "package a\n").unwrap();
    fs::write(dir.path().join("b.go"), "package b\n").unwrap();

    let ctx = context(&TokenizerChoice::Pretoken);
    let runner = Runner::new(&ctx, EvalConfig::default());
    let frequencies = runner.frequencies(directory_corpus(dir.path()));

    assert_eq!(frequencies.count(b"package"), 2);
    assert_eq!(frequencies.count(b"\n"), 2);
    let summary = frequencies.summary(1);
    assert_eq!(summary.most_frequent[0].count, 2);
}
