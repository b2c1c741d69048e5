//! Scoring real parses with the reference tokenizers.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use tokenscore_eval::{compute_token_score, RoninSplitter, TokenScore};
use tokenscore_ir::{Deadline, Document, Language};
use tokenscore_syntax::SyntaxParser;
use tokenscore_tokenize::{ByteLevelAdapter, ByteVocab, PretokenVocab, TokenizerAdapter};

const PYTHON: &str = "from abc import bcd\n\ndef main():\n\tabc = \"abc\"\n";

#[test]
fn byte_tokens_compress_to_one() {
    let parser = SyntaxParser::new().unwrap();
    let doc = Document::new(Language::Python, PYTHON).unwrap();
    let tokens = ByteLevelAdapter::new(ByteVocab).tokenize(&doc).unwrap();

    let result = compute_token_score(
        &parser,
        &doc,
        &tokens,
        &RoninSplitter::new(),
        &Deadline::NONE,
    )
    .unwrap();

    let m = result.metrics;
    assert_eq!(m.compression, 1.0);
    assert_eq!(m.total_bytes, PYTHON.len() as u64);
    // Each byte sits in exactly one syntax token.
    assert_eq!(m.token_span_score, 1.0);
    // abc, bcd, main, abc: 3 + 3 + 4 + 3 bytes.
    assert_eq!(m.identifier_fertility, 13.0 / 4.0);
    assert_eq!(result.identifiers.len(), 4);
}

#[test]
fn pretoken_pieces_split_identifiers() {
    let parser = SyntaxParser::new().unwrap();
    let source = "func getUserCount() int {\n\treturn user_count\n}\n";
    let doc = Document::new(Language::Go, source).unwrap();
    let tokens = ByteLevelAdapter::new(PretokenVocab::new())
        .tokenize(&doc)
        .unwrap();

    let result = compute_token_score(
        &parser,
        &doc,
        &tokens,
        &RoninSplitter::new(),
        &Deadline::NONE,
    )
    .unwrap();

    let get_user_count = result
        .identifier_splits
        .iter()
        .find(|s| doc.text(s.identifier.span).unwrap() == "getUserCount")
        .unwrap();
    assert_eq!(get_user_count.authoritative_splits, vec!["get", "User", "Count"]);
    assert_eq!(get_user_count.tokenizer_splits, vec!["getUserCount"]);

    let mut score = TokenScore::new();
    score.add(&result.metrics, Language::Go);
    assert!(score.get(Language::Go).unwrap().compression > 1.0);
}
