//! Per-document scoring.
//!
//! All functions assume their inputs are in document order: tokenizer tokens
//! form a contiguous cover (checked by [`compute_token_score`]), syntax
//! tokens come from `collect_syntax_tokens`, identifiers from
//! `collect_identifiers`. Under those assumptions every metric is computed in
//! one pass plus binary searches.

use serde::Serialize;
use tracing::{debug, trace};

use tokenscore_ir::{
    decode_ignoring_invalid, Deadline, Document, IdentifierToken, Span, SyntaxToken, Timeout,
    Token,
};
use tokenscore_syntax::{collect_identifiers, collect_syntax_tokens, SyntaxParser};
use tokenscore_tokenize::validate_cover;

use crate::{jaccard, IdentifierSplitter, ScoreError, TokenScoreMetrics};

/// Check the deadline every this many loop iterations.
const DEADLINE_STRIDE: usize = 256;

/// How the tokenizer split one identifier, next to the authoritative split.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IdentifierSplits {
    pub identifier: IdentifierToken,
    /// Text of every token ending inside the identifier, unclipped.
    pub raw_tokenizer_splits: Vec<String>,
    /// Text of every token overlapping the identifier, clipped to it, with
    /// underscores removed and empty pieces dropped.
    pub tokenizer_splits: Vec<String>,
    pub authoritative_splits: Vec<String>,
}

/// Identifier-level scores of one document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentifierScores {
    pub splitting: f64,
    pub raw_splitting: f64,
    pub fertility: f64,
    pub splits: Vec<IdentifierSplits>,
}

/// Everything computed while scoring one document.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenScoreResult {
    pub identifiers: Vec<IdentifierToken>,
    pub syntax_tokens: Vec<SyntaxToken>,
    pub identifier_splits: Vec<IdentifierSplits>,
    pub metrics: TokenScoreMetrics,
}

/// Bytes per token; `0.0` without tokens.
pub fn compression(content_len: usize, token_count: usize) -> f64 {
    if token_count == 0 {
        return 0.0;
    }
    content_len as f64 / token_count as f64
}

/// Mean number of syntax tokens each tokenizer token overlaps.
///
/// Both sequences are swept once: the first syntax token that can still
/// overlap only moves forward. Unbounded above; a token spanning a whole
/// line scores the number of syntax tokens on it.
pub fn token_span_score(
    syntax_tokens: &[SyntaxToken],
    tokens: &[Token],
    deadline: &Deadline,
) -> Result<f64, Timeout> {
    let mut first = 0usize;
    let mut overlaps = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        if i % DEADLINE_STRIDE == 0 {
            deadline.check()?;
        }

        while first < syntax_tokens.len() && syntax_tokens[first].span.end <= token.span.start {
            first += 1;
        }
        overlaps += syntax_tokens[first..]
            .iter()
            .take_while(|s| s.span.start < token.span.end)
            .filter(|s| token.overlaps(s.span))
            .count();
    }

    if tokens.is_empty() {
        return Ok(0.0);
    }
    Ok(overlaps as f64 / tokens.len() as f64)
}

/// Fertility and splitting scores over all identifiers whose text is UTF-8.
pub fn score_identifiers(
    document: &Document,
    identifiers: &[IdentifierToken],
    tokens: &[Token],
    splitter: &dyn IdentifierSplitter,
    deadline: &Deadline,
) -> Result<IdentifierScores, Timeout> {
    let mut scored = 0usize;
    let mut fertility_sum = 0usize;
    let mut splitting_sum = 0.0;
    let mut raw_splitting_sum = 0.0;
    let mut splits = Vec::with_capacity(identifiers.len());

    for (i, identifier) in identifiers.iter().enumerate() {
        if i % DEADLINE_STRIDE == 0 {
            deadline.check()?;
        }

        let span = identifier.span;
        let Ok(text) = document.text(span) else {
            trace!(%span, "skipping identifier that is not UTF-8");
            continue;
        };

        // Token ends are non-decreasing in a cover, and so are starts.
        let first = tokens.partition_point(|t| t.span.end <= span.start);
        let raw_end = tokens.partition_point(|t| t.span.end <= span.end);
        let clipped_end = tokens.partition_point(|t| t.span.start < span.end);

        let raw_tokenizer_splits: Vec<String> = tokens[first..raw_end.max(first)]
            .iter()
            .map(|t| token_text(document, t.span))
            .collect();

        let tokenizer_splits: Vec<String> = tokens[first..clipped_end.max(first)]
            .iter()
            .filter_map(|t| t.span.intersect(span))
            .map(|clipped| token_text(document, clipped).replace('_', ""))
            .filter(|s| !s.is_empty())
            .collect();

        let authoritative_splits = splitter.split(text);

        scored += 1;
        fertility_sum += raw_tokenizer_splits.len();
        splitting_sum += jaccard(
            tokenizer_splits.iter().map(String::as_str),
            authoritative_splits.iter().map(String::as_str),
        );
        raw_splitting_sum += jaccard(
            raw_tokenizer_splits.iter().map(String::as_str),
            authoritative_splits.iter().map(String::as_str),
        );

        splits.push(IdentifierSplits {
            identifier: *identifier,
            raw_tokenizer_splits,
            tokenizer_splits,
            authoritative_splits,
        });
    }

    if scored == 0 {
        return Ok(IdentifierScores {
            splits,
            ..IdentifierScores::default()
        });
    }
    let n = scored as f64;
    Ok(IdentifierScores {
        splitting: splitting_sum / n,
        raw_splitting: raw_splitting_sum / n,
        fertility: fertility_sum as f64 / n,
        splits,
    })
}

fn token_text(document: &Document, span: Span) -> String {
    document
        .bytes(span)
        .map(decode_ignoring_invalid)
        .unwrap_or_default()
}

/// Score `tokens` against already collected syntax tokens and identifiers.
pub fn score_tokens(
    document: &Document,
    syntax_tokens: Vec<SyntaxToken>,
    identifiers: Vec<IdentifierToken>,
    tokens: &[Token],
    splitter: &dyn IdentifierSplitter,
    deadline: &Deadline,
) -> Result<TokenScoreResult, ScoreError> {
    validate_cover(tokens, document.len())?;

    let span_score = token_span_score(&syntax_tokens, tokens, deadline)?;
    let ids = score_identifiers(document, &identifiers, tokens, splitter, deadline)?;

    let metrics = TokenScoreMetrics {
        compression: compression(document.len(), tokens.len()),
        identifier_fertility: ids.fertility,
        identifier_splitting_score: ids.splitting,
        raw_identifier_splitting_score: ids.raw_splitting,
        token_span_score: span_score,
        total_tokens: tokens.len() as u64,
        total_bytes: document.len() as u64,
    };

    Ok(TokenScoreResult {
        identifiers,
        syntax_tokens,
        identifier_splits: ids.splits,
        metrics,
    })
}

/// Parse `document`, collect its ground-truth tokens and score `tokens`
/// against them.
#[tracing::instrument(level = "debug", skip_all, fields(lang = %document.lang(), bytes = document.len()))]
pub fn compute_token_score(
    parser: &SyntaxParser,
    document: &Document,
    tokens: &[Token],
    splitter: &dyn IdentifierSplitter,
    deadline: &Deadline,
) -> Result<TokenScoreResult, ScoreError> {
    let kinds = parser.identifier_kinds(document.lang())?;
    let tree = parser.parse(document, deadline)?;

    let identifiers = collect_identifiers(tree.root(), kinds, deadline)?;
    let syntax_tokens = collect_syntax_tokens(tree.root(), document.len(), deadline)?;
    debug!(
        identifiers = identifiers.len(),
        syntax_tokens = syntax_tokens.len(),
        tokens = tokens.len(),
        "collected"
    );

    score_tokens(document, syntax_tokens, identifiers, tokens, splitter, deadline)
}
