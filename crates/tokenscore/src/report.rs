//! Human-readable and JSON reports.

use std::fmt::Write as _;

use tokenscore_eval::{IdentifierSplits, TokenScore, TokenScoreMetrics, TokenScoreResult};
use tokenscore_ir::{decode_ignoring_invalid, Document};

const MATCH: &str = "✓";
const MISMATCH: &str = "✗";

/// Serialize a corpus score as pretty JSON.
pub fn to_json(score: &TokenScore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(score)
}

/// Per-identifier split table followed by the document's metrics.
pub fn snippet_report(document: &Document, result: &TokenScoreResult) -> String {
    let mut rows = vec![[
        "identifier".to_string(),
        "authoritative".to_string(),
        "raw".to_string(),
        "exact".to_string(),
        "clipped".to_string(),
        "exact".to_string(),
    ]];
    rows.extend(
        result
            .identifier_splits
            .iter()
            .map(|splits| split_row(document, splits)),
    );

    let mut out = render_table(&rows);
    out.push('\n');
    out.push_str(&metrics_table(&result.metrics));
    out
}

fn split_row(document: &Document, splits: &IdentifierSplits) -> [String; 6] {
    let name = document
        .bytes(splits.identifier.span)
        .map(decode_ignoring_invalid)
        .unwrap_or_default();
    let mark = |candidate: &[String]| {
        if candidate == splits.authoritative_splits.as_slice() {
            MATCH
        } else {
            MISMATCH
        }
    };
    [
        name,
        join(&splits.authoritative_splits),
        join(&splits.raw_tokenizer_splits),
        mark(&splits.raw_tokenizer_splits).to_string(),
        join(&splits.tokenizer_splits),
        mark(&splits.tokenizer_splits).to_string(),
    ]
}

fn join(pieces: &[String]) -> String {
    if pieces.is_empty() {
        return "-".to_string();
    }
    pieces.join(" ")
}

fn render_table<const N: usize>(rows: &[[String; N]]) -> String {
    let mut widths = [0usize; N];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(cells.join(" | ").trim_end());
        out.push('\n');
    }
    out
}

/// One metric per line, rounded to two decimals.
pub fn metrics_table(m: &TokenScoreMetrics) -> String {
    let rows = [
        ["compression".to_string(), format!("{:.2}", m.compression)],
        ["token_span_score".to_string(), format!("{:.2}", m.token_span_score)],
        [
            "raw_identifier_splitting_score".to_string(),
            format!("{:.2}", m.raw_identifier_splitting_score),
        ],
        [
            "identifier_splitting_score".to_string(),
            format!("{:.2}", m.identifier_splitting_score),
        ],
        [
            "identifier_fertility".to_string(),
            format!("{:.2}", m.identifier_fertility),
        ],
        ["total_tokens".to_string(), m.total_tokens.to_string()],
        ["total_bytes".to_string(), m.total_bytes.to_string()],
    ];
    render_table(&rows)
}

/// Headline metrics per language with data, plus compression parity.
pub fn headline(score: &TokenScore) -> String {
    let mut out = String::new();
    for (lang, m) in score.languages_with_data() {
        let _ = writeln!(
            out,
            "{lang}: compression {:.2}, token span {:.2}, identifier splitting {:.2} (raw {:.2}), fertility {:.2}",
            m.compression,
            m.token_span_score,
            m.identifier_splitting_score,
            m.raw_identifier_splitting_score,
            m.identifier_fertility,
        );
    }
    let _ = writeln!(
        out,
        "total: {} tokens over {} bytes, compression parity {:.2}",
        score.total_tokens,
        score.total_bytes,
        score.compression_parity()
    );
    out
}
