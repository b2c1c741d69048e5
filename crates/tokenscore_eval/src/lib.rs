//! TokenScore evaluation.
//!
//! Compares a tokenizer's byte ranges against the syntax of the code they
//! cover:
//! - compression: bytes per token
//! - token span score: syntax tokens overlapped per tokenizer token
//! - identifier fertility: tokens per identifier
//! - identifier splitting scores: Jaccard similarity between the tokenizer's
//!   split of each identifier and an authoritative split
//!
//! Per-document [`TokenScoreMetrics`] are combined only through the
//! byte-weighted [`TokenScoreMetrics::merge`], which is associative and
//! commutative, so documents can be scored in any order on any thread.

mod error;
mod frequencies;
mod jaccard;
mod metrics;
mod score;
mod splitter;

pub use error::ScoreError;
pub use frequencies::{FrequencySummary, PieceCount, TokenFrequencies};
pub use jaccard::jaccard;
pub use metrics::{TokenScore, TokenScoreMetrics};
pub use score::{
    compression, compute_token_score, score_identifiers, score_tokens, token_span_score,
    IdentifierScores, IdentifierSplits, TokenScoreResult,
};
pub use splitter::{IdentifierSplitter, RoninSplitter};
