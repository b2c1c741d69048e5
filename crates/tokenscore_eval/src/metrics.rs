//! Metric records and their byte-weighted aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tokenscore_ir::Language;

/// Scores of one document, or of any set of documents after merging.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenScoreMetrics {
    /// Bytes per token.
    pub compression: f64,
    /// Tokens per identifier.
    pub identifier_fertility: f64,
    /// Mean Jaccard similarity of clipped identifier splits, in `[0, 1]`.
    pub identifier_splitting_score: f64,
    /// Mean Jaccard similarity of raw identifier splits, in `[0, 1]`.
    pub raw_identifier_splitting_score: f64,
    /// Syntax tokens overlapped per tokenizer token.
    pub token_span_score: f64,
    pub total_tokens: u64,
    pub total_bytes: u64,
}

impl TokenScoreMetrics {
    /// Byte-weighted average of two metric records.
    ///
    /// Float fields are averaged with weights `total_bytes`; totals are
    /// summed. When both weights are zero every float field is `0.0`.
    #[must_use]
    pub fn merge(&self, other: &TokenScoreMetrics) -> TokenScoreMetrics {
        let total_bytes = self.total_bytes + other.total_bytes;
        let total_tokens = self.total_tokens + other.total_tokens;
        if total_bytes == 0 {
            return TokenScoreMetrics {
                total_tokens,
                total_bytes,
                ..TokenScoreMetrics::default()
            };
        }

        let wa = self.total_bytes as f64;
        let wb = other.total_bytes as f64;
        let w = total_bytes as f64;
        let avg = |a: f64, b: f64| (a * wa + b * wb) / w;

        TokenScoreMetrics {
            compression: avg(self.compression, other.compression),
            identifier_fertility: avg(self.identifier_fertility, other.identifier_fertility),
            identifier_splitting_score: avg(
                self.identifier_splitting_score,
                other.identifier_splitting_score,
            ),
            raw_identifier_splitting_score: avg(
                self.raw_identifier_splitting_score,
                other.raw_identifier_splitting_score,
            ),
            token_span_score: avg(self.token_span_score, other.token_span_score),
            total_tokens,
            total_bytes,
        }
    }
}

/// Corpus-level accumulator: merged metrics per language plus totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenScore {
    pub metrics: BTreeMap<Language, TokenScoreMetrics>,
    pub total_tokens: u64,
    pub total_bytes: u64,
}

impl Default for TokenScore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenScore {
    /// An empty score with one zeroed entry per supported language.
    pub fn new() -> Self {
        TokenScore {
            metrics: Language::ALL
                .iter()
                .map(|&lang| (lang, TokenScoreMetrics::default()))
                .collect(),
            total_tokens: 0,
            total_bytes: 0,
        }
    }

    /// Merge one document's metrics into its language entry.
    pub fn add(&mut self, metrics: &TokenScoreMetrics, lang: Language) {
        let entry = self.metrics.entry(lang).or_default();
        *entry = entry.merge(metrics);
        self.total_tokens += metrics.total_tokens;
        self.total_bytes += metrics.total_bytes;
    }

    /// Merge another accumulator into this one, language by language.
    pub fn absorb(&mut self, other: &TokenScore) {
        for (&lang, metrics) in &other.metrics {
            self.add(metrics, lang);
        }
    }

    pub fn get(&self, lang: Language) -> Option<&TokenScoreMetrics> {
        self.metrics.get(&lang)
    }

    /// Languages that received at least one byte.
    pub fn languages_with_data(&self) -> impl Iterator<Item = (Language, &TokenScoreMetrics)> {
        self.metrics
            .iter()
            .filter(|(_, m)| m.total_bytes > 0)
            .map(|(&lang, m)| (lang, m))
    }

    /// Mean absolute difference of compression over all pairs of languages
    /// with data; `0.0` with fewer than two such languages.
    pub fn compression_parity(&self) -> f64 {
        let values: Vec<f64> = self
            .languages_with_data()
            .map(|(_, m)| m.compression)
            .collect();

        let mut sum = 0.0;
        let mut pairs = 0usize;
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                sum += (a - b).abs();
                pairs += 1;
            }
        }
        if pairs == 0 {
            return 0.0;
        }
        sum / pairs as f64
    }
}
