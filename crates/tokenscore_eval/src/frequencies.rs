//! Token piece frequencies over a corpus.

use rustc_hash::FxHashMap;
use serde::Serialize;

use tokenscore_ir::{decode_ignoring_invalid, Document, Token};

/// Occurrence count per distinct token piece (the bytes a token covers).
///
/// Mergeable, so each worker can count its own documents. Vocabulary entries
/// seeded with [`TokenFrequencies::seed_vocabulary`] stay in the table at
/// count 0 until they occur.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenFrequencies {
    counts: FxHashMap<Vec<u8>, u64>,
    total: u64,
}

/// One piece and how often it occurred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PieceCount {
    /// Piece text with invalid UTF-8 dropped.
    pub piece: String,
    pub count: u64,
}

/// Headline statistics of a [`TokenFrequencies`] table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrequencySummary {
    pub total_tokens: u64,
    /// Pieces that occurred at least once.
    pub unique_pieces: usize,
    /// Seeded vocabulary entries that never occurred.
    pub never_occurring: usize,
    pub average_occurrences: f64,
    /// Number of pieces occurring exactly 1, 2, 3 and 4 times.
    pub occurring_exactly: [usize; 4],
    pub rarest: Vec<PieceCount>,
    pub most_frequent: Vec<PieceCount>,
}

impl TokenFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the pieces of one tokenized document. Tokens outside the
    /// document are ignored.
    pub fn add_document(&mut self, document: &Document, tokens: &[Token]) {
        for token in tokens {
            if let Ok(bytes) = document.bytes(token.span) {
                *self.counts.entry(bytes.to_vec()).or_default() += 1;
                self.total += 1;
            }
        }
    }

    pub fn merge(&mut self, other: TokenFrequencies) {
        for (piece, count) in other.counts {
            *self.counts.entry(piece).or_default() += count;
        }
        self.total += other.total;
    }

    /// Add every piece of `vocabulary` not yet in the table, with count 0.
    pub fn seed_vocabulary<I>(&mut self, vocabulary: I)
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        for piece in vocabulary {
            self.counts.entry(piece).or_default();
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct pieces that occurred.
    pub fn unique(&self) -> usize {
        self.counts.values().filter(|&&c| c > 0).count()
    }

    /// Number of seeded pieces that never occurred.
    pub fn never_occurring(&self) -> usize {
        self.counts.values().filter(|&&c| c == 0).count()
    }

    pub fn count(&self, piece: &[u8]) -> u64 {
        self.counts.get(piece).copied().unwrap_or(0)
    }

    /// Summary with the `n` rarest and `n` most frequent pieces.
    ///
    /// Only pieces that occurred are ranked. Ties are broken by piece bytes
    /// so the output is stable.
    pub fn summary(&self, n: usize) -> FrequencySummary {
        let mut sorted: Vec<(&Vec<u8>, u64)> = self
            .counts
            .iter()
            .filter(|(_, c)| **c > 0)
            .map(|(p, &c)| (p, c))
            .collect();
        sorted.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        let mut occurring_exactly = [0usize; 4];
        for &(_, count) in &sorted {
            if let Some(slot) = usize::try_from(count)
                .ok()
                .and_then(|c| c.checked_sub(1))
                .and_then(|i| occurring_exactly.get_mut(i))
            {
                *slot += 1;
            }
        }

        let piece = |&(bytes, count): &(&Vec<u8>, u64)| PieceCount {
            piece: decode_ignoring_invalid(bytes),
            count,
        };
        let rarest = sorted.iter().take(n).map(piece).collect();
        let most_frequent = sorted.iter().rev().take(n).map(piece).collect();

        let average_occurrences = if sorted.is_empty() {
            0.0
        } else {
            self.total as f64 / sorted.len() as f64
        };

        FrequencySummary {
            total_tokens: self.total,
            unique_pieces: sorted.len(),
            never_occurring: self.counts.len() - sorted.len(),
            average_occurrences,
            occurring_exactly,
            rarest,
            most_frequent,
        }
    }
}
