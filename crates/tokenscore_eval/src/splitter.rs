//! Authoritative identifier splitting.
//!
//! [`RoninSplitter`] splits an identifier in two passes:
//!
//! 1. Structure: non-alphanumeric characters separate words, and case
//!    changes separate camel-case words. An upper-case run followed by lower
//!    case (`GPSmodule`, `HTTPServer`) is ambiguous; the last capital joins
//!    the lower-case tail unless the tail alone is made of known words and
//!    the joined form is not.
//! 2. Dictionary: each remaining ASCII-letter word that is not itself known
//!    is segmented by a dynamic program minimizing Zipf cost over the word
//!    list, but only when every segment is a known word (`Ofbugs` becomes
//!    `Of`, `bugs`; `nbr` stays `nbr`).
//!
//! Digits stay attached to the letters before them (`Utf8`).

mod words;

use std::ops::Range;

use rustc_hash::FxHashMap;

/// Ground-truth segmentation of identifiers.
pub trait IdentifierSplitter: Send + Sync {
    fn split(&self, identifier: &str) -> Vec<String>;
}

/// Dictionary-assisted camel-case and snake-case splitter.
#[derive(Clone, Debug)]
pub struct RoninSplitter {
    /// Zipf cost of every known lower-case word.
    costs: FxHashMap<String, f64>,
    max_word_len: usize,
}

impl Default for RoninSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoninSplitter {
    /// Splitter over the built-in vocabulary.
    pub fn new() -> Self {
        Self::with_words(std::iter::empty::<&str>())
    }

    /// Splitter over the built-in vocabulary plus `extra` words, ranked after
    /// the built-in ones in the order given.
    pub fn with_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranked: Vec<String> = words::BUILTIN.iter().map(|w| (*w).to_string()).collect();
        ranked.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_lowercase())
                .filter(|w| w.len() > 1 && w.bytes().all(|b| b.is_ascii_lowercase())),
        );

        let scale = (ranked.len().max(2) as f64).ln();
        let mut costs = FxHashMap::default();
        let mut max_word_len = 0;
        for (rank, word) in ranked.into_iter().enumerate() {
            max_word_len = max_word_len.max(word.len());
            let cost = ((rank + 1) as f64 * scale).ln();
            costs.entry(word).or_insert(cost);
        }
        RoninSplitter {
            costs,
            max_word_len,
        }
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.costs.contains_key(word)
    }

    /// Segment a lower-case ASCII word into known words, or `None` if it
    /// cannot be covered entirely by known words.
    fn segment(&self, lower: &str) -> Option<Vec<Range<usize>>> {
        let n = lower.len();
        let mut best = vec![f64::INFINITY; n + 1];
        let mut back = vec![0usize; n + 1];
        best[0] = 0.0;

        for end in 1..=n {
            for start in end.saturating_sub(self.max_word_len)..end {
                if !best[start].is_finite() {
                    continue;
                }
                let Some(&cost) = self.costs.get(&lower[start..end]) else {
                    continue;
                };
                let total = best[start] + cost;
                if total < best[end] {
                    best[end] = total;
                    back[end] = start;
                }
            }
        }

        if !best[n].is_finite() {
            return None;
        }
        let mut ranges = Vec::new();
        let mut end = n;
        while end > 0 {
            let start = back[end];
            ranges.push(start..end);
            end = start;
        }
        ranges.reverse();
        Some(ranges)
    }

    /// Whether `word` is known or splits entirely into known words.
    fn is_words(&self, word: &str) -> bool {
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return false;
        }
        let lower = word.to_ascii_lowercase();
        self.is_known(&lower) || self.segment(&lower).is_some()
    }

    /// Camel-case cut points of an alphanumeric run.
    fn camel_words<'a>(&self, run: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = run.char_indices().collect();
        let mut cuts = vec![0];

        for i in 1..chars.len() {
            let (at, cur) = chars[i];
            let prev = chars[i - 1].1;

            if cur.is_uppercase() && (prev.is_lowercase() || prev.is_numeric()) {
                cuts.push(at);
            } else if cur.is_lowercase()
                && prev.is_uppercase()
                && i >= 2
                && chars[i - 2].1.is_uppercase()
            {
                let tail_end = chars[i..]
                    .iter()
                    .find(|(_, c)| !c.is_lowercase())
                    .map_or(run.len(), |&(j, _)| j);
                let capital = chars[i - 1].0;
                let joined = &run[capital..tail_end];
                let tail = &run[at..tail_end];
                if self.is_words(tail) && !self.is_words(joined) {
                    cuts.push(at);
                } else {
                    cuts.push(capital);
                }
            }
        }
        cuts.push(run.len());

        cuts.windows(2)
            .map(|w| &run[w[0]..w[1]])
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Dictionary pass over one camel-case word.
    fn refine(&self, word: &str, out: &mut Vec<String>) {
        let lower = word.to_ascii_lowercase();
        if word.len() < 2 || !word.bytes().all(|b| b.is_ascii_alphabetic()) || self.is_known(&lower)
        {
            out.push(word.to_string());
            return;
        }
        match self.segment(&lower) {
            Some(ranges) => out.extend(ranges.into_iter().map(|r| word[r].to_string())),
            None => out.push(word.to_string()),
        }
    }
}

impl IdentifierSplitter for RoninSplitter {
    fn split(&self, identifier: &str) -> Vec<String> {
        let mut out = Vec::new();
        for run in identifier
            .split(|c: char| !c.is_alphanumeric())
            .filter(|r| !r.is_empty())
        {
            for word in self.camel_words(run) {
                self.refine(word, &mut out);
            }
        }
        out
    }
}
