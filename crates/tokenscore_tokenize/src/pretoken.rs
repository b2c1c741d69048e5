//! Regex pre-token vocabulary.
//!
//! Splits text the way `cl100k`-style byte-level BPE tokenizers do before
//! merging: contractions, letter runs with one optional leading symbol,
//! digit groups of up to three, punctuation runs, newlines and horizontal
//! whitespace. Each distinct piece becomes one id, assigned on first sight.
//! With no merges below the pre-token level this is the coarsest split such a
//! tokenizer can produce, which makes it a useful upper bound for
//! compression.

use logos::Logos;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{AdapterError, ByteLevelEncoder};

/// Pre-token classes of the `cl100k_base` split pattern.
#[derive(Logos, Debug, PartialEq, Clone)]
enum Pretoken {
    #[regex(r"'[sStTdDmM]|'[rR][eE]|'[vV][eE]|'[lL][lL]")]
    Contraction,

    #[regex(r"[^\r\n\p{Letter}\p{Number}]?\p{Letter}+")]
    Letters,

    #[regex(r"\p{Number}{1,3}")]
    Digits,

    #[regex(r" ?[^\s\p{Letter}\p{Number}]+[\r\n]*")]
    Punctuation,

    #[regex(r"\s*[\r\n]+")]
    Newline,

    #[regex(r"[^\S\r\n]+")]
    Whitespace,
}

#[derive(Default)]
struct Pieces {
    ids: FxHashMap<Box<str>, u32>,
    pieces: Vec<Box<str>>,
}

/// Interning vocabulary over regex pre-token pieces.
///
/// Shared by all worker threads: lookups take a read lock, and only a piece
/// seen for the first time takes the write lock.
#[derive(Default)]
pub struct PretokenVocab {
    inner: RwLock<Pieces>,
}

impl PretokenVocab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct pieces seen so far.
    pub fn len(&self) -> usize {
        self.inner.read().pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split `text` into pieces without interning them.
    pub fn split(text: &str) -> Vec<&str> {
        let mut pieces = Vec::new();
        let mut last = 0;
        for (_, range) in Pretoken::lexer(text).spanned() {
            // Error spans may end inside a character; fold them into the
            // next piece.
            if !text.is_char_boundary(range.end) {
                continue;
            }
            // Unmatched input still becomes a piece so the split covers the
            // whole text.
            if range.start > last && text.is_char_boundary(range.start) {
                pieces.push(&text[last..range.start]);
                last = range.start;
            }
            pieces.push(&text[last..range.end]);
            last = range.end;
        }
        if last < text.len() {
            pieces.push(&text[last..]);
        }
        pieces
    }

    fn intern(&self, piece: &str) -> Result<u32, AdapterError> {
        if let Some(&id) = self.inner.read().ids.get(piece) {
            return Ok(id);
        }

        let mut inner = self.inner.write();
        // Another thread may have interned it between the two locks.
        if let Some(&id) = inner.ids.get(piece) {
            return Ok(id);
        }
        let id = u32::try_from(inner.pieces.len()).map_err(|_| AdapterError::Backend {
            name: "pretoken".to_string(),
            message: "vocabulary exceeds u32::MAX pieces".to_string(),
        })?;
        inner.ids.insert(piece.into(), id);
        inner.pieces.push(piece.into());
        Ok(id)
    }
}

impl std::fmt::Debug for PretokenVocab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PretokenVocab")
            .field("pieces", &self.len())
            .finish()
    }
}

impl ByteLevelEncoder for PretokenVocab {
    fn name(&self) -> &str {
        "pretoken"
    }

    fn encode(&self, text: &str) -> Result<Vec<u32>, AdapterError> {
        Self::split(text)
            .into_iter()
            .map(|piece| self.intern(piece))
            .collect()
    }

    fn token_bytes(&self, id: u32) -> Option<Vec<u8>> {
        self.inner
            .read()
            .pieces
            .get(id as usize)
            .map(|p| p.as_bytes().to_vec())
    }
}
