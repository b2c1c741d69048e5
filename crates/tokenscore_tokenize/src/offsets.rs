//! Offset-mapping adapters.
//!
//! Some tokenizers cannot decode ids back to bytes but do report, per token,
//! the character range of the input it came from. Ranges may repeat
//! (byte-fallback pieces of one character), overlap, or leave out
//! whitespace the tokenizer trimmed. Conversion therefore walks the tokens in
//! order and gives each one the UTF-8 length of the text between the furthest
//! character consumed so far and the end of its own range. A repeat covers
//! zero bytes, and every token starts where the previous one ended.

use std::ops::Range;

use tracing::trace;

use tokenscore_ir::{Document, Span, Token};

use crate::{AdapterError, TokenizerAdapter};

/// Character offsets reported by a tokenizer for one text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharEncoding {
    /// Number of tokens the tokenizer says it produced.
    pub token_count: usize,
    /// Character range per token, in token order.
    pub offsets: Vec<Range<usize>>,
}

/// A tokenizer that reports character offsets per token.
pub trait OffsetEncoder: Send + Sync {
    fn name(&self) -> &str;

    /// Encode `text` without special tokens.
    fn encode_offsets(&self, text: &str) -> Result<CharEncoding, AdapterError>;

    /// Bytes of every regular vocabulary entry, special tokens excluded.
    fn vocabulary(&self) -> Vec<Vec<u8>> {
        Vec::new()
    }
}

/// Convert per-token character ranges over `text` into byte spans.
///
/// Fails if a range lies outside `text` or the spans do not end at
/// `text.len()`.
pub fn char_offsets_to_spans(
    text: &str,
    offsets: &[Range<usize>],
) -> Result<Vec<Span>, AdapterError> {
    // Byte offset of every char boundary, plus the end of the text.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut spans = Vec::with_capacity(offsets.len());
    // Character offset up to which text has been assigned to a token.
    let mut char_end = 0usize;
    let mut byte_end = 0usize;

    for range in offsets {
        let (Some(_), Some(&end)) = (boundaries.get(range.start), boundaries.get(range.end)) else {
            return Err(AdapterError::violation(format!(
                "character range {range:?} lies outside a text of {} characters",
                boundaries.len() - 1
            )));
        };
        let width = if range.end > char_end {
            let consumed = boundaries[char_end];
            char_end = range.end;
            end - consumed
        } else {
            0
        };

        let byte_start = byte_end;
        byte_end += width;
        spans.push(Span::try_from_range(byte_start..byte_end)?);
    }

    if byte_end != text.len() {
        return Err(AdapterError::violation(format!(
            "offset mapping ends at byte {byte_end}, text has {} bytes",
            text.len()
        )));
    }
    Ok(spans)
}

/// [`TokenizerAdapter`] over any [`OffsetEncoder`].
#[derive(Clone, Debug, Default)]
pub struct OffsetMappingAdapter<E> {
    encoder: E,
}

impl<E: OffsetEncoder> OffsetMappingAdapter<E> {
    pub fn new(encoder: E) -> Self {
        OffsetMappingAdapter { encoder }
    }
}

impl<E: OffsetEncoder> TokenizerAdapter for OffsetMappingAdapter<E> {
    fn name(&self) -> &str {
        self.encoder.name()
    }

    fn tokenize(&self, document: &Document) -> Result<Vec<Token>, AdapterError> {
        let text = document.as_str()?;
        let encoding = self.encoder.encode_offsets(text)?;

        if encoding.offsets.len() != encoding.token_count {
            return Err(AdapterError::violation(format!(
                "{} offsets for {} tokens",
                encoding.offsets.len(),
                encoding.token_count
            )));
        }

        let spans = char_offsets_to_spans(text, &encoding.offsets)?;
        trace!(tokenizer = self.name(), count = spans.len(), "tokenized");
        Ok(spans.into_iter().map(Token::new).collect())
    }

    fn vocabulary(&self) -> Vec<Vec<u8>> {
        self.encoder.vocabulary()
    }
}

#[cfg(test)]
mod tests;
