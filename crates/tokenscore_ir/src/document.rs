//! Source documents.
//!
//! A [`Document`] owns the raw bytes of one source sample. Every span in the
//! system is interpreted relative to exactly one document, and the accessors
//! here are the only place spans are turned back into bytes or text.

use std::str::Utf8Error;

use crate::{Language, Span};

/// Error turning a span into bytes or text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The bytes are not valid UTF-8.
    #[error("bytes {span} are not valid UTF-8 (valid up to byte {valid_up_to} of the slice)")]
    InvalidUtf8 { span: Span, valid_up_to: usize },
    /// The span does not fit inside the document.
    #[error("span {span} lies outside a document of {len} bytes")]
    OutOfBounds { span: Span, len: usize },
}

impl DecodeError {
    fn utf8(span: Span, err: Utf8Error) -> Self {
        DecodeError::InvalidUtf8 {
            span,
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Error constructing a document.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Content length does not fit in a `u32` span offset.
    #[error("document of {0} bytes exceeds the 4 GiB span limit")]
    TooLarge(usize),
}

/// Raw source content plus its language.
///
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    lang: Language,
    content: Vec<u8>,
}

impl Document {
    /// Create a document, rejecting content whose length exceeds `u32::MAX`.
    pub fn new(lang: Language, content: impl Into<Vec<u8>>) -> Result<Self, DocumentError> {
        let content = content.into();
        if u32::try_from(content.len()).is_err() {
            return Err(DocumentError::TooLarge(content.len()));
        }
        Ok(Document { lang, content })
    }

    #[inline]
    pub fn lang(&self) -> Language {
        self.lang
    }

    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Span covering the whole document.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "length is checked against u32::MAX in Document::new"
    )]
    pub fn full_span(&self) -> Span {
        Span::new(0, self.content.len() as u32)
    }

    /// The whole content as UTF-8 text.
    pub fn as_str(&self) -> Result<&str, DecodeError> {
        std::str::from_utf8(&self.content).map_err(|e| DecodeError::utf8(self.full_span(), e))
    }

    /// Bytes covered by `span`.
    pub fn bytes(&self, span: Span) -> Result<&[u8], DecodeError> {
        self.content
            .get(span.to_range())
            .ok_or(DecodeError::OutOfBounds {
                span,
                len: self.content.len(),
            })
    }

    /// Text covered by `span`; fails if the bytes are not UTF-8.
    pub fn text(&self, span: Span) -> Result<&str, DecodeError> {
        let bytes = self.bytes(span)?;
        std::str::from_utf8(bytes).map_err(|e| DecodeError::utf8(span, e))
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences instead of replacing
/// them.
///
/// A token that splits a multi-byte character decodes to the characters it
/// fully contains.
pub fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
