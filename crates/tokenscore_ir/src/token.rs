//! Token types.
//!
//! A [`Token`] is what a tokenizer under evaluation emits: a bare byte range.
//! A [`SyntaxToken`] is what the syntax collector derives from a parse tree:
//! a byte range tagged with the grammar's node kind, or [`UNKNOWN_KIND`] for
//! the gaps between leaves.

use crate::Span;

/// Node kind assigned to synthesized gap tokens (whitespace and trivia that
/// no grammar leaf covers).
pub const UNKNOWN_KIND: &str = "unknown";

/// A byte range produced by a tokenizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(span: Span) -> Self {
        Token { span }
    }

    #[inline]
    pub fn overlaps(&self, other: Span) -> bool {
        self.span.overlaps(other)
    }
}

impl From<Span> for Token {
    fn from(span: Span) -> Self {
        Token { span }
    }
}

/// A byte range tagged with a grammar node kind.
///
/// Kinds come from the grammar tables, so they are `'static` and copying a
/// token never allocates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SyntaxToken {
    pub span: Span,
    pub kind: &'static str,
}

/// A [`SyntaxToken`] whose kind is one of a language's identifier-like kinds.
pub type IdentifierToken = SyntaxToken;

impl SyntaxToken {
    #[inline]
    pub const fn new(span: Span, kind: &'static str) -> Self {
        SyntaxToken { span, kind }
    }

    /// Gap token covering bytes that no grammar leaf claims.
    #[inline]
    pub const fn unknown(span: Span) -> Self {
        SyntaxToken {
            span,
            kind: UNKNOWN_KIND,
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.kind == UNKNOWN_KIND
    }

    /// Drop the kind tag.
    #[inline]
    pub const fn token(&self) -> Token {
        Token::new(self.span)
    }
}

mod size_asserts {
    use super::Token;
    crate::static_assert_size!(Token, 8);
}
