//! Syntax collection errors.

use tokenscore_ir::{Language, SpanError, Timeout};

/// Error parsing a document or walking its tree.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    /// The grammar could not be loaded into a parser (ABI mismatch).
    #[error("failed to load the {lang} grammar: {message}")]
    Grammar { lang: Language, message: String },
    /// No grammar was configured for the document's language.
    #[error("no grammar configured for {0}")]
    MissingGrammar(Language),
    /// The parser gave up without producing a tree.
    #[error("parser produced no tree for a {lang} document")]
    ParseFailed { lang: Language },
    /// A node reported a byte range that is not a valid span.
    #[error("node byte range is not a valid span: {0}")]
    Span(#[from] SpanError),
    #[error(transparent)]
    Timeout(#[from] Timeout),
}
