//! Tokenizer adapter errors.

use tokenscore_ir::{DecodeError, SpanError};

/// Error tokenizing one document.
///
/// Every variant is fatal for the document being tokenized only.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The document content is not UTF-8 text.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The tokenizer output breaks the cover contract.
    #[error("adapter contract violation: {0}")]
    ContractViolation(String),
    /// A produced offset does not fit in a span.
    #[error(transparent)]
    Span(#[from] SpanError),
    /// The underlying tokenizer failed.
    #[error("tokenizer `{name}` failed: {message}")]
    Backend { name: String, message: String },
}

impl AdapterError {
    pub(crate) fn violation(msg: impl Into<String>) -> Self {
        AdapterError::ContractViolation(msg.into())
    }
}
