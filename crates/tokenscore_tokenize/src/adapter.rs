//! The adapter contract.

use tokenscore_ir::{Document, Token};

use crate::AdapterError;

/// A tokenizer seen as a producer of byte ranges.
///
/// Implementations must return tokens that are ordered, non-overlapping and
/// cover `0..document.len()` with no gaps. Callers re-check this with
/// [`validate_cover`].
pub trait TokenizerAdapter: Send + Sync {
    /// Short label used in logs and reports.
    fn name(&self) -> &str;

    fn tokenize(&self, document: &Document) -> Result<Vec<Token>, AdapterError>;

    /// Bytes of every regular vocabulary entry, special tokens excluded.
    ///
    /// Empty for tokenizers whose vocabulary is open or unknown.
    fn vocabulary(&self) -> Vec<Vec<u8>> {
        Vec::new()
    }
}

impl<T: TokenizerAdapter + ?Sized> TokenizerAdapter for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn tokenize(&self, document: &Document) -> Result<Vec<Token>, AdapterError> {
        (**self).tokenize(document)
    }

    fn vocabulary(&self) -> Vec<Vec<u8>> {
        (**self).vocabulary()
    }
}

/// Check that `tokens` cover `0..len` contiguously.
///
/// Zero-width tokens are allowed anywhere as long as they sit on the running
/// offset.
pub fn validate_cover(tokens: &[Token], len: usize) -> Result<(), AdapterError> {
    let mut expected = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        let start = token.span.start as usize;
        if start != expected {
            return Err(AdapterError::violation(format!(
                "token {index} starts at byte {start}, expected {expected}"
            )));
        }
        expected = token.span.end as usize;
    }
    if expected != len {
        return Err(AdapterError::violation(format!(
            "tokens end at byte {expected}, document has {len} bytes"
        )));
    }
    Ok(())
}
