//! Id-to-bytes adapters.
//!
//! A byte-level tokenizer encodes the whole text into ids, and every id
//! decodes to a fixed byte string. Concatenating the decoded bytes reproduces
//! the input, so token ranges are running sums of the decoded lengths
//! starting at offset 0.

use tracing::trace;

use tokenscore_ir::{Document, Span, Token};

use crate::{AdapterError, TokenizerAdapter};

/// A tokenizer whose ids decode to raw bytes.
pub trait ByteLevelEncoder: Send + Sync {
    fn name(&self) -> &str;

    /// Encode `text` into token ids, without special tokens.
    fn encode(&self, text: &str) -> Result<Vec<u32>, AdapterError>;

    /// Raw bytes of token `id`, or `None` for an unknown id.
    fn token_bytes(&self, id: u32) -> Option<Vec<u8>>;

    /// Bytes of every regular id; empty for an open vocabulary.
    fn vocabulary(&self) -> Vec<Vec<u8>> {
        Vec::new()
    }
}

/// [`TokenizerAdapter`] over any [`ByteLevelEncoder`].
#[derive(Clone, Debug, Default)]
pub struct ByteLevelAdapter<E> {
    encoder: E,
}

impl<E: ByteLevelEncoder> ByteLevelAdapter<E> {
    pub fn new(encoder: E) -> Self {
        ByteLevelAdapter { encoder }
    }
}

impl<E: ByteLevelEncoder> TokenizerAdapter for ByteLevelAdapter<E> {
    fn name(&self) -> &str {
        self.encoder.name()
    }

    fn tokenize(&self, document: &Document) -> Result<Vec<Token>, AdapterError> {
        let text = document.as_str()?;
        let ids = self.encoder.encode(text)?;

        let mut tokens = Vec::with_capacity(ids.len());
        let mut offset = 0usize;
        for id in ids {
            let bytes = self.encoder.token_bytes(id).ok_or_else(|| {
                AdapterError::violation(format!("token id {id} has no byte decoding"))
            })?;
            let end = offset + bytes.len();
            tokens.push(Token::new(Span::try_from_range(offset..end)?));
            offset = end;
        }

        if offset != document.len() {
            return Err(AdapterError::violation(format!(
                "decoded tokens span {offset} bytes, document has {}",
                document.len()
            )));
        }

        trace!(tokenizer = self.name(), count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    fn vocabulary(&self) -> Vec<Vec<u8>> {
        self.encoder.vocabulary()
    }
}
