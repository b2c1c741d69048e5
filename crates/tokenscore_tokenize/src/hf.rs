//! Hugging Face `tokenizer.json` support.

use std::path::Path;

use crate::{AdapterError, CharEncoding, OffsetEncoder};

/// A `tokenizers::Tokenizer` reporting character offsets.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
    name: String,
}

impl HfTokenizer {
    pub fn from_file(path: &Path) -> Result<Self, AdapterError> {
        let name = path.display().to_string();
        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| AdapterError::Backend {
            name: name.clone(),
            message: e.to_string(),
        })?;
        Ok(HfTokenizer { inner, name })
    }
}

impl OffsetEncoder for HfTokenizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn encode_offsets(&self, text: &str) -> Result<CharEncoding, AdapterError> {
        let encoding = self
            .inner
            .encode_char_offsets(text, false)
            .map_err(|e| AdapterError::Backend {
                name: self.name.clone(),
                message: e.to_string(),
            })?;
        Ok(CharEncoding {
            token_count: encoding.get_ids().len(),
            offsets: encoding
                .get_offsets()
                .iter()
                .map(|&(start, end)| start..end)
                .collect(),
        })
    }

    /// Decode every base-vocabulary id on its own. Special tokens decode to
    /// nothing and are left out.
    fn vocabulary(&self) -> Vec<Vec<u8>> {
        let size = u32::try_from(self.inner.get_vocab_size(false)).unwrap_or(u32::MAX);
        (0..size)
            .filter_map(|id| self.inner.decode(&[id], true).ok())
            .filter(|piece| !piece.is_empty())
            .map(String::into_bytes)
            .collect()
    }
}

impl std::fmt::Debug for HfTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfTokenizer").field("name", &self.name).finish()
    }
}
