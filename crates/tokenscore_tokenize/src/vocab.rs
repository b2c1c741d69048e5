//! Single-byte vocabulary.

use crate::{AdapterError, ByteLevelEncoder};

/// The 256-entry vocabulary where every byte is its own token.
///
/// Compression under this tokenizer is exactly 1.0, which makes it the
/// baseline every other tokenizer is compared against.
#[derive(Copy, Clone, Debug, Default)]
pub struct ByteVocab;

impl ByteVocab {
    pub const SIZE: usize = 256;
}

impl ByteLevelEncoder for ByteVocab {
    fn name(&self) -> &str {
        "bytes"
    }

    fn encode(&self, text: &str) -> Result<Vec<u32>, AdapterError> {
        Ok(text.bytes().map(u32::from).collect())
    }

    fn token_bytes(&self, id: u32) -> Option<Vec<u8>> {
        u8::try_from(id).ok().map(|b| vec![b])
    }

    fn vocabulary(&self) -> Vec<Vec<u8>> {
        (0..Self::SIZE)
            .filter_map(|b| u8::try_from(b).ok())
            .map(|b| vec![b])
            .collect()
    }
}

#[cfg(test)]
mod tests;
