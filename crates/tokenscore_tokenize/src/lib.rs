//! Tokenizer adapters.
//!
//! Every tokenizer under evaluation is reduced to one operation: turn a
//! [`Document`](tokenscore_ir::Document) into an ordered list of byte-range
//! [`Token`](tokenscore_ir::Token)s that covers the content exactly once.
//! [`TokenizerAdapter`] is that contract; the two families of real tokenizers
//! plug into it through narrower traits:
//!
//! - [`ByteLevelEncoder`]: tokenizers that can decode each id back to its raw
//!   bytes (BPE over bytes). Wrapped by [`ByteLevelAdapter`].
//! - [`OffsetEncoder`]: tokenizers that report character offsets per token.
//!   Wrapped by [`OffsetMappingAdapter`].
//!
//! Reference encoders: [`ByteVocab`] (one token per byte), [`PretokenVocab`]
//! (regex pre-token pieces) and, with the `huggingface` feature,
//! `HfTokenizer`.

mod adapter;
mod byte_level;
mod error;
#[cfg(feature = "huggingface")]
mod hf;
mod offsets;
mod pretoken;
mod vocab;

pub use adapter::{validate_cover, TokenizerAdapter};
pub use byte_level::{ByteLevelAdapter, ByteLevelEncoder};
pub use error::AdapterError;
#[cfg(feature = "huggingface")]
pub use hf::HfTokenizer;
pub use offsets::{char_offsets_to_spans, CharEncoding, OffsetEncoder, OffsetMappingAdapter};
pub use pretoken::PretokenVocab;
pub use vocab::ByteVocab;
