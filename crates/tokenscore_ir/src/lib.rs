//! TokenScore IR - byte-range data model.
//!
//! This crate contains the value types every other TokenScore crate speaks:
//! - [`Span`]: half-open byte range over a document's content
//! - [`Token`]: a span produced by a tokenizer under evaluation
//! - [`SyntaxToken`]: a span tagged with a grammar node kind
//! - [`Document`]: raw source bytes plus their [`Language`]
//! - [`Deadline`]: per-task time budget checked cooperatively
//!
//! All offsets are byte offsets into one [`Document`]. Nothing here knows
//! about parsers or tokenizers.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod deadline;
mod document;
mod language;
mod span;
mod token;

pub use deadline::{Deadline, Timeout};
pub use document::{decode_ignoring_invalid, DecodeError, Document, DocumentError};
pub use language::{Language, UnsupportedLanguage};
pub use span::{Span, SpanError};
pub use token::{IdentifierToken, SyntaxToken, Token, UNKNOWN_KIND};
