//! Ground-truth token collection from syntax trees.
//!
//! Two sequences are derived from a parsed document:
//! - [`collect_syntax_tokens`]: every leaf of the tree in document order,
//!   with `"unknown"` tokens filling the gaps, so the result covers the whole
//!   document contiguously.
//! - [`collect_identifiers`]: the leaves whose kind is one of the language's
//!   identifier-like kinds (see [`identifier_kinds`]).
//!
//! Both walk any tree implementing [`SyntaxNode`]. The reference backend is
//! tree-sitter: [`SyntaxParser`] owns one compiled grammar per language and
//! produces [`SyntaxTree`]s whose nodes implement the trait.

mod collect;
mod error;
mod grammar;
mod node;
mod parser;

pub use collect::{collect_identifiers, collect_syntax_tokens};
pub use error::SyntaxError;
pub use grammar::{identifier_kinds, Grammar};
pub use node::SyntaxNode;
pub use parser::{SyntaxParser, SyntaxTree};
