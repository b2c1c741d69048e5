//! Corpus inputs.
//!
//! A corpus is a lazy stream of [`CorpusItem`]s. Items that can be rejected
//! without scoring (unsupported language, unreadable file, malformed record)
//! carry their outcome instead of a document, so the runner counts them like
//! any other result.

mod discovery;
mod jsonl;

pub use discovery::{directory_corpus, discover_sources, SourceFile};
pub use jsonl::{jsonl_corpus, JsonlRecord};

use tokenscore_ir::Document;

use crate::DocumentOutcome;

/// One document of a corpus, or the reason it cannot be scored.
#[derive(Debug)]
pub struct CorpusItem {
    /// File path or `file:line`, for logs.
    pub label: String,
    pub document: Result<Document, DocumentOutcome>,
}

impl CorpusItem {
    pub fn loaded(label: impl Into<String>, document: Document) -> Self {
        CorpusItem {
            label: label.into(),
            document: Ok(document),
        }
    }

    #[cold]
    pub fn skipped(label: impl Into<String>, reason: impl Into<String>) -> Self {
        CorpusItem {
            label: label.into(),
            document: Err(DocumentOutcome::Skipped(reason.into())),
        }
    }

    #[cold]
    pub fn failed(label: impl Into<String>, reason: impl Into<String>) -> Self {
        CorpusItem {
            label: label.into(),
            document: Err(DocumentOutcome::Failed(reason.into())),
        }
    }
}
