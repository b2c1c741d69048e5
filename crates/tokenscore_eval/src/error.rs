//! Scoring errors.

use tokenscore_ir::Timeout;
use tokenscore_syntax::SyntaxError;
use tokenscore_tokenize::AdapterError;

/// Error scoring one document.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("parse failure: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("tokenizer failure: {0}")]
    Adapter(#[from] AdapterError),
    #[error(transparent)]
    Timeout(#[from] Timeout),
}

impl ScoreError {
    /// Whether the document ran out of time, wherever that happened.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ScoreError::Timeout(_) | ScoreError::Syntax(SyntaxError::Timeout(_))
        )
    }
}
