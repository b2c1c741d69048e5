//! Scoring context: the collaborators every document needs.
//!
//! Built once at startup and shared by reference with every worker. Grammars
//! are compiled and the tokenizer is loaded here, so a broken grammar or a
//! missing tokenizer file fails the run before any document is read.

use std::fmt;
use std::str::FromStr;

use tokenscore_eval::{IdentifierSplitter, RoninSplitter};
use tokenscore_ir::Language;
use tokenscore_syntax::{SyntaxError, SyntaxParser};
use tokenscore_tokenize::{ByteLevelAdapter, ByteVocab, PretokenVocab, TokenizerAdapter};

/// Which reference tokenizer to evaluate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenizerChoice {
    /// One token per byte.
    Bytes,
    /// Regex pre-token pieces.
    Pretoken,
    /// Hugging Face `tokenizer.json` at the given path.
    HuggingFace(std::path::PathBuf),
}

impl FromStr for TokenizerChoice {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" => Ok(TokenizerChoice::Bytes),
            "pretoken" => Ok(TokenizerChoice::Pretoken),
            _ => match s.strip_prefix("hf:") {
                Some(path) if !path.is_empty() => Ok(TokenizerChoice::HuggingFace(path.into())),
                _ => Err(ContextError::UnknownTokenizer(s.to_string())),
            },
        }
    }
}

impl fmt::Display for TokenizerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerChoice::Bytes => f.write_str("bytes"),
            TokenizerChoice::Pretoken => f.write_str("pretoken"),
            TokenizerChoice::HuggingFace(path) => write!(f, "hf:{}", path.display()),
        }
    }
}

/// Error building the scoring context.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("unknown tokenizer `{0}` (expected `bytes`, `pretoken` or `hf:<tokenizer.json>`)")]
    UnknownTokenizer(String),
    #[cfg(not(feature = "huggingface"))]
    #[error("tokenizer `{0}` needs the `huggingface` feature")]
    FeatureDisabled(String),
    #[error(transparent)]
    Tokenizer(#[from] tokenscore_tokenize::AdapterError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Parser, tokenizer and splitter shared by all workers.
pub struct ScoringContext {
    pub parser: SyntaxParser,
    pub tokenizer: Box<dyn TokenizerAdapter>,
    pub splitter: Box<dyn IdentifierSplitter>,
}

impl ScoringContext {
    pub fn new(
        parser: SyntaxParser,
        tokenizer: Box<dyn TokenizerAdapter>,
        splitter: Box<dyn IdentifierSplitter>,
    ) -> Self {
        ScoringContext {
            parser,
            tokenizer,
            splitter,
        }
    }

    /// Load grammars for `languages` and the chosen tokenizer, with the
    /// default splitter plus `extra_words`.
    pub fn build(
        languages: &[Language],
        tokenizer: &TokenizerChoice,
        extra_words: &[String],
    ) -> Result<Self, ContextError> {
        let parser = SyntaxParser::with_languages(languages)?;
        let tokenizer = load_tokenizer(tokenizer)?;
        let splitter = Box::new(RoninSplitter::with_words(extra_words));
        tracing::debug!(tokenizer = tokenizer.name(), ?languages, "scoring context ready");
        Ok(ScoringContext::new(parser, tokenizer, splitter))
    }
}

impl fmt::Debug for ScoringContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringContext")
            .field("parser", &self.parser)
            .field("tokenizer", &self.tokenizer.name())
            .finish_non_exhaustive()
    }
}

/// Instantiate the adapter for `choice`.
pub fn load_tokenizer(choice: &TokenizerChoice) -> Result<Box<dyn TokenizerAdapter>, ContextError> {
    match choice {
        TokenizerChoice::Bytes => Ok(Box::new(ByteLevelAdapter::new(ByteVocab))),
        TokenizerChoice::Pretoken => Ok(Box::new(ByteLevelAdapter::new(PretokenVocab::new()))),
        #[cfg(feature = "huggingface")]
        TokenizerChoice::HuggingFace(path) => {
            let hf = tokenscore_tokenize::HfTokenizer::from_file(path)?;
            Ok(Box::new(tokenscore_tokenize::OffsetMappingAdapter::new(hf)))
        }
        #[cfg(not(feature = "huggingface"))]
        TokenizerChoice::HuggingFace(_) => Err(ContextError::FeatureDisabled(choice.to_string())),
    }
}

#[cfg(test)]
mod tests;
