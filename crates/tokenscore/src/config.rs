//! Evaluation configuration.
//!
//! Defaults come from [`EvalConfig::default`], the CLI overrides them, and
//! the environment overrides both:
//! - `TOKENSCORE_TIMEOUT_MS`: per-document time budget in milliseconds
//! - `TOKENSCORE_MAX_BYTES`: largest document that is scored

use std::time::Duration;

use tokenscore_ir::Language;

pub const TIMEOUT_ENV: &str = "TOKENSCORE_TIMEOUT_MS";
pub const MAX_BYTES_ENV: &str = "TOKENSCORE_MAX_BYTES";

/// Settings for one evaluation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Time budget per document, covering parse, collection and scoring.
    pub timeout: Duration,
    /// Documents larger than this are skipped before any work.
    pub max_document_bytes: usize,
    /// Worker threads; 0 lets rayon decide.
    pub threads: usize,
    /// Bound of the channel between workers and the coordinator.
    pub channel_capacity: usize,
    /// Languages to score; documents in other languages are skipped.
    pub languages: Vec<Language>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            timeout: Duration::from_secs(10),
            max_document_bytes: 256 * 1024,
            threads: 0,
            channel_capacity: 1024,
            languages: Language::ALL.to_vec(),
        }
    }
}

/// An environment override that is set but unusable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid value `{value}` for {var}: expected a non-negative integer")]
pub struct EnvError {
    pub var: &'static str,
    pub value: String,
}

impl EvalConfig {
    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Result<Self, EnvError> {
        self.with_env_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn with_env_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, EnvError> {
        if let Some(ms) = parse_var(&lookup, TIMEOUT_ENV)? {
            self.timeout = Duration::from_millis(ms);
        }
        if let Some(bytes) = parse_var(&lookup, MAX_BYTES_ENV)? {
            self.max_document_bytes = usize::try_from(bytes).unwrap_or(usize::MAX);
        }
        Ok(self)
    }

    pub fn accepts(&self, lang: Language) -> bool {
        self.languages.contains(&lang)
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u64>, EnvError> {
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| EnvError { var, value })
}
