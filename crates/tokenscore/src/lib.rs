//! TokenScore driver.
//!
//! Wires the scoring crates into runnable evaluations:
//! - [`input`]: corpora from directory trees or JSON Lines files
//! - [`Runner`]: parallel per-document scoring with per-document deadlines
//! - [`sink`]: per-document CSV stream and its re-aggregation
//! - [`report`]: snippet tables, headline metrics and JSON reports
//!
//! The `tokenscore` binary is a thin CLI over this library.

pub mod config;
pub mod context;
pub mod input;
pub mod logging;
pub mod report;
mod result;
mod runner;
pub mod sink;

pub use config::{EnvError, EvalConfig};
pub use context::{ContextError, ScoringContext, TokenizerChoice};
pub use result::{DocumentOutcome, DocumentResult, RunSummary};
pub use runner::Runner;
