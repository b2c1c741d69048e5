//! Corpus runner.
//!
//! Documents are scored on a scoped rayon pool, one task per document, in no
//! particular order. Results flow over a bounded crossbeam channel to the
//! calling thread, which folds them into a [`RunSummary`] and feeds the sink
//! in arrival order.

use std::time::Instant;

use crossbeam::channel::{self, Receiver, Sender};
use rayon::prelude::*;
use tracing::warn;

use tokenscore_eval::{compute_token_score, TokenFrequencies};
use tokenscore_ir::{Deadline, Document};
use tokenscore_tokenize::AdapterError;

use crate::config::EvalConfig;
use crate::context::ScoringContext;
use crate::input::CorpusItem;
use crate::result::{DocumentOutcome, DocumentResult, RunSummary};
use crate::sink::MetricsSink;

/// Scores corpora with a shared [`ScoringContext`].
#[derive(Debug)]
pub struct Runner<'ctx> {
    context: &'ctx ScoringContext,
    config: EvalConfig,
}

impl<'ctx> Runner<'ctx> {
    pub fn new(context: &'ctx ScoringContext, config: EvalConfig) -> Self {
        Runner { context, config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Score one document under a fresh deadline.
    #[tracing::instrument(level = "debug", skip_all, fields(lang = %document.lang(), bytes = document.len()))]
    pub fn score_document(&self, document: &Document) -> DocumentOutcome {
        if let Some(reason) = self.rejection(document) {
            return DocumentOutcome::Skipped(reason);
        }

        let deadline = Deadline::after(self.config.timeout);
        let tokenizer = &self.context.tokenizer;
        let tokens = match tokenizer.tokenize(document) {
            Ok(tokens) => tokens,
            Err(AdapterError::Decode(e)) => {
                return DocumentOutcome::Skipped(format!("not UTF-8 text: {e}"))
            }
            Err(e) => return DocumentOutcome::Failed(format!("{}: {e}", tokenizer.name())),
        };

        match compute_token_score(
            &self.context.parser,
            document,
            &tokens,
            &*self.context.splitter,
            &deadline,
        ) {
            Ok(result) => DocumentOutcome::Scored(result.metrics),
            Err(e) if e.is_timeout() => DocumentOutcome::TimedOut,
            Err(e) => DocumentOutcome::Failed(e.to_string()),
        }
    }

    fn rejection(&self, document: &Document) -> Option<String> {
        if document.len() > self.config.max_document_bytes {
            return Some(format!(
                "document of {} bytes exceeds the {} byte limit",
                document.len(),
                self.config.max_document_bytes
            ));
        }
        if !self.config.accepts(document.lang()) {
            return Some(format!("language {} not selected", document.lang()));
        }
        None
    }

    fn process(&self, item: CorpusItem) -> DocumentResult {
        let (lang, outcome) = match item.document {
            Ok(document) => (Some(document.lang()), self.score_document(&document)),
            Err(outcome) => (None, outcome),
        };
        match &outcome {
            DocumentOutcome::Failed(reason) => warn!(document = %item.label, "scoring failed: {reason}"),
            DocumentOutcome::TimedOut => warn!(document = %item.label, "timed out"),
            DocumentOutcome::Skipped(reason) => {
                tracing::debug!(document = %item.label, "skipped: {reason}");
            }
            DocumentOutcome::Scored(_) => {}
        }
        DocumentResult {
            label: item.label,
            lang,
            outcome,
        }
    }

    /// Score every item of `corpus`, streaming scored rows into `sink`.
    ///
    /// Per-document failures are counted, never fatal. If the sink fails, the
    /// error is kept in the summary and the remaining rows are dropped, but
    /// scoring runs to completion.
    pub fn run<I>(&self, corpus: I, sink: &mut dyn MetricsSink) -> RunSummary
    where
        I: Iterator<Item = CorpusItem> + Send,
    {
        let start = Instant::now();
        let (tx, rx) = channel::bounded(self.config.channel_capacity.max(1));

        let mut summary = std::thread::scope(|scope| {
            let workers = scope.spawn(move || self.score_all(corpus, tx));
            let summary = Self::coordinate(rx, sink);
            if workers.join().is_err() {
                warn!("scoring workers panicked; summary is incomplete");
            }
            summary
        });

        summary.elapsed = start.elapsed();
        tracing::info!(
            scored = summary.scored,
            skipped = summary.skipped,
            failed = summary.failed,
            timed_out = summary.timed_out,
            elapsed_ms = summary.elapsed.as_millis(),
            "run finished"
        );
        summary
    }

    /// Fold results in arrival order. Keeps draining after a sink error so
    /// workers never block on a full channel.
    fn coordinate(rx: Receiver<DocumentResult>, sink: &mut dyn MetricsSink) -> RunSummary {
        let mut summary = RunSummary::new();
        for result in rx {
            let writable = summary.sink_error.is_none();
            if let (DocumentOutcome::Scored(metrics), Some(lang), true) =
                (&result.outcome, result.lang, writable)
            {
                if let Err(e) = sink.record(lang, metrics) {
                    warn!("sink write failed ({e}), dropping remaining rows");
                    summary.sink_error = Some(e.to_string());
                }
            }
            summary.record(&result);
        }
        if summary.sink_error.is_none() {
            if let Err(e) = sink.finish() {
                warn!("sink flush failed ({e})");
                summary.sink_error = Some(e.to_string());
            }
        }
        summary
    }

    fn score_all<I>(&self, corpus: I, tx: Sender<DocumentResult>)
    where
        I: Iterator<Item = CorpusItem> + Send,
    {
        let mut pending = Some(corpus);

        // Scoped pool: torn down before returning, no global pool state.
        let pooled = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                if let Some(corpus) = pending.take() {
                    let tx = tx.clone();
                    pool.install(move || {
                        corpus.par_bridge().for_each_with(tx, |tx, item| {
                            // receiver only goes away if the coordinator died
                            let _ = tx.send(self.process(item));
                        });
                    });
                }
            });

        if let Err(e) = pooled {
            warn!("failed to create thread pool ({e}), running sequentially");
            for item in pending.into_iter().flatten() {
                if tx.send(self.process(item)).is_err() {
                    break;
                }
            }
        }
    }

    /// Count token pieces over `corpus`. Items that cannot be tokenized are
    /// logged and left out. The tokenizer's vocabulary is seeded at count 0,
    /// so entries that never occur are reported too.
    pub fn frequencies<I>(&self, corpus: I) -> TokenFrequencies
    where
        I: Iterator<Item = CorpusItem> + Send,
    {
        let mut pending = Some(corpus);
        let pooled = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pending.take().map(|corpus| {
                    pool.install(move || {
                        corpus
                            .par_bridge()
                            .fold(TokenFrequencies::new, |mut acc, item| {
                                self.count_item(&mut acc, item);
                                acc
                            })
                            .reduce(TokenFrequencies::new, |mut a, b| {
                                a.merge(b);
                                a
                            })
                    })
                })
            });

        let mut frequencies = match pooled {
            Ok(Some(frequencies)) => frequencies,
            Ok(None) => TokenFrequencies::new(),
            Err(e) => {
                warn!("failed to create thread pool ({e}), running sequentially");
                let mut acc = TokenFrequencies::new();
                for item in pending.into_iter().flatten() {
                    self.count_item(&mut acc, item);
                }
                acc
            }
        };
        frequencies.seed_vocabulary(self.context.tokenizer.vocabulary());
        frequencies
    }

    fn count_item(&self, acc: &mut TokenFrequencies, item: CorpusItem) {
        let Ok(document) = item.document else {
            return;
        };
        if self.rejection(&document).is_some() {
            return;
        }
        match self.context.tokenizer.tokenize(&document) {
            Ok(tokens) => acc.add_document(&document, &tokens),
            Err(e) => warn!(document = %item.label, "tokenizer failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests;
