//! TokenScore CLI
//!
//! ```bash
//! # Score a source tree with the byte tokenizer, streaming rows to CSV
//! tokenscore corpus src/ --csv rows.csv --output report.json
//!
//! # Score a JSON Lines corpus with a Hugging Face tokenizer
//! tokenscore corpus --jsonl corpus.jsonl --tokenizer hf:tokenizer.json
//!
//! # Inspect one file
//! tokenscore snippet main.py --tokenizer pretoken
//!
//! # Re-aggregate per-language CSV streams
//! tokenscore export --input python=py.csv --input go=go.csv
//!
//! # Token piece statistics
//! tokenscore frequencies src/ --top 20
//! ```
//!
//! `RUST_LOG` controls log output (default `warn`); `TOKENSCORE_LOG_TREE=1`
//! switches to hierarchical output.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use tokenscore::input::{directory_corpus, jsonl_corpus, CorpusItem};
use tokenscore::logging::init_tracing;
use tokenscore::report::{headline, snippet_report, to_json};
use tokenscore::sink::{aggregate_csv, CsvSink, NullSink};
use tokenscore::{EvalConfig, RunSummary, Runner, ScoringContext, TokenizerChoice};
use tokenscore_eval::{compute_token_score, TokenScore};
use tokenscore_ir::{Deadline, Document, Language};

#[derive(Parser, Debug)]
#[command(name = "tokenscore")]
#[command(about = "Evaluate how well a tokenizer's tokens align with code syntax")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a corpus and report per-language metrics
    Corpus(CorpusArgs),
    /// Score one file and show how each identifier was split
    Snippet(SnippetArgs),
    /// Fold per-document CSV files into a per-language report
    Export(ExportArgs),
    /// Count token pieces over a corpus
    Frequencies(FrequencyArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Directory tree (or single file) to score
    #[arg(required_unless_present = "jsonl")]
    path: Option<PathBuf>,

    /// JSON Lines corpus of {"lang", "content"} records
    #[arg(long, conflicts_with = "path")]
    jsonl: Option<PathBuf>,

    /// Tokenizer: `bytes`, `pretoken` or `hf:<tokenizer.json>`
    #[arg(short, long, default_value = "bytes")]
    tokenizer: TokenizerChoice,

    /// Only score these languages (repeatable)
    #[arg(short, long = "lang")]
    languages: Vec<Language>,

    /// Skip documents larger than this many bytes
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct CorpusArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Extra splitter words, whitespace separated
    #[arg(long)]
    words: Option<PathBuf>,

    /// Per-document time budget in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Stream one CSV row per scored document to this file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SnippetArgs {
    /// Source file to score
    file: PathBuf,

    /// Language, if the extension does not tell
    #[arg(short, long)]
    lang: Option<Language>,

    /// Tokenizer: `bytes`, `pretoken` or `hf:<tokenizer.json>`
    #[arg(short, long, default_value = "bytes")]
    tokenizer: TokenizerChoice,

    /// Extra splitter words, whitespace separated
    #[arg(long)]
    words: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// `LANG=PATH` of a per-document CSV file (repeatable)
    #[arg(short, long = "input", required = true, value_parser = parse_export_input)]
    inputs: Vec<(Language, PathBuf)>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrequencyArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// How many rarest and most frequent pieces to list
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn parse_export_input(s: &str) -> Result<(Language, PathBuf), String> {
    let (lang, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LANG=PATH, got `{s}`"))?;
    let lang = lang.parse::<Language>().map_err(|e| e.to_string())?;
    if path.is_empty() {
        return Err(format!("missing path in `{s}`"));
    }
    Ok((lang, PathBuf::from(path)))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Corpus(args) => run_corpus(args),
        Command::Snippet(args) => run_snippet(&args),
        Command::Export(args) => run_export(&args),
        Command::Frequencies(args) => run_frequencies(args),
    }
}

impl SourceArgs {
    /// Defaults, then flags, then environment overrides.
    fn config(&self, timeout_ms: Option<u64>) -> Result<EvalConfig> {
        let mut config = EvalConfig::default();
        if !self.languages.is_empty() {
            config.languages.clone_from(&self.languages);
        }
        if let Some(bytes) = self.max_bytes {
            config.max_document_bytes = bytes;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(ms) = timeout_ms {
            config.timeout = Duration::from_millis(ms);
        }
        config.with_env().context("invalid environment override")
    }

    fn corpus(&self) -> Result<Box<dyn Iterator<Item = CorpusItem> + Send>> {
        if let Some(jsonl) = &self.jsonl {
            let file = File::open(jsonl)
                .with_context(|| format!("failed to open {}", jsonl.display()))?;
            let label = jsonl.display().to_string();
            return Ok(Box::new(jsonl_corpus(BufReader::new(file), &label)));
        }
        match &self.path {
            Some(path) if path.exists() => Ok(Box::new(directory_corpus(path))),
            Some(path) => bail!("{} does not exist", path.display()),
            None => bail!("no corpus given: pass a path or --jsonl"),
        }
    }
}

fn read_words(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

fn run_corpus(args: CorpusArgs) -> Result<()> {
    let config = args.source.config(args.timeout_ms)?;
    let words = read_words(args.words.as_deref())?;
    let context = ScoringContext::build(&config.languages, &args.source.tokenizer, &words)
        .context("failed to build scoring context")?;
    let corpus = args.source.corpus()?;
    let runner = Runner::new(&context, config);

    let summary = match &args.csv {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut sink = CsvSink::new(BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            runner.run(corpus, &mut sink)
        }
        None => runner.run(corpus, &mut NullSink),
    };

    print_summary(&summary);
    write_report(&summary.score, args.output.as_deref())?;

    if let Some(e) = &summary.sink_error {
        bail!("CSV output is incomplete: {e}");
    }
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    eprintln!(
        "scored {}, skipped {}, failed {}, timed out {} in {:.2}s",
        summary.scored,
        summary.skipped,
        summary.failed,
        summary.timed_out,
        summary.elapsed.as_secs_f64()
    );
    eprint!("{}", headline(&summary.score));
}

fn write_report(score: &TokenScore, output: Option<&Path>) -> Result<()> {
    let json = to_json(score).context("failed to serialize report")?;
    match output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write report")
        }
    }
}

fn run_snippet(args: &SnippetArgs) -> Result<()> {
    let lang = match args.lang {
        Some(lang) => lang,
        None => args
            .file
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Language::from_extension)
            .with_context(|| {
                format!("cannot tell the language of {}; pass --lang", args.file.display())
            })?,
    };
    let content =
        fs::read(&args.file).with_context(|| format!("failed to read {}", args.file.display()))?;
    let document = Document::new(lang, content)?;

    let words = read_words(args.words.as_deref())?;
    let context = ScoringContext::build(&[lang], &args.tokenizer, &words)
        .context("failed to build scoring context")?;
    let config = EvalConfig::default().with_env()?;

    let tokens = context
        .tokenizer
        .tokenize(&document)
        .with_context(|| format!("tokenizer `{}` failed", context.tokenizer.name()))?;
    let result = compute_token_score(
        &context.parser,
        &document,
        &tokens,
        &*context.splitter,
        &Deadline::after(config.timeout),
    )
    .with_context(|| format!("failed to score {}", args.file.display()))?;

    print!("{}", snippet_report(&document, &result));
    Ok(())
}

fn run_export(args: &ExportArgs) -> Result<()> {
    let mut score = TokenScore::new();
    for (lang, path) in &args.inputs {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let metrics = aggregate_csv(BufReader::new(file))
            .with_context(|| format!("failed to read {}", path.display()))?;
        score.add(&metrics, *lang);
    }

    print!("{}", headline(&score));
    write_report(&score, args.output.as_deref())
}

fn run_frequencies(args: FrequencyArgs) -> Result<()> {
    let config = args.source.config(None)?;
    let context = ScoringContext::build(&config.languages, &args.source.tokenizer, &[])
        .context("failed to build scoring context")?;
    let corpus = args.source.corpus()?;
    let runner = Runner::new(&context, config);

    let summary = runner.frequencies(corpus).summary(args.top);
    let json = serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
    println!("{json}");
    Ok(())
}

