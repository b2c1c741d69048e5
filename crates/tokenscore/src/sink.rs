//! Per-document CSV stream and its re-aggregation.
//!
//! One row per scored document, written as results arrive. Reading the rows
//! back and folding them with [`TokenScoreMetrics::merge`] reproduces the
//! run's per-language metrics.

use std::io::{self, BufRead, Write};

use tokenscore_eval::TokenScoreMetrics;
use tokenscore_ir::Language;

/// Column order of the CSV stream.
pub const CSV_COLUMNS: [&str; 7] = [
    "total_tokens",
    "total_bytes",
    "compression",
    "token_span_score",
    "raw_identifier_splitting_score",
    "identifier_splitting_score",
    "identifier_fertility",
];

/// Receives scored documents on the coordinating thread.
pub trait MetricsSink {
    fn record(&mut self, lang: Language, metrics: &TokenScoreMetrics) -> io::Result<()>;

    /// Called once after the last document.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Discards every row.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl MetricsSink for NullSink {
    fn record(&mut self, _lang: Language, _metrics: &TokenScoreMetrics) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one CSV row per document.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: W,
    rows: u64,
}

impl<W: Write> CsvSink<W> {
    /// Wrap `writer` and write the header line.
    pub fn new(mut writer: W) -> io::Result<Self> {
        writeln!(writer, "{}", CSV_COLUMNS.join(","))?;
        Ok(CsvSink { writer, rows: 0 })
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MetricsSink for CsvSink<W> {
    fn record(&mut self, _lang: Language, m: &TokenScoreMetrics) -> io::Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{},{},{},{}",
            m.total_tokens,
            m.total_bytes,
            m.compression,
            m.token_span_score,
            m.raw_identifier_splitting_score,
            m.identifier_splitting_score,
            m.identifier_fertility,
        )?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Error reading a metrics CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("CSV input is empty")]
    Empty,
    #[error("CSV header lacks column `{0}`")]
    MissingColumn(&'static str),
    #[error("line {line}: {message}")]
    Row { line: usize, message: String },
}

/// Read every row of a metrics CSV.
///
/// Columns are located by header name, so extra columns and any column
/// order are accepted. Blank lines are ignored.
pub fn read_csv<R: BufRead>(reader: R) -> Result<Vec<TokenScoreMetrics>, CsvError> {
    let mut lines = reader.lines();
    let header = lines.next().ok_or(CsvError::Empty)??;
    let names: Vec<&str> = header.split(',').map(str::trim).collect();

    let mut index = [0usize; 7];
    for (slot, column) in index.iter_mut().zip(CSV_COLUMNS) {
        *slot = names
            .iter()
            .position(|&n| n == column)
            .ok_or(CsvError::MissingColumn(column))?;
    }

    let mut rows = Vec::new();
    for (n, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // header is line 1
        let line_no = n + 2;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        rows.push(parse_row(&fields, &index, line_no)?);
    }
    Ok(rows)
}

fn parse_row(fields: &[&str], index: &[usize; 7], line: usize) -> Result<TokenScoreMetrics, CsvError> {
    let row = Row {
        fields,
        index,
        line,
    };
    Ok(TokenScoreMetrics {
        total_tokens: row.parse(0)?,
        total_bytes: row.parse(1)?,
        compression: row.parse(2)?,
        token_span_score: row.parse(3)?,
        raw_identifier_splitting_score: row.parse(4)?,
        identifier_splitting_score: row.parse(5)?,
        identifier_fertility: row.parse(6)?,
    })
}

struct Row<'a> {
    fields: &'a [&'a str],
    index: &'a [usize; 7],
    line: usize,
}

impl Row<'_> {
    fn parse<T>(&self, column: usize) -> Result<T, CsvError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let name = CSV_COLUMNS[column];
        let Some(raw) = self.fields.get(self.index[column]) else {
            return Err(CsvError::Row {
                line: self.line,
                message: format!("missing value for `{name}`"),
            });
        };
        raw.parse().map_err(|e| CsvError::Row {
            line: self.line,
            message: format!("`{name}` = `{raw}`: {e}"),
        })
    }
}

/// Fold the rows of a metrics CSV with the byte-weighted merge.
pub fn aggregate_csv<R: BufRead>(reader: R) -> Result<TokenScoreMetrics, CsvError> {
    let rows = read_csv(reader)?;
    tracing::debug!(rows = rows.len(), "aggregating CSV rows");
    Ok(rows
        .iter()
        .fold(TokenScoreMetrics::default(), |acc, row| acc.merge(row)))
}
