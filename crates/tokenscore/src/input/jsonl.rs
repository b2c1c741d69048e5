//! JSON Lines corpora: one `{"lang": ..., "content": ...}` object per line.

use std::io::BufRead;

use serde::Deserialize;
use tokenscore_ir::{Document, Language};

use super::CorpusItem;

/// One record of a JSONL corpus.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct JsonlRecord {
    pub lang: String,
    pub content: String,
}

/// Lazily read `reader` as a JSONL corpus.
///
/// Blank lines are ignored. A record in an unsupported language is skipped;
/// a line that is not a valid record fails on its own without ending the
/// stream. `source` prefixes every item label.
pub fn jsonl_corpus<R>(reader: R, source: &str) -> impl Iterator<Item = CorpusItem> + Send
where
    R: BufRead + Send,
{
    let source = source.to_string();
    reader
        .lines()
        .enumerate()
        .filter_map(move |(index, line)| {
            let label = format!("{source}:{}", index + 1);
            match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(parse_record(label, &line)),
                Err(e) => Some(CorpusItem::failed(label, format!("read failed: {e}"))),
            }
        })
}

fn parse_record(label: String, line: &str) -> CorpusItem {
    let record: JsonlRecord = match serde_json::from_str(line) {
        Ok(record) => record,
        Err(e) => return CorpusItem::failed(label, format!("malformed record: {e}")),
    };
    let lang = match record.lang.parse::<Language>() {
        Ok(lang) => lang,
        Err(e) => return CorpusItem::skipped(label, e.to_string()),
    };
    match Document::new(lang, record.content) {
        Ok(doc) => CorpusItem::loaded(label, doc),
        Err(e) => CorpusItem::skipped(label, e.to_string()),
    }
}
