//! Source file discovery.
//!
//! Finds every file with a known source extension under a directory tree.
//! The language comes from the extension.

use std::fs;
use std::path::{Path, PathBuf};

use tokenscore_ir::{Document, Language};

use super::CorpusItem;

/// A discovered source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub lang: Language,
}

/// Discover source files in `path`, sorted by path.
///
/// If `path` is a file with a known extension, returns just that file.
pub fn discover_sources(path: &Path) -> Vec<SourceFile> {
    let mut files = Vec::new();
    if path.is_file() {
        if let Some(lang) = language_of(path) {
            files.push(SourceFile {
                path: path.to_path_buf(),
                lang,
            });
        }
    } else if path.is_dir() {
        discover_recursive(path, &mut files);
        files.sort_by(|a, b| a.path.cmp(&b.path));
    }
    files
}

fn language_of(path: &Path) -> Option<Language> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(Language::from_extension)
}

fn discover_recursive(dir: &Path, files: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "unreadable directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and directories
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
        }

        if path.is_dir() {
            // Skip build output and dependency trees
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if matches!(
                    name,
                    "target" | "node_modules" | "__pycache__" | "vendor" | "build" | "dist"
                ) {
                    continue;
                }
            }
            discover_recursive(&path, files);
        } else if let Some(lang) = language_of(&path) {
            files.push(SourceFile { path, lang });
        }
    }
}

/// Lazily read the discovered files under `root` as corpus items.
pub fn directory_corpus(root: &Path) -> impl Iterator<Item = CorpusItem> + Send {
    discover_sources(root).into_iter().map(|file| {
        let label = file.path.display().to_string();
        match fs::read(&file.path) {
            Ok(content) => match Document::new(file.lang, content) {
                Ok(doc) => CorpusItem::loaded(label, doc),
                Err(e) => CorpusItem::skipped(label, e.to_string()),
            },
            Err(e) => CorpusItem::failed(label, format!("read failed: {e}")),
        }
    })
}
