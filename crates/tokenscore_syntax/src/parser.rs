//! tree-sitter parser backend.
//!
//! Grammars are loaded once when the [`SyntaxParser`] is built; a grammar that
//! fails to load is a startup error. `tree_sitter::Parser` is not `Sync`, so
//! each [`SyntaxParser::parse`] call configures a short-lived parser from the
//! shared grammar. That keeps `SyntaxParser` shareable across worker threads.

use rustc_hash::FxHashMap;
use tracing::debug;

use tokenscore_ir::{Deadline, Document, Language, Timeout};

use crate::{Grammar, SyntaxError};

/// Parsed syntax tree of one document.
pub struct SyntaxTree {
    lang: Language,
    tree: tree_sitter::Tree,
}

impl SyntaxTree {
    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Whether the parser had to recover from syntax errors.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("lang", &self.lang)
            .field("root", &self.root().kind())
            .finish()
    }
}

/// Parser capability: one grammar per supported language.
#[derive(Clone, Debug)]
pub struct SyntaxParser {
    grammars: FxHashMap<Language, Grammar>,
}

impl SyntaxParser {
    /// Load every supported grammar.
    pub fn new() -> Result<Self, SyntaxError> {
        Self::with_languages(&Language::ALL)
    }

    /// Load only the grammars for `langs`.
    pub fn with_languages(langs: &[Language]) -> Result<Self, SyntaxError> {
        let mut grammars = FxHashMap::default();
        for &lang in langs {
            let grammar = Grammar::for_language(lang);
            // Fail at startup rather than on the first document.
            load(&grammar)?;
            grammars.insert(lang, grammar);
        }
        Ok(SyntaxParser { grammars })
    }

    pub fn supports(&self, lang: Language) -> bool {
        self.grammars.contains_key(&lang)
    }

    pub fn grammar(&self, lang: Language) -> Option<&Grammar> {
        self.grammars.get(&lang)
    }

    /// Identifier kinds configured for `lang`.
    pub fn identifier_kinds(&self, lang: Language) -> Result<&'static [&'static str], SyntaxError> {
        self.grammar(lang)
            .map(|g| g.identifier_kinds)
            .ok_or(SyntaxError::MissingGrammar(lang))
    }

    /// Parse `document` within `deadline`.
    ///
    /// The remaining budget becomes the parser's own timeout, so a
    /// pathological input cannot outlive its task.
    #[tracing::instrument(level = "debug", skip_all, fields(lang = %document.lang(), bytes = document.len()))]
    pub fn parse(&self, document: &Document, deadline: &Deadline) -> Result<SyntaxTree, SyntaxError> {
        let lang = document.lang();
        let grammar = self
            .grammars
            .get(&lang)
            .ok_or(SyntaxError::MissingGrammar(lang))?;

        let mut parser = load(grammar)?;
        if let Some(remaining) = deadline.remaining() {
            // A zero timeout means "unbounded" to tree-sitter.
            let micros = u64::try_from(remaining.as_micros()).unwrap_or(u64::MAX);
            if micros == 0 {
                return Err(Timeout.into());
            }
            parser.set_timeout_micros(micros);
        }

        let Some(tree) = parser.parse(document.content(), None) else {
            if deadline.is_expired() {
                return Err(Timeout.into());
            }
            return Err(SyntaxError::ParseFailed { lang });
        };

        let tree = SyntaxTree { lang, tree };
        if tree.has_errors() {
            debug!("tree contains error nodes");
        }
        Ok(tree)
    }
}

fn load(grammar: &Grammar) -> Result<tree_sitter::Parser, SyntaxError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&grammar.language)
        .map_err(|e| SyntaxError::Grammar {
            lang: grammar.lang,
            message: e.to_string(),
        })?;
    Ok(parser)
}
