//! Per-language grammar configuration.

use tokenscore_ir::Language;

/// A compiled tree-sitter grammar plus the node kinds that count as
/// identifiers in it.
#[derive(Clone, Debug)]
pub struct Grammar {
    pub lang: Language,
    pub language: tree_sitter::Language,
    pub identifier_kinds: &'static [&'static str],
}

impl Grammar {
    /// The bundled grammar for `lang`.
    pub fn for_language(lang: Language) -> Self {
        let language: tree_sitter::Language = match lang {
            Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            Language::Go => tree_sitter_go::LANGUAGE.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::Python => tree_sitter_python::LANGUAGE.into(),
        };
        Grammar {
            lang,
            language,
            identifier_kinds: identifier_kinds(lang),
        }
    }
}

/// Identifier-like node kinds for each language.
///
/// Go and C++ give package/namespace, type and field names their own kinds;
/// Java separates type names; JavaScript separates property names.
pub fn identifier_kinds(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Python => &["identifier"],
        Language::Go => &[
            "identifier",
            "package_identifier",
            "type_identifier",
            "field_identifier",
        ],
        Language::Java => &["identifier", "type_identifier"],
        Language::JavaScript => &["identifier", "property_identifier"],
        Language::Cpp => &[
            "identifier",
            "type_identifier",
            "namespace_identifier",
            "field_identifier",
        ],
    }
}
