//! Supported source languages.
//!
//! The set is closed: adding a language means adding a variant here, a
//! grammar in `tokenscore_syntax`, and its identifier kinds.

use std::fmt;
use std::str::FromStr;

/// Source language of a [`Document`](crate::Document).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    #[cfg_attr(feature = "serde", serde(rename = "c++"))]
    Cpp,
    #[cfg_attr(feature = "serde", serde(rename = "go"))]
    Go,
    #[cfg_attr(feature = "serde", serde(rename = "java"))]
    Java,
    #[cfg_attr(feature = "serde", serde(rename = "javascript"))]
    JavaScript,
    #[cfg_attr(feature = "serde", serde(rename = "python"))]
    Python,
}

/// Error for a language name outside the supported set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language `{0}` (expected one of: c++, go, java, javascript, python)")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// Every supported language, in report order.
    pub const ALL: [Language; 5] = [
        Language::Cpp,
        Language::Go,
        Language::Java,
        Language::JavaScript,
        Language::Python,
    ];

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::Cpp => "c++",
            Language::Go => "go",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Python => "python",
        }
    }

    /// Guess the language from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Language> {
        let lang = match ext.to_ascii_lowercase().as_str() {
            "py" | "pyi" => Language::Python,
            "go" => Language::Go,
            "java" => Language::Java,
            "js" | "mjs" | "cjs" | "jsx" => Language::JavaScript,
            "cc" | "cpp" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h" => Language::Cpp,
            _ => return None,
        };
        Some(lang)
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Case-insensitive; `cpp` is accepted as an alias for `c++`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c++" | "cpp" => Ok(Language::Cpp),
            "go" => Ok(Language::Go),
            "java" => Ok(Language::Java),
            "javascript" => Ok(Language::JavaScript),
            "python" => Ok(Language::Python),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
