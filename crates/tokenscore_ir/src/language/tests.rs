#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

#[test]
fn names_round_trip() {
    for lang in Language::ALL {
        assert_eq!(lang.as_str().parse::<Language>(), Ok(lang));
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("Python".parse::<Language>(), Ok(Language::Python));
    assert_eq!("C++".parse::<Language>(), Ok(Language::Cpp));
    assert_eq!("cpp".parse::<Language>(), Ok(Language::Cpp));
    assert_eq!("JavaScript".parse::<Language>(), Ok(Language::JavaScript));
}

#[test]
fn unsupported_language_is_rejected() {
    let err = "rust".parse::<Language>().unwrap_err();
    assert_eq!(err, UnsupportedLanguage("rust".to_string()));
    assert!(err.to_string().contains("`rust`"));
}

#[test]
fn extensions_map_to_languages() {
    assert_eq!(Language::from_extension("py"), Some(Language::Python));
    assert_eq!(Language::from_extension("JS"), Some(Language::JavaScript));
    assert_eq!(Language::from_extension("hpp"), Some(Language::Cpp));
    assert_eq!(Language::from_extension("rs"), None);
}

#[test]
fn display_uses_canonical_name() {
    assert_eq!(Language::Cpp.to_string(), "c++");
}
