#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_parse_tokenizer_choice() {
    assert_eq!("bytes".parse::<TokenizerChoice>().unwrap(), TokenizerChoice::Bytes);
    assert_eq!("pretoken".parse::<TokenizerChoice>().unwrap(), TokenizerChoice::Pretoken);
    assert_eq!(
        "hf:models/tokenizer.json".parse::<TokenizerChoice>().unwrap(),
        TokenizerChoice::HuggingFace("models/tokenizer.json".into())
    );
    assert!("hf:".parse::<TokenizerChoice>().is_err());
    assert!("gpt-4".parse::<TokenizerChoice>().is_err());
}

#[test]
fn test_choice_display_round_trips() {
    for choice in ["bytes", "pretoken", "hf:tok.json"] {
        assert_eq!(choice.parse::<TokenizerChoice>().unwrap().to_string(), choice);
    }
}

#[test]
fn test_build_context() {
    let ctx = ScoringContext::build(&[Language::Python], &TokenizerChoice::Bytes, &[]).unwrap();
    assert_eq!(ctx.tokenizer.name(), "bytes");
    assert!(ctx.parser.supports(Language::Python));
    assert!(!ctx.parser.supports(Language::Go));
}

#[cfg(not(feature = "huggingface"))]
#[test]
fn test_hf_requires_feature() {
    let Err(err) = load_tokenizer(&TokenizerChoice::HuggingFace("t.json".into())) else {
        panic!("expected the huggingface tokenizer to be unavailable");
    };
    assert!(matches!(err, ContextError::FeatureDisabled(_)));
}
