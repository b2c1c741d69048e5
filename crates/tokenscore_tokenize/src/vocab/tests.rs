#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{ByteLevelAdapter, TokenizerAdapter};
use tokenscore_ir::{Document, Language};

#[test]
fn test_every_byte_is_a_token() {
    let doc = Document::new(Language::Cpp, "int é;").unwrap();
    let tokens = ByteLevelAdapter::new(ByteVocab).tokenize(&doc).unwrap();
    assert_eq!(tokens.len(), doc.len());
    assert!(tokens.iter().all(|t| t.span.len() == 1));
}

#[test]
fn test_ids_above_a_byte_do_not_decode() {
    assert_eq!(ByteVocab.token_bytes(255), Some(vec![255]));
    assert_eq!(ByteVocab.token_bytes(256), None);
}

#[test]
fn test_vocabulary_lists_every_byte() {
    let vocabulary = ByteLevelAdapter::new(ByteVocab).vocabulary();
    assert_eq!(vocabulary.len(), ByteVocab::SIZE);
    assert_eq!(vocabulary[0], vec![0]);
    assert_eq!(vocabulary[255], vec![255]);
}

#[test]
fn test_boxed_adapter_forwards_vocabulary() {
    let boxed: Box<dyn TokenizerAdapter> = Box::new(ByteLevelAdapter::new(ByteVocab));
    assert_eq!(boxed.vocabulary().len(), 256);
    let open: Box<dyn TokenizerAdapter> =
        Box::new(ByteLevelAdapter::new(crate::PretokenVocab::new()));
    assert!(open.vocabulary().is_empty());
}
