#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
#![allow(clippy::single_range_in_vec_init, reason = "Offsets are lists of ranges")]

use pretty_assertions::assert_eq;

use super::*;
use tokenscore_ir::Language;

#[test]
fn test_ascii_offsets_map_directly() {
    let spans = char_offsets_to_spans("let x", &[0..3, 3..4, 4..5]).unwrap();
    assert_eq!(spans, vec![Span::new(0, 3), Span::new(3, 4), Span::new(4, 5)]);
}

#[test]
fn test_multibyte_chars_widen_spans() {
    // 'é' is two bytes, '€' three.
    let spans = char_offsets_to_spans("é€x", &[0..1, 1..2, 2..3]).unwrap();
    assert_eq!(spans, vec![Span::new(0, 2), Span::new(2, 5), Span::new(5, 6)]);
}

#[test]
fn test_repeated_range_is_zero_width() {
    // Two byte-fallback pieces for the same character.
    let spans = char_offsets_to_spans("a€", &[0..1, 1..2, 1..2]).unwrap();
    assert_eq!(spans, vec![Span::new(0, 1), Span::new(1, 4), Span::new(4, 4)]);
}

#[test]
fn test_trimmed_whitespace_joins_next_token() {
    // Offsets leave out the space before `b`.
    let spans = char_offsets_to_spans("a b", &[0..1, 2..3]).unwrap();
    assert_eq!(spans, vec![Span::new(0, 1), Span::new(1, 3)]);
}

#[test]
fn test_overlapping_ranges_count_new_text_only() {
    let spans = char_offsets_to_spans("abc", &[0..2, 1..3]).unwrap();
    assert_eq!(spans, vec![Span::new(0, 2), Span::new(2, 3)]);

    // Overlap across a multi-byte character.
    let spans = char_offsets_to_spans("é€x", &[0..2, 1..3]).unwrap();
    assert_eq!(spans, vec![Span::new(0, 5), Span::new(5, 6)]);
}

#[test]
fn test_range_inside_consumed_text_is_zero_width() {
    let spans = char_offsets_to_spans("abc", &[0..3, 1..2]).unwrap();
    assert_eq!(spans, vec![Span::new(0, 3), Span::new(3, 3)]);
}

#[test]
fn test_uncovered_tail_is_violation() {
    let err = char_offsets_to_spans("a b", &[0..1]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "adapter contract violation: offset mapping ends at byte 1, text has 3 bytes"
    );
}

#[test]
fn test_out_of_range_offset_is_violation() {
    let err = char_offsets_to_spans("ab", &[0..5]).unwrap_err();
    assert!(matches!(err, AdapterError::ContractViolation(_)));
}

struct Fixed(CharEncoding);

impl OffsetEncoder for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    fn encode_offsets(&self, _text: &str) -> Result<CharEncoding, AdapterError> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_adapter_checks_token_count() {
    let adapter = OffsetMappingAdapter::new(Fixed(CharEncoding {
        token_count: 3,
        offsets: vec![0..1, 1..2],
    }));
    let doc = Document::new(Language::JavaScript, "ab").unwrap();
    let err = adapter.tokenize(&doc).unwrap_err();
    assert_eq!(err.to_string(), "adapter contract violation: 2 offsets for 3 tokens");
}

#[test]
fn test_adapter_produces_cover() {
    let adapter = OffsetMappingAdapter::new(Fixed(CharEncoding {
        token_count: 2,
        offsets: vec![0..2, 2..3],
    }));
    let doc = Document::new(Language::JavaScript, "aéb").unwrap();
    let tokens = adapter.tokenize(&doc).unwrap();
    crate::validate_cover(&tokens, doc.len()).unwrap();
    assert_eq!(tokens[0].span, Span::new(0, 3));
}
