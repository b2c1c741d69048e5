#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use proptest::prelude::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Span::new(0, 10));
    set.insert(Span::new(0, 10)); // duplicate
    set.insert(Span::new(5, 15));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_span_try_new_rejects_inverted() {
    assert_eq!(
        Span::try_new(5, 4),
        Err(SpanError::Inverted { start: 5, end: 4 })
    );
    assert_eq!(Span::try_new(4, 4), Ok(Span::new(4, 4)));
}

#[test]
fn test_span_try_from_range_success() {
    let result = Span::try_from_range(50..100);
    let Ok(span) = result else {
        panic!("expected Ok for valid range");
    };
    assert_eq!(span.start, 50);
    assert_eq!(span.end, 100);
}

#[test]
fn test_span_try_from_range_start_too_large() {
    let large_start = u32::MAX as usize + 1;
    let result = Span::try_from_range(large_start..large_start + 10);
    assert!(matches!(result, Err(SpanError::StartTooLarge(_))));
}

#[test]
fn test_span_try_from_range_end_too_large() {
    let large_end = u32::MAX as usize + 1;
    let result = Span::try_from_range(0..large_end);
    assert!(matches!(result, Err(SpanError::EndTooLarge(_))));
}

#[test]
#[allow(clippy::reversed_empty_ranges, reason = "Testing inverted input")]
fn test_span_try_from_range_inverted() {
    let result = Span::try_from_range(10..3);
    assert!(matches!(result, Err(SpanError::Inverted { start: 10, end: 3 })));
}

#[test]
fn test_span_error_display() {
    let err = SpanError::StartTooLarge(0x1_0000_0000);
    let msg = format!("{err}");
    assert!(msg.contains("start"));
    assert!(msg.contains("0x100000000"));

    let err = SpanError::Inverted { start: 7, end: 2 };
    assert_eq!(format!("{err}"), "span start 7 lies after span end 2");
}

// Overlap semantics

#[test]
fn test_overlaps_touching_is_false() {
    let a = Span::new(0, 3);
    let b = Span::new(3, 6);
    assert!(!a.overlaps(b));
    assert!(!b.overlaps(a));
}

#[test]
fn test_overlaps_nested_and_partial() {
    assert!(Span::new(0, 10).overlaps(Span::new(2, 4)));
    assert!(Span::new(0, 5).overlaps(Span::new(4, 9)));
    assert!(!Span::new(0, 5).overlaps(Span::new(6, 9)));
}

#[test]
fn test_overlaps_zero_width_inside() {
    // A zero-width span strictly inside another still satisfies the
    // open-interval test on both sides.
    assert!(Span::new(5, 5).overlaps(Span::new(2, 8)));
    assert!(!Span::new(2, 2).overlaps(Span::new(2, 8)));
}

#[test]
fn test_intersect_clips() {
    let token = Span::new(3, 12);
    let ident = Span::new(5, 9);
    assert_eq!(token.intersect(ident), Some(Span::new(5, 9)));
    assert_eq!(Span::new(0, 6).intersect(ident), Some(Span::new(5, 6)));
    assert_eq!(Span::new(0, 5).intersect(ident), None);
}

#[test]
fn test_contains_span() {
    let outer = Span::new(10, 20);
    assert!(outer.contains_span(Span::new(10, 20)));
    assert!(outer.contains_span(Span::new(12, 15)));
    assert!(!outer.contains_span(Span::new(9, 15)));
}

#[test]
fn test_span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
}

#[test]
fn test_span_default() {
    assert_eq!(Span::default(), Span::new(0, 0));
}

fn span_strategy() -> impl Strategy<Value = Span> {
    (0u32..1000, 0u32..1000).prop_map(|(a, b)| Span::new(a.min(b), a.max(b)))
}

proptest! {
    #[test]
    fn overlaps_is_symmetric(a in span_strategy(), b in span_strategy()) {
        prop_assert_eq!(a.overlaps(b), b.overlaps(a));
    }

    #[test]
    fn intersect_is_contained_in_both(a in span_strategy(), b in span_strategy()) {
        if let Some(clipped) = a.intersect(b) {
            prop_assert!(a.contains_span(clipped));
            prop_assert!(b.contains_span(clipped));
            prop_assert!(a.overlaps(b));
        }
    }
}
