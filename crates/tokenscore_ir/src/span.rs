//! Byte-range spans.
//!
//! Provides a compact 8-byte half-open range over a document's content.
//! Every token in TokenScore, whether produced by a tokenizer or derived from a
//! syntax tree, is a `Span` plus optional metadata.

use std::fmt;
use std::ops::Range;

/// Error when creating a span from an invalid range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    EndTooLarge(usize),
    /// Span start lies after its end.
    Inverted { start: usize, end: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => write!(
                f,
                "span start {} (0x{:X}) exceeds u32::MAX (0x{:X})",
                v,
                v,
                u32::MAX
            ),
            SpanError::EndTooLarge(v) => write!(
                f,
                "span end {} (0x{:X}) exceeds u32::MAX (0x{:X})",
                v,
                v,
                u32::MAX
            ),
            SpanError::Inverted { start, end } => {
                write!(f, "span start {start} lies after span end {end}")
            }
        }
    }
}

impl std::error::Error for SpanError {}

/// Half-open byte range `start..end` over a document.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from document start
/// - end: u32 - byte offset (exclusive)
///
/// `start <= end` always holds for spans built through [`Span::try_new`] or
/// [`Span::try_from_range`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    ///
    /// Callers must pass `start <= end`; use [`Span::try_new`] for
    /// unchecked input.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    /// Create a span, rejecting `start > end`.
    #[inline]
    pub fn try_new(start: u32, end: u32) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::Inverted {
                start: start as usize,
                end: end as usize,
            });
        }
        Ok(Span { start, end })
    }

    /// Try to create a span from a byte range.
    ///
    /// Returns an error if the range is inverted or exceeds `u32::MAX` bytes.
    #[inline]
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        if range.start > range.end {
            return Err(SpanError::Inverted {
                start: range.start,
                end: range.end,
            });
        }
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if another span is fully contained within this span.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Open-interval overlap: touching spans do not overlap.
    ///
    /// Symmetric: `a.overlaps(b) == b.overlaps(a)`.
    #[inline]
    pub fn overlaps(&self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Clip this span to `bounds`.
    ///
    /// Returns `None` when the two spans share no byte.
    #[inline]
    #[must_use]
    pub fn intersect(self, bounds: Span) -> Option<Span> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        (start < end).then_some(Span { start, end })
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// Size assertions to prevent accidental regressions
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests;
