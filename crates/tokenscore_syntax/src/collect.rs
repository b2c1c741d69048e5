//! Tree walks producing syntax and identifier tokens.
//!
//! Both walks use an explicit work stack instead of recursion, so deeply
//! nested trees (long expression chains, generated code) cannot overflow the
//! worker thread's stack. Children are pushed in reverse so they pop in
//! document order.

use tracing::trace;

use tokenscore_ir::{Deadline, IdentifierToken, Span, SpanError, SyntaxToken};

use crate::{SyntaxError, SyntaxNode};

/// Check the deadline every this many visited nodes.
const DEADLINE_STRIDE: usize = 1024;

/// Collect every leaf of `root` in document order, filling gaps with
/// `"unknown"` tokens.
///
/// The result is a contiguous cover of `0..content_len`: the first token
/// starts at 0, each token starts where the previous one ended, and the last
/// one ends at `content_len`. Leaves that start before the previous leaf's end
/// are clipped; leaves reaching past `content_len` are truncated.
pub fn collect_syntax_tokens<N: SyntaxNode>(
    root: N,
    content_len: usize,
    deadline: &Deadline,
) -> Result<Vec<SyntaxToken>, SyntaxError> {
    let len = u32::try_from(content_len).map_err(|_| SpanError::EndTooLarge(content_len))?;

    let mut tokens = Vec::new();
    let mut prev_end = 0u32;
    let mut stack = vec![root];
    let mut visited = 0usize;

    while let Some(node) = stack.pop() {
        if visited % DEADLINE_STRIDE == 0 {
            deadline.check()?;
        }
        visited += 1;

        let children = node.children();
        if !children.is_empty() {
            stack.extend(children.into_iter().rev());
            continue;
        }

        let leaf = Span::try_from_range(node.byte_range())?;
        let start = leaf.start.max(prev_end).min(len);
        let end = leaf.end.min(len);
        if end < start || (start == end && !leaf.is_empty()) {
            trace!(kind = node.kind(), %leaf, prev_end, "dropping overlapped leaf");
            continue;
        }

        if start > prev_end {
            tokens.push(SyntaxToken::unknown(Span::new(prev_end, start)));
        }
        tokens.push(SyntaxToken::new(Span::new(start, end), node.kind()));
        prev_end = end;
    }

    if prev_end < len {
        tokens.push(SyntaxToken::unknown(Span::new(prev_end, len)));
    }

    trace!(count = tokens.len(), "collected syntax tokens");
    Ok(tokens)
}

/// Collect every node of `root` whose kind is in `kinds`, in document order.
///
/// Matching is by kind only, like a capture query, so a matching node with
/// children is still reported.
pub fn collect_identifiers<N: SyntaxNode>(
    root: N,
    kinds: &[&str],
    deadline: &Deadline,
) -> Result<Vec<IdentifierToken>, SyntaxError> {
    let mut identifiers = Vec::new();
    let mut stack = vec![root];
    let mut visited = 0usize;

    while let Some(node) = stack.pop() {
        if visited % DEADLINE_STRIDE == 0 {
            deadline.check()?;
        }
        visited += 1;

        let kind = node.kind();
        if kinds.contains(&kind) {
            let span = Span::try_from_range(node.byte_range())?;
            identifiers.push(IdentifierToken::new(span, kind));
        }

        if node.has_children() {
            stack.extend(node.children().into_iter().rev());
        }
    }

    trace!(count = identifiers.len(), "collected identifiers");
    Ok(identifiers)
}
