//! Node capability consumed by the collectors.

use std::ops::Range;

/// The view of a parse-tree node that token collection needs.
///
/// Implemented for `tree_sitter::Node`; any other parser can be plugged in by
/// implementing these four methods.
pub trait SyntaxNode: Sized {
    /// Grammar-defined node kind, e.g. `identifier` or `(`.
    fn kind(&self) -> &'static str;

    /// Byte range of the node in the document.
    fn byte_range(&self) -> Range<usize>;

    /// Children in document order.
    fn children(&self) -> Vec<Self>;

    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

impl<'tree> SyntaxNode for tree_sitter::Node<'tree> {
    fn kind(&self) -> &'static str {
        tree_sitter::Node::kind(self)
    }

    fn byte_range(&self) -> Range<usize> {
        tree_sitter::Node::byte_range(self)
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        tree_sitter::Node::children(self, &mut cursor).collect()
    }

    fn has_children(&self) -> bool {
        self.child_count() > 0
    }
}
