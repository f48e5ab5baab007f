//! Borrowed view of a syntax tree node.

use std::fmt;
use std::ops;

use scopewise_core::Range;

use crate::parser::ParseResult;

/// A node in a parsed document.
///
/// Nodes borrow the [`ParseResult`] they came from; parent, child and sibling
/// links are navigated through the tree rather than stored, so a node never
/// owns any other node. Two handles are equal when they point at the same
/// node of the same snapshot.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'tree> {
    node: tree_sitter::Node<'tree>,
    parsed: &'tree ParseResult,
}

impl<'tree> SyntaxNode<'tree> {
    pub(crate) const fn new(node: tree_sitter::Node<'tree>, parsed: &'tree ParseResult) -> Self {
        Self { node, parsed }
    }

    /// Wraps another node from the same tree.
    pub(crate) const fn sibling_handle(&self, node: tree_sitter::Node<'tree>) -> Self {
        Self::new(node, self.parsed)
    }

    /// Returns the grammar's type tag for this node.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Returns an identifier unique among nodes of the same tree.
    #[must_use]
    pub fn id(&self) -> usize {
        self.node.id()
    }

    /// Returns the node's extent in editor coordinates.
    #[must_use]
    pub fn range(&self) -> Range {
        let source = self.parsed.source();
        let index = self.parsed.line_index();
        Range::new(
            index.position(source, self.node.start_position()),
            index.position(source, self.node.end_position()),
        )
    }

    /// Returns the byte range of the node in the source.
    #[must_use]
    pub fn byte_range(&self) -> ops::Range<usize> {
        self.node.byte_range()
    }

    /// Returns the source text covered by the node.
    #[must_use]
    pub fn text(&self) -> &'tree str {
        self.parsed
            .source()
            .get(self.node.byte_range())
            .unwrap_or_default()
    }

    /// Returns the parent node, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.node.parent().map(|parent| self.sibling_handle(parent))
    }

    /// Returns the next sibling, named or anonymous.
    #[must_use]
    pub fn next_sibling(&self) -> Option<Self> {
        self.node.next_sibling().map(|next| self.sibling_handle(next))
    }

    /// Returns all children in document order, named and anonymous.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|child| self.sibling_handle(child))
            .collect()
    }

    /// Returns the underlying Tree-sitter node.
    #[must_use]
    pub const fn as_tree_sitter(&self) -> tree_sitter::Node<'tree> {
        self.node
    }

    /// Returns the source text of the whole document as bytes.
    pub(crate) fn source_bytes(&self) -> &'tree [u8] {
        self.parsed.source().as_bytes()
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.parsed, other.parsed) && self.node.id() == other.node.id()
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("kind", &self.kind())
            .field("range", &self.range())
            .finish()
    }
}
