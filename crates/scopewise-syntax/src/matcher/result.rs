//! Match types returned by [`NodeMatcher`](super::NodeMatcher).

use std::slice;
use std::vec;

use scopewise_core::{ScopeType, SelectionWithEditor};

use crate::node::SyntaxNode;

/// A scope found for a selection.
///
/// The selection covers the matched scope: a node's own range, or the merged
/// range of a run of adjacent sibling scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'tree, E> {
    selection: SelectionWithEditor<E>,
    node: SyntaxNode<'tree>,
    scope_type: ScopeType,
}

impl<'tree, E> Match<'tree, E> {
    pub(super) const fn new(
        selection: SelectionWithEditor<E>,
        node: SyntaxNode<'tree>,
        scope_type: ScopeType,
    ) -> Self {
        Self {
            selection,
            node,
            scope_type,
        }
    }

    /// Returns the selection covering the scope.
    #[must_use]
    pub const fn selection(&self) -> &SelectionWithEditor<E> {
        &self.selection
    }

    /// Returns the matched node. For a merged run this is its first member.
    #[must_use]
    pub const fn node(&self) -> SyntaxNode<'tree> {
        self.node
    }

    /// Returns the scope type the node was captured as.
    #[must_use]
    pub const fn scope_type(&self) -> &ScopeType {
        &self.scope_type
    }

    /// Consumes the match, returning its selection.
    #[must_use]
    pub fn into_selection(self) -> SelectionWithEditor<E> {
        self.selection
    }
}

/// A non-empty, ordered list of matches.
///
/// Matchers report "nothing found" as `None`, so a `Matches` value always
/// holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches<'tree, E> {
    inner: Vec<Match<'tree, E>>,
}

impl<'tree, E> Matches<'tree, E> {
    /// Wraps `matches`, or returns `None` when the list is empty.
    #[must_use]
    pub fn from_vec(matches: Vec<Match<'tree, E>>) -> Option<Self> {
        (!matches.is_empty()).then_some(Self { inner: matches })
    }

    /// Returns the number of matches; always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Always `false`; provided for API symmetry with collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the first match.
    #[must_use]
    pub fn first(&self) -> Option<&Match<'tree, E>> {
        self.inner.first()
    }

    /// Iterates over the matches in document order.
    pub fn iter(&self) -> slice::Iter<'_, Match<'tree, E>> {
        self.inner.iter()
    }

    /// Returns the matches as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[Match<'tree, E>] {
        self.inner.as_slice()
    }

    /// Consumes the list, returning the matches.
    #[must_use]
    pub fn into_vec(self) -> Vec<Match<'tree, E>> {
        self.inner
    }
}

impl<'tree, E> IntoIterator for Matches<'tree, E> {
    type Item = Match<'tree, E>;
    type IntoIter = vec::IntoIter<Match<'tree, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, 'tree, E> IntoIterator for &'a Matches<'tree, E> {
    type Item = &'a Match<'tree, E>;
    type IntoIter = slice::Iter<'a, Match<'tree, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
