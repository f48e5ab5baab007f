//! Broadening an anchor scope to every same-scope sibling.

use std::collections::HashSet;

use crate::node::SyntaxNode;

/// Returns every child of each anchor's parent that is itself a candidate.
///
/// Siblings come back in document order, each node once even when several
/// anchors share a parent. An anchor without a parent stands alone.
pub(super) fn broaden<'tree>(
    anchors: &[SyntaxNode<'tree>],
    candidates: &[SyntaxNode<'tree>],
) -> Vec<SyntaxNode<'tree>> {
    let captured: HashSet<usize> = candidates.iter().map(SyntaxNode::id).collect();
    let mut seen = HashSet::new();
    let mut siblings = Vec::new();

    for anchor in anchors {
        let group: Vec<SyntaxNode<'tree>> = anchor.parent().map_or_else(
            || vec![*anchor],
            |parent| {
                parent
                    .children()
                    .into_iter()
                    .filter(|child| captured.contains(&child.id()))
                    .collect()
            },
        );
        siblings.extend(group.into_iter().filter(|node| seen.insert(node.id())));
    }
    siblings
}
