//! Containment, ranking, and run merging over candidate nodes.
//!
//! All comparisons use editor coordinates from [`SyntaxNode::range`]; ranking
//! uses byte lengths, which order nested nodes the same way.

use std::collections::HashSet;

use scopewise_core::{Range, TieBreak};

use crate::node::SyntaxNode;

/// A run of adjacent sibling candidates jointly covering the selection.
#[derive(Debug, Clone, Copy)]
pub(super) struct MergeRun<'tree> {
    /// First node of the run; stands in for the whole run.
    pub(super) anchor: SyntaxNode<'tree>,
    /// Range from the first node's start to the last node's end.
    pub(super) range: Range,
}

/// Returns the candidates whose range contains `target`, boundaries included.
pub(super) fn direct_matches<'tree>(
    candidates: &[SyntaxNode<'tree>],
    target: Range,
) -> Vec<SyntaxNode<'tree>> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.range().contains(&target))
        .collect()
}

/// Keeps the best-ranked direct matches under `tie_break`.
///
/// The result is in document order and is empty only when `direct` is.
pub(super) fn rank<'tree>(
    direct: Vec<SyntaxNode<'tree>>,
    tie_break: TieBreak,
) -> Vec<SyntaxNode<'tree>> {
    let span = |node: &SyntaxNode<'_>| node.byte_range().len();
    let best = match tie_break {
        TieBreak::Innermost => direct.iter().map(span).min(),
        TieBreak::Outermost => direct.iter().map(span).max(),
        TieBreak::All => None,
    };

    let mut winners: Vec<_> = match best {
        Some(best) => direct.into_iter().filter(|node| span(node) == best).collect(),
        None => direct,
    };
    winners.sort_by_key(|node| node.byte_range().start);
    winners
}

/// Finds a run of adjacent same-scope siblings spanning `target`.
///
/// The run starts at a candidate containing the selection's start and
/// follows immediate next siblings, each of which must itself be a
/// candidate, until one contains the selection's end. Runs from smaller
/// starting candidates are tried first.
pub(super) fn merge_run<'tree>(
    candidates: &[SyntaxNode<'tree>],
    target: Range,
) -> Option<MergeRun<'tree>> {
    let captured: HashSet<usize> = candidates.iter().map(SyntaxNode::id).collect();

    let mut starts: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.range().contains_position(target.start()))
        .collect();
    starts.sort_by_key(|node| node.byte_range().len());

    starts
        .into_iter()
        .find_map(|anchor| follow_run(anchor, &captured, target))
}

fn follow_run<'tree>(
    anchor: SyntaxNode<'tree>,
    captured: &HashSet<usize>,
    target: Range,
) -> Option<MergeRun<'tree>> {
    let mut last = anchor;
    loop {
        let last_range = last.range();
        if last_range.contains_position(target.end()) {
            return Some(MergeRun {
                anchor,
                range: anchor.range().union(&last_range),
            });
        }
        if last_range.end() > target.end() {
            return None;
        }
        last = last
            .next_sibling()
            .filter(|next| captured.contains(&next.id()))?;
    }
}
