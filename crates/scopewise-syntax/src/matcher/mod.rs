//! Scope matching engine.
//!
//! A [`NodeMatcher`] reconciles an editor selection against the nodes a
//! [`ScopeQuery`] captures under one scope name. It resolves, in order:
//!
//! 1. **Direct matches**: candidates whose range contains the selection.
//!    Several are ranked by the configured [`TieBreak`](scopewise_core::TieBreak).
//! 2. **Merged runs**: when nothing contains the selection, adjacent sibling
//!    candidates that jointly span it collapse into one match.
//! 3. **Broadening**: on request, the resolved scope expands to every
//!    same-scope child of its parent, one match per sibling.

mod containment;
mod result;
mod siblings;

use scopewise_core::{MatcherConfig, Range, ScopeType, SelectionWithEditor};
use tracing::debug;

use crate::error::ScopeError;
use crate::node::SyntaxNode;
use crate::query::ScopeQuery;

pub use result::{Match, Matches};

const MATCHER_TARGET: &str = "scopewise_syntax::matcher";

/// Outcome of a matcher call: `None` when no scope fits the selection.
pub type MatchResult<'tree, E> = Option<Matches<'tree, E>>;

/// A reusable matcher for one scope type.
///
/// The matcher holds no state between calls; every call works on the
/// snapshot it is given.
///
/// # Example
///
/// ```
/// use scopewise_core::{Position, ScopeType, SelectionWithEditor};
/// use scopewise_syntax::{NodeMatcher, Parser, ScopeQuery, SupportedLanguage};
///
/// let query = ScopeQuery::compile(SupportedLanguage::Python, "(comment) @comment")?;
/// let matcher = NodeMatcher::new(ScopeType::Comment, false, &query);
///
/// let parsed = Parser::new(SupportedLanguage::Python)?.parse("# hello world")?;
/// let cursor = SelectionWithEditor::from_positions("doc", Position::new(0, 0), Position::new(0, 0));
///
/// let matches = matcher.find(&cursor, parsed.root_node(), false)?;
/// assert_eq!(matches.map(|found| found.len()), Some(1));
/// # Ok::<(), scopewise_syntax::ScopeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NodeMatcher<'q> {
    scope_type: ScopeType,
    requires_single_match: bool,
    query: &'q ScopeQuery,
    config: MatcherConfig,
}

impl<'q> NodeMatcher<'q> {
    /// Creates a matcher for nodes captured as `scope_type` by `query`.
    ///
    /// With `requires_single_match` set, a selection that cannot be narrowed
    /// to one scope is an error rather than several matches.
    #[must_use]
    pub fn new(scope_type: ScopeType, requires_single_match: bool, query: &'q ScopeQuery) -> Self {
        Self {
            scope_type,
            requires_single_match,
            query,
            config: MatcherConfig::default(),
        }
    }

    /// Returns a copy of the matcher using `config`.
    #[must_use]
    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the scope type this matcher looks for.
    #[must_use]
    pub const fn scope_type(&self) -> &ScopeType {
        &self.scope_type
    }

    /// Returns whether the matcher insists on a single match.
    #[must_use]
    pub const fn requires_single_match(&self) -> bool {
        self.requires_single_match
    }

    /// Returns the matcher configuration.
    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Finds the scopes under `search_root` that the selection identifies.
    ///
    /// Returns `Ok(None)` when no scope contains the selection and no run of
    /// adjacent scopes spans it. With `include_siblings`, the resolved scope
    /// is replaced by every same-scope child of its parent.
    ///
    /// # Errors
    ///
    /// - [`ScopeError::SiblingsNotAllowed`] if `include_siblings` is set on a
    ///   matcher that requires a single match.
    /// - [`ScopeError::ScopeAmbiguous`] if several equally ranked scopes
    ///   contain the selection and the matcher requires a single match.
    pub fn find<'tree, E: Clone>(
        &self,
        selection: &SelectionWithEditor<E>,
        search_root: SyntaxNode<'tree>,
        include_siblings: bool,
    ) -> Result<MatchResult<'tree, E>, ScopeError> {
        if include_siblings && self.requires_single_match {
            return Err(ScopeError::siblings_not_allowed(self.scope_type.clone()));
        }

        let target = selection.range();
        let candidates = self
            .query
            .candidates_named(self.scope_type.as_str(), search_root);
        let direct = containment::direct_matches(&candidates, target);
        debug!(
            target: MATCHER_TARGET,
            scope = %self.scope_type,
            selection = %target,
            candidates = candidates.len(),
            direct = direct.len(),
            "resolving scope"
        );

        let winners = containment::rank(direct, self.config.tie_break());
        if winners.len() > 1 && self.requires_single_match {
            return Err(ScopeError::scope_ambiguous(
                self.scope_type.clone(),
                winners.len(),
            ));
        }

        if include_siblings {
            let anchors = if winners.is_empty() {
                match self.merge_run(&candidates, target) {
                    Some(run) => vec![run.anchor],
                    None => return Ok(None),
                }
            } else {
                winners
            };
            let siblings = siblings::broaden(&anchors, &candidates);
            debug!(
                target: MATCHER_TARGET,
                scope = %self.scope_type,
                siblings = siblings.len(),
                "broadened to siblings"
            );
            let matches = siblings
                .into_iter()
                .map(|node| self.node_match(selection, node))
                .collect();
            return Ok(Matches::from_vec(matches));
        }

        if !winners.is_empty() {
            let matches = winners
                .into_iter()
                .map(|node| self.node_match(selection, node))
                .collect();
            return Ok(Matches::from_vec(matches));
        }

        if let Some(run) = self.merge_run(&candidates, target) {
            debug!(
                target: MATCHER_TARGET,
                scope = %self.scope_type,
                merged = %run.range,
                "merged adjacent scopes"
            );
            let merged = Match::new(
                selection.with_range(run.range),
                run.anchor,
                self.scope_type.clone(),
            );
            return Ok(Matches::from_vec(vec![merged]));
        }

        debug!(target: MATCHER_TARGET, scope = %self.scope_type, "no scope found");
        Ok(None)
    }

    /// Runs the merge rule unless the configuration disables it.
    fn merge_run<'tree>(
        &self,
        candidates: &[SyntaxNode<'tree>],
        target: Range,
    ) -> Option<containment::MergeRun<'tree>> {
        if self.config.merge_runs() {
            containment::merge_run(candidates, target)
        } else {
            None
        }
    }

    fn node_match<'tree, E: Clone>(
        &self,
        selection: &SelectionWithEditor<E>,
        node: SyntaxNode<'tree>,
    ) -> Match<'tree, E> {
        Match::new(
            selection.with_range(node.range()),
            node,
            self.scope_type.clone(),
        )
    }
}

impl ScopeQuery {
    /// Finds scopes of `scope_type` for `selection` using this query.
    ///
    /// Shorthand for building a [`NodeMatcher`] and calling
    /// [`NodeMatcher::find`] once.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`NodeMatcher::find`].
    pub fn find_scope<'tree, E: Clone>(
        &self,
        scope_type: ScopeType,
        selection: &SelectionWithEditor<E>,
        search_root: SyntaxNode<'tree>,
    ) -> Result<MatchResult<'tree, E>, ScopeError> {
        NodeMatcher::new(scope_type, false, self).find(selection, search_root, false)
    }
}
