//! Compiled scope queries and candidate extraction.
//!
//! A [`ScopeQuery`] wraps a Tree-sitter query whose capture names are scope
//! names. Running it over a search root yields the candidates a matcher
//! reconciles against the selection.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::OnceCell;
use scopewise_core::ScopeType;
use tree_sitter::{QueryCursor, StreamingIterator};

use crate::error::ScopeError;
use crate::language::SupportedLanguage;
use crate::matcher::NodeMatcher;
use crate::node::SyntaxNode;

/// A node captured by a scope query, tagged with its capture name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'q, 'tree> {
    capture_name: &'q str,
    node: SyntaxNode<'tree>,
}

impl<'q, 'tree> Candidate<'q, 'tree> {
    /// Returns the capture name the node was tagged with.
    #[must_use]
    pub const fn capture_name(&self) -> &'q str {
        self.capture_name
    }

    /// Returns the captured node.
    #[must_use]
    pub const fn node(&self) -> SyntaxNode<'tree> {
        self.node
    }
}

/// A Tree-sitter query compiled for one language.
///
/// # Example
///
/// ```
/// use scopewise_syntax::{Parser, ScopeQuery, SupportedLanguage};
///
/// let query = ScopeQuery::compile(SupportedLanguage::Python, "(comment) @comment")?;
/// let parsed = Parser::new(SupportedLanguage::Python)?.parse("# one\n# two")?;
/// let comments = query.candidates_named("comment", parsed.root_node());
/// assert_eq!(comments.len(), 2);
/// # Ok::<(), scopewise_syntax::ScopeError>(())
/// ```
pub struct ScopeQuery {
    query: tree_sitter::Query,
    language: SupportedLanguage,
}

impl ScopeQuery {
    /// Compiles `source` against the grammar for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::QueryCompileError`] carrying Tree-sitter's
    /// error when the query is malformed or names unknown node types.
    pub fn compile(language: SupportedLanguage, source: &str) -> Result<Self, ScopeError> {
        let query = tree_sitter::Query::new(&language.tree_sitter_language(), source)
            .map_err(|err| ScopeError::query_compile(language, err))?;
        Ok(Self { query, language })
    }

    /// Returns the built-in scope query for `language`.
    ///
    /// Each grammar's query is compiled on first use and shared, read-only,
    /// for the rest of the process.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::QueryCompileError`] if the bundled query does
    /// not compile against the linked grammar version.
    pub fn builtin(language: SupportedLanguage) -> Result<&'static Self, ScopeError> {
        static PYTHON: OnceCell<ScopeQuery> = OnceCell::new();
        static RUST: OnceCell<ScopeQuery> = OnceCell::new();
        static TYPESCRIPT: OnceCell<ScopeQuery> = OnceCell::new();

        let cell = match language {
            SupportedLanguage::Python => &PYTHON,
            SupportedLanguage::Rust => &RUST,
            SupportedLanguage::TypeScript => &TYPESCRIPT,
        };
        cell.get_or_try_init(|| Self::compile(language, language.scope_query_source()))
    }

    /// Returns the language the query was compiled for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns the capture names defined by the query.
    #[must_use]
    pub fn capture_names(&self) -> &[&str] {
        self.query.capture_names()
    }

    /// Returns whether the query defines a capture called `name`.
    #[must_use]
    pub fn has_capture(&self, name: &str) -> bool {
        self.capture_names().iter().any(|capture| *capture == name)
    }

    /// Creates a matcher for `scope_type` backed by this query.
    #[must_use]
    pub fn matcher(&self, scope_type: ScopeType, requires_single_match: bool) -> NodeMatcher<'_> {
        NodeMatcher::new(scope_type, requires_single_match, self)
    }

    /// Runs the query over `root` and its descendants.
    ///
    /// Captures are returned in the order Tree-sitter yields them, which is
    /// document order for the patterns used as scope queries.
    #[must_use]
    pub fn extract_candidates<'tree>(&self, root: SyntaxNode<'tree>) -> Vec<Candidate<'_, 'tree>> {
        let names = self.query.capture_names();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, root.as_tree_sitter(), root.source_bytes());

        let mut candidates = Vec::new();
        while let Some(query_match) = matches.next() {
            for capture in query_match.captures {
                let Some(name) = usize::try_from(capture.index)
                    .ok()
                    .and_then(|index| names.get(index).copied())
                else {
                    continue;
                };
                candidates.push(Candidate {
                    capture_name: name,
                    node: root.sibling_handle(capture.node),
                });
            }
        }
        candidates
    }

    /// Returns the distinct nodes captured as `name` under `root`.
    ///
    /// A node captured by several patterns appears once, at its first
    /// position.
    #[must_use]
    pub fn candidates_named<'tree>(&self, name: &str, root: SyntaxNode<'tree>) -> Vec<SyntaxNode<'tree>> {
        let mut seen = HashSet::new();
        self.extract_candidates(root)
            .into_iter()
            .filter(|candidate| candidate.capture_name == name)
            .map(|candidate| candidate.node)
            .filter(|node| seen.insert(node.id()))
            .collect()
    }
}

impl fmt::Debug for ScopeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeQuery")
            .field("language", &self.language)
            .field("captures", &self.capture_names())
            .finish()
    }
}
