//! Tree-sitter parsing wrapper.
//!
//! This module turns document text into a [`ParseResult`], the owned snapshot
//! that every [`SyntaxNode`] borrows from. A snapshot is immutable: reparse
//! the document to observe edits.

use crate::error::ScopeError;
use crate::language::SupportedLanguage;
use crate::line_index::LineIndex;
use crate::node::SyntaxNode;

/// Result of parsing a document.
///
/// Owns the syntax tree together with the text it was parsed from, so nodes
/// can report their text and editor positions.
#[derive(Debug)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: String,
    language: SupportedLanguage,
    line_index: LineIndex,
}

impl ParseResult {
    /// Returns the parsed syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns the source code that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the language of the parsed code.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns whether Tree-sitter had to recover from syntax errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self.tree.root_node(), self)
    }

    pub(crate) const fn line_index(&self) -> &LineIndex {
        &self.line_index
    }
}

/// Tree-sitter parser wrapper for a specific language.
///
/// Each parser instance is configured for a single language. Create multiple
/// parsers if you need to parse multiple languages.
pub struct Parser {
    inner: tree_sitter::Parser,
    language: SupportedLanguage,
}

impl Parser {
    /// Creates a new parser for the given language.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter parser cannot be initialised
    /// with the language grammar.
    pub fn new(language: SupportedLanguage) -> Result<Self, ScopeError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&language.tree_sitter_language())
            .map_err(|e| ScopeError::parser_init(language, e.to_string()))?;

        Ok(Self { inner, language })
    }

    /// Returns the language this parser is configured for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Parses document text into an immutable snapshot.
    ///
    /// Tree-sitter is error-tolerant, so this succeeds even for broken
    /// source; scopes are still found in the recovered tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser fails to produce a syntax tree. This
    /// is rare and typically indicates a parser configuration issue.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, ScopeError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| ScopeError::parse(self.language, "parsing failed"))?;

        Ok(ParseResult {
            tree,
            source: source.to_owned(),
            language: self.language,
            line_index: LineIndex::new(source),
        })
    }
}
