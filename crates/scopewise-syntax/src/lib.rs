//! Tree-sitter powered scope matching for editor selections.
//!
//! This crate finds the syntactic scope (comment, call, statement, ...) that
//! an editor selection identifies:
//!
//! - **Parsing** via [`Parser`] into an immutable [`ParseResult`] snapshot
//!   whose nodes report editor (UTF-16) positions
//! - **Candidate extraction** via [`ScopeQuery`], a compiled Tree-sitter
//!   query whose capture names are scope names
//! - **Matching** via [`NodeMatcher`], which reconciles the selection with
//!   the candidates: containment, merging of adjacent scopes, and sibling
//!   broadening
//!
//! # Supported Languages
//!
//! Built-in scope queries ship for:
//! - Python
//! - Rust
//! - TypeScript (TSX grammar)
//!
//! # Example
//!
//! ```
//! use scopewise_core::{Position, ScopeType, SelectionWithEditor};
//! use scopewise_syntax::{Parser, ScopeQuery, SupportedLanguage};
//!
//! let parsed = Parser::new(SupportedLanguage::Python)?.parse("# hello\n# world")?;
//! let query = ScopeQuery::builtin(SupportedLanguage::Python)?;
//! let matcher = query.matcher(ScopeType::Comment, false);
//!
//! // A selection spanning both comment lines merges into one scope.
//! let selection = SelectionWithEditor::from_positions("doc", Position::new(0, 0), Position::new(1, 2));
//! let matches = matcher.find(&selection, parsed.root_node(), false)?;
//! let merged = matches.as_ref().and_then(|found| found.first());
//! assert_eq!(merged.map(|m| m.selection().is_single_line()), Some(false));
//! # Ok::<(), scopewise_syntax::ScopeError>(())
//! ```

mod error;
mod language;
mod line_index;
mod matcher;
mod node;
mod parser;
mod query;

pub use error::ScopeError;
pub use language::{LanguageParseError, SupportedLanguage};
pub use matcher::{Match, MatchResult, Matches, NodeMatcher};
pub use node::SyntaxNode;
pub use parser::{ParseResult, Parser};
pub use query::{Candidate, ScopeQuery};

#[cfg(test)]
mod tests;
