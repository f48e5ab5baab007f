//! Error types for parsing, query compilation, and scope matching.
//!
//! Not finding a scope is not an error: matchers return `Ok(None)` for that.
//! The variants here cover configuration mistakes and selections that cannot
//! be resolved to a single scope when one is required.

use scopewise_core::ScopeType;
use thiserror::Error;

use crate::language::SupportedLanguage;

/// Errors from parsing, query compilation, and scope matching.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScopeError {
    /// Failed to initialise the Tree-sitter parser for a language.
    #[error("failed to initialise parser for {language}: {message}")]
    ParserInitError {
        /// The language that failed to initialise.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// Failed to parse source code.
    #[error("failed to parse {language}: {message}")]
    ParseError {
        /// The language that failed to parse.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// The Tree-sitter query was rejected by the grammar.
    #[error("invalid scope query for {language}: {source}")]
    QueryCompileError {
        /// The language the query was compiled for.
        language: SupportedLanguage,
        /// The error reported by Tree-sitter, unmodified.
        #[source]
        source: tree_sitter::QueryError,
    },

    /// More than one equally ranked scope contains the selection and the
    /// matcher requires a single match.
    #[error("selection matches {candidates} {scope_type} scopes; expected exactly one")]
    ScopeAmbiguous {
        /// The scope the matcher was looking for.
        scope_type: ScopeType,
        /// How many candidates tied.
        candidates: usize,
    },

    /// Sibling broadening was requested from a matcher that requires a single
    /// match.
    #[error("{scope_type} matcher requires a single match and cannot include siblings")]
    SiblingsNotAllowed {
        /// The scope the matcher was looking for.
        scope_type: ScopeType,
    },
}

impl ScopeError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParserInitError {
            language,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParseError {
            language,
            message: message.into(),
        }
    }

    /// Creates a query compilation error.
    #[must_use]
    pub const fn query_compile(language: SupportedLanguage, source: tree_sitter::QueryError) -> Self {
        Self::QueryCompileError { language, source }
    }

    /// Creates an ambiguous scope error.
    #[must_use]
    pub const fn scope_ambiguous(scope_type: ScopeType, candidates: usize) -> Self {
        Self::ScopeAmbiguous {
            scope_type,
            candidates,
        }
    }

    /// Creates a siblings-not-allowed error.
    #[must_use]
    pub const fn siblings_not_allowed(scope_type: ScopeType) -> Self {
        Self::SiblingsNotAllowed { scope_type }
    }
}
