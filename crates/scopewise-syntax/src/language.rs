//! Grammar selection and the built-in scope queries for each grammar.
//!
//! Every [`SupportedLanguage`] maps to a Tree-sitter grammar and to a query
//! whose capture names are [`ScopeType`](scopewise_core::ScopeType) names.
//! Hosts with their own queries can ignore the built-in ones and compile a
//! [`ScopeQuery`](crate::ScopeQuery) from any source.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Languages with a bundled grammar and scope query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLanguage {
    /// Python source files (`.py`, `.pyi`).
    Python,
    /// Rust source files (`.rs`).
    Rust,
    /// TypeScript source files, parsed with the TSX grammar.
    TypeScript,
}

impl SupportedLanguage {
    /// Detects the language from an editor language id or file extension.
    ///
    /// Returns `None` if the identifier is not recognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use scopewise_syntax::SupportedLanguage;
    ///
    /// assert_eq!(
    ///     SupportedLanguage::from_language_id("typescriptreact"),
    ///     Some(SupportedLanguage::TypeScript)
    /// );
    /// assert_eq!(SupportedLanguage::from_language_id("ruby"), None);
    /// ```
    #[must_use]
    pub fn from_language_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    /// Returns the Tree-sitter grammar for this language.
    #[must_use]
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Returns the built-in scope query source for this language.
    #[must_use]
    pub const fn scope_query_source(self) -> &'static str {
        match self {
            Self::Python => PYTHON_SCOPES,
            Self::Rust => RUST_SCOPES,
            Self::TypeScript => TYPESCRIPT_SCOPES,
        }
    }

    /// Returns the lower-case identifier for this language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Rust => "rust",
            Self::TypeScript => "typescript",
        }
    }

    /// Returns all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Python, Self::Rust, Self::TypeScript]
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a language identifier is not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language: '{0}'")]
pub struct LanguageParseError(String);

impl LanguageParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for SupportedLanguage {
    type Err = LanguageParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "python" | "py" | "pyi" => Ok(Self::Python),
            "rust" | "rs" => Ok(Self::Rust),
            "typescript" | "typescriptreact" | "ts" | "tsx" | "mts" | "cts" => {
                Ok(Self::TypeScript)
            }
            other => Err(LanguageParseError(other.to_owned())),
        }
    }
}

const PYTHON_SCOPES: &str = r"
(comment) @comment
(call) @functionCall
(function_definition) @namedFunction
(function_definition name: (identifier) @functionName)
(class_definition) @class
(class_definition name: (identifier) @className)
(lambda) @anonymousFunction
(decorator) @attribute
(string) @string
(if_statement) @ifStatement
(list) @list
(dictionary) @map
(pair key: (_) @collectionKey)
(pair value: (_) @value)
(list (_) @collectionItem)
(assignment left: (_) @name)
(assignment right: (_) @value)
(argument_list (_) @argumentOrParameter)
(parameters (_) @argumentOrParameter)
[
  (expression_statement)
  (return_statement)
  (import_statement)
  (for_statement)
  (while_statement)
] @statement
";

const RUST_SCOPES: &str = r"
(line_comment) @comment
(block_comment) @comment
(call_expression) @functionCall
(macro_invocation) @functionCall
(function_item) @namedFunction
(function_item name: (identifier) @functionName)
[(struct_item) (enum_item) (trait_item)] @class
(struct_item name: (type_identifier) @className)
(closure_expression) @anonymousFunction
(attribute_item) @attribute
[(string_literal) (raw_string_literal)] @string
(if_expression) @ifStatement
(array_expression) @list
(array_expression (_) @collectionItem)
(arguments (_) @argumentOrParameter)
(parameters (_) @argumentOrParameter)
(let_declaration pattern: (_) @name)
(let_declaration value: (_) @value)
[(expression_statement) (let_declaration)] @statement
";

const TYPESCRIPT_SCOPES: &str = r"
(comment) @comment
(call_expression) @functionCall
[(function_declaration) (method_definition)] @namedFunction
(function_declaration name: (identifier) @functionName)
(class_declaration) @class
(class_declaration name: (type_identifier) @className)
(arrow_function) @anonymousFunction
(decorator) @attribute
[(string) (template_string)] @string
(regex) @regularExpression
(if_statement) @ifStatement
(array) @list
(object) @map
(array (_) @collectionItem)
(pair key: (_) @collectionKey)
(pair value: (_) @value)
(arguments (_) @argumentOrParameter)
(formal_parameters (_) @argumentOrParameter)
(type_annotation) @type
(variable_declarator name: (_) @name)
(variable_declarator value: (_) @value)
[(expression_statement) (lexical_declaration) (return_statement)] @statement
";
