//! Catalogue of scope types a matcher can look for.
//!
//! A scope type doubles as the capture name used in Tree-sitter queries: a
//! matcher for [`ScopeType::Comment`] keeps the nodes captured as
//! `@comment`.

use std::fmt;

use strum::EnumString;

/// A semantically meaningful kind of source region.
///
/// Known scopes are enumerated so callers get exhaustiveness checks. Grammars
/// that define captures outside this list use [`ScopeType::Other`], which
/// round-trips any capture name verbatim.
///
/// # Example
///
/// ```
/// use scopewise_core::ScopeType;
///
/// let scope: ScopeType = "functionCall".parse().unwrap_or(ScopeType::Comment);
/// assert_eq!(scope, ScopeType::FunctionCall);
/// assert_eq!(scope.label(), "Call");
///
/// let custom: ScopeType = "heredoc".parse().unwrap_or(ScopeType::Comment);
/// assert_eq!(custom.as_str(), "heredoc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "camelCase")]
#[non_exhaustive]
pub enum ScopeType {
    /// A single argument in a call or parameter in a signature.
    ArgumentOrParameter,
    /// A lambda, closure, or arrow function.
    AnonymousFunction,
    /// An attribute or decorator.
    Attribute,
    /// A class, struct, or similar type definition.
    Class,
    /// The name of a class definition.
    ClassName,
    /// An element of a list, tuple, or map literal.
    CollectionItem,
    /// A key in a map literal.
    CollectionKey,
    /// A comment.
    Comment,
    /// A function or macro call.
    FunctionCall,
    /// The name of a function definition.
    FunctionName,
    /// An `if` statement or expression.
    IfStatement,
    /// A list or array literal.
    List,
    /// A map, dictionary, or object literal.
    Map,
    /// The name side of an assignment or declaration.
    Name,
    /// A named function or method definition.
    NamedFunction,
    /// A regular expression literal.
    RegularExpression,
    /// A statement.
    Statement,
    /// A string literal.
    String,
    /// A type annotation.
    Type,
    /// The value side of an assignment or key/value pair.
    Value,
    /// A capture name not covered by the variants above.
    #[strum(default)]
    Other(std::string::String),
}

impl ScopeType {
    /// Returns the capture name for this scope, as written in queries.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ArgumentOrParameter => "argumentOrParameter",
            Self::AnonymousFunction => "anonymousFunction",
            Self::Attribute => "attribute",
            Self::Class => "class",
            Self::ClassName => "className",
            Self::CollectionItem => "collectionItem",
            Self::CollectionKey => "collectionKey",
            Self::Comment => "comment",
            Self::FunctionCall => "functionCall",
            Self::FunctionName => "functionName",
            Self::IfStatement => "ifStatement",
            Self::List => "list",
            Self::Map => "map",
            Self::Name => "name",
            Self::NamedFunction => "namedFunction",
            Self::RegularExpression => "regularExpression",
            Self::Statement => "statement",
            Self::String => "string",
            Self::Type => "type",
            Self::Value => "value",
            Self::Other(name) => name,
        }
    }

    /// Returns a short human-readable label, as shown in a cheatsheet.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::ArgumentOrParameter => "Argument",
            Self::AnonymousFunction => "Lambda",
            Self::Attribute => "Attribute",
            Self::Class => "Class",
            Self::ClassName => "Class name",
            Self::CollectionItem => "Item",
            Self::CollectionKey => "Key",
            Self::Comment => "Comment",
            Self::FunctionCall => "Call",
            Self::FunctionName => "Function name",
            Self::IfStatement => "If statement",
            Self::List => "List",
            Self::Map => "Map",
            Self::Name => "Name",
            Self::NamedFunction => "Function",
            Self::RegularExpression => "Regex",
            Self::Statement => "Statement",
            Self::String => "String",
            Self::Type => "Type",
            Self::Value => "Value",
            Self::Other(name) => name,
        }
    }

    /// Returns every enumerated scope type, excluding [`ScopeType::Other`].
    #[must_use]
    pub const fn known() -> &'static [Self] {
        KNOWN_SCOPES
    }
}

const KNOWN_SCOPES: &[ScopeType] = &[
    ScopeType::ArgumentOrParameter,
    ScopeType::AnonymousFunction,
    ScopeType::Attribute,
    ScopeType::Class,
    ScopeType::ClassName,
    ScopeType::CollectionItem,
    ScopeType::CollectionKey,
    ScopeType::Comment,
    ScopeType::FunctionCall,
    ScopeType::FunctionName,
    ScopeType::IfStatement,
    ScopeType::List,
    ScopeType::Map,
    ScopeType::Name,
    ScopeType::NamedFunction,
    ScopeType::RegularExpression,
    ScopeType::Statement,
    ScopeType::String,
    ScopeType::Type,
    ScopeType::Value,
];

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
