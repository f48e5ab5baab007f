//! Unit tests exercising the built-in scope queries end to end.

use rstest::rstest;
use scopewise_core::{Position, ScopeType, SelectionWithEditor};

use crate::{Parser, ScopeError, ScopeQuery, SupportedLanguage};

fn select(start: (u32, u32), end: (u32, u32)) -> SelectionWithEditor<()> {
    SelectionWithEditor::from_positions(
        (),
        Position::new(start.0, start.1),
        Position::new(end.0, end.1),
    )
}

/// Resolves `scope` in `source` and returns the matched texts.
fn resolve(
    language: SupportedLanguage,
    source: &str,
    scope: ScopeType,
    selection: &SelectionWithEditor<()>,
    include_siblings: bool,
) -> Result<Option<Vec<String>>, ScopeError> {
    let parsed = Parser::new(language)?.parse(source)?;
    let query = ScopeQuery::builtin(language)?;
    let matcher = query.matcher(scope, false);
    let matches = matcher.find(selection, parsed.root_node(), include_siblings)?;
    Ok(matches.map(|found| {
        found
            .iter()
            .map(|m| m.node().text().to_owned())
            .collect()
    }))
}

// =============================================================================
// Direct Matches
// =============================================================================

#[rstest]
#[case(SupportedLanguage::Python, "print(len(x))", (0, 7), "len(x)")]
#[case(SupportedLanguage::Rust, "fn main() {\n    foo(1);\n}", (1, 5), "foo(1)")]
#[case(SupportedLanguage::TypeScript, "run(go(1));", (0, 5), "go(1)")]
fn cursor_resolves_innermost_call(
    #[case] language: SupportedLanguage,
    #[case] source: &str,
    #[case] at: (u32, u32),
    #[case] expected: &str,
) {
    let found = resolve(language, source, ScopeType::FunctionCall, &select(at, at), false)
        .expect("resolve")
        .expect("a call");
    assert_eq!(found, [expected]);
}

#[test]
fn cursor_in_body_resolves_enclosing_function() {
    let source = "def greet(name):\n    return name\n";
    let found = resolve(
        SupportedLanguage::Python,
        source,
        ScopeType::NamedFunction,
        &select((1, 6), (1, 6)),
        false,
    )
    .expect("resolve")
    .expect("a function");
    assert_eq!(found, ["def greet(name):\n    return name"]);
}

// =============================================================================
// Merging
// =============================================================================

#[test]
fn typescript_line_comments_merge() {
    let parsed = Parser::new(SupportedLanguage::TypeScript)
        .expect("parser")
        .parse("// a\n// b\nconst x = 1;")
        .expect("parse");
    let query = ScopeQuery::builtin(SupportedLanguage::TypeScript).expect("query");
    let matcher = query.matcher(ScopeType::Comment, true);

    let matches = matcher
        .find(&select((0, 0), (1, 2)), parsed.root_node(), false)
        .expect("find")
        .expect("merged comments");
    let merged = matches.first().expect("merged");
    assert_eq!(matches.len(), 1);
    assert!(!merged.selection().is_single_line());
    assert_eq!(merged.selection().range().end(), Position::new(1, 4));
}

// =============================================================================
// Sibling Broadening
// =============================================================================

#[rstest]
#[case(
    SupportedLanguage::Rust,
    "fn main() {\n    let a = 1;\n    foo(a);\n    let b = 2;\n}",
    ScopeType::Statement,
    (1, 6),
    3
)]
#[case(
    SupportedLanguage::Python,
    "def f(a, b=1, *c):\n    pass",
    ScopeType::ArgumentOrParameter,
    (0, 6),
    3
)]
#[case(
    SupportedLanguage::TypeScript,
    "const xs = [1, 2, 3, 4];",
    ScopeType::CollectionItem,
    (0, 12),
    4
)]
fn broadening_counts_siblings(
    #[case] language: SupportedLanguage,
    #[case] source: &str,
    #[case] scope: ScopeType,
    #[case] at: (u32, u32),
    #[case] expected: usize,
) {
    let found = resolve(language, source, scope, &select(at, at), true)
        .expect("resolve")
        .expect("siblings");
    assert_eq!(found.len(), expected);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn single_match_matchers_cannot_broaden() {
    let parsed = Parser::new(SupportedLanguage::Rust)
        .expect("parser")
        .parse("// note")
        .expect("parse");
    let query = ScopeQuery::builtin(SupportedLanguage::Rust).expect("query");

    let error = query
        .matcher(ScopeType::Comment, true)
        .find(&select((0, 0), (0, 0)), parsed.root_node(), true)
        .expect_err("siblings not allowed");
    assert_eq!(
        error.to_string(),
        "comment matcher requires a single match and cannot include siblings"
    );
}
