//! Behaviour-driven development (BDD) step definitions for scopewise-syntax scenarios.

mod scenarios;

use std::cell::RefCell;
use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, then, when};
use scopewise_core::{Position, ScopeType, SelectionWithEditor};

use crate::{Match, ParseResult, Parser, ScopeError, ScopeQuery, SupportedLanguage};

// =============================================================================
// Test World
// =============================================================================

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// Parsed source code.
    parsed_source: Option<ParseResult>,
    /// Scope query compiled for the source's language.
    query: Option<ScopeQuery>,
    /// Whether the matcher insists on a single match.
    requires_single_match: bool,
    /// Outcome of the last matcher call.
    outcome: Option<Result<Option<Vec<MatchSnapshot>>, ScopeError>>,
}

/// Snapshot of match data (owned, not borrowed from the tree).
#[derive(Debug)]
struct MatchSnapshot {
    kind: String,
    single_line: bool,
}

impl<E> From<&Match<'_, E>> for MatchSnapshot {
    fn from(found: &Match<'_, E>) -> Self {
        Self {
            kind: found.node().kind().to_owned(),
            single_line: found.selection().is_single_line(),
        }
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

/// Strips surrounding double quotes from a string if present.
fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

fn position(text: &str) -> Position {
    Position::from_str(strip_quotes(text)).expect("line:column position")
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("{language} source {code}")]
fn given_source(world: &RefCell<TestWorld>, language: String, code: String) {
    let mut w = world.borrow_mut();
    let lang = SupportedLanguage::from_str(&language).expect("language");
    let source_code = strip_quotes(&code).replace("\\n", "\n");

    let mut parser = Parser::new(lang).expect("parser init");
    w.parsed_source = Some(parser.parse(&source_code).expect("parse"));
}

#[given("the scope query {query}")]
fn given_query(world: &RefCell<TestWorld>, query: String) {
    let mut w = world.borrow_mut();
    let language = w
        .parsed_source
        .as_ref()
        .map(ParseResult::language)
        .expect("source should be set before the query");
    let compiled = ScopeQuery::compile(language, strip_quotes(&query)).expect("query compile");
    w.query = Some(compiled);
}

#[given("the matcher requires a single match")]
fn given_single_match(world: &RefCell<TestWorld>) {
    world.borrow_mut().requires_single_match = true;
}

// =============================================================================
// When Steps
// =============================================================================

fn run_matcher(
    world: &RefCell<TestWorld>,
    scope: &str,
    start: &str,
    end: &str,
    include_siblings: bool,
) {
    let mut w = world.borrow_mut();
    let scope_type = ScopeType::from_str(strip_quotes(scope)).expect("scope type");
    let selection = SelectionWithEditor::from_positions((), position(start), position(end));

    let outcome = {
        let parsed = w
            .parsed_source
            .as_ref()
            .expect("source should be set before matching");
        let query = w.query.as_ref().expect("query should be set before matching");
        query
            .matcher(scope_type, w.requires_single_match)
            .find(&selection, parsed.root_node(), include_siblings)
            .map(|found| found.map(|matches| matches.iter().map(MatchSnapshot::from).collect()))
    };
    w.outcome = Some(outcome);
}

#[when("the {scope} scope is resolved from {start} to {end}")]
fn when_resolved(world: &RefCell<TestWorld>, scope: String, start: String, end: String) {
    run_matcher(world, &scope, &start, &end, false);
}

#[when("the {scope} scope is broadened from {start} to {end}")]
fn when_broadened(world: &RefCell<TestWorld>, scope: String, start: String, end: String) {
    run_matcher(world, &scope, &start, &end, true);
}

// =============================================================================
// Then Steps
// =============================================================================

fn found(world: &TestWorld) -> &[MatchSnapshot] {
    world
        .outcome
        .as_ref()
        .expect("matcher should have run")
        .as_ref()
        .expect("matcher should succeed")
        .as_deref()
        .expect("a scope should be found")
}

#[then("{count} matches are found")]
fn then_match_count(world: &RefCell<TestWorld>, count: usize) {
    assert_eq!(found(&world.borrow()).len(), count);
}

#[then("every match is a {kind} node")]
fn then_every_kind(world: &RefCell<TestWorld>, kind: String) {
    let w = world.borrow();
    let expected = strip_quotes(&kind);
    assert!(found(&w).iter().all(|m| m.kind == expected));
}

#[then("the match spans several lines")]
fn then_multi_line(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert!(found(&w).iter().all(|m| !m.single_line));
}

#[then("no scope is found")]
fn then_no_scope(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let outcome = w
        .outcome
        .as_ref()
        .expect("matcher should have run")
        .as_ref()
        .expect("matcher should succeed");
    assert!(outcome.is_none());
}

#[then("the matcher reports an ambiguous scope")]
fn then_ambiguous(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let outcome = w.outcome.as_ref().expect("matcher should have run");
    assert!(matches!(outcome, Err(ScopeError::ScopeAmbiguous { .. })));
}

#[then("the matcher refuses to include siblings")]
fn then_siblings_refused(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let outcome = w.outcome.as_ref().expect("matcher should have run");
    assert!(matches!(outcome, Err(ScopeError::SiblingsNotAllowed { .. })));
}
