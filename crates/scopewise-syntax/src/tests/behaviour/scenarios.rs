//! Scenario bindings for the `scopewise-syntax` BDD feature file.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::scenario;

use super::TestWorld;

/// Fixture providing the shared BDD world.
#[fixture]
fn world() -> RefCell<TestWorld> {
    super::world()
}

#[scenario(
    path = "tests/features/scopewise_syntax.feature",
    name = "A cursor inside a comment matches it"
)]
fn single_comment(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scopewise_syntax.feature",
    name = "Broadening returns every sibling comment"
)]
fn sibling_comments(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scopewise_syntax.feature",
    name = "A selection across adjacent comments merges"
)]
fn merged_comments(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scopewise_syntax.feature",
    name = "A selection reaching into a call does not merge"
)]
fn cross_type_selection(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scopewise_syntax.feature",
    name = "A cursor in whitespace before a call finds nothing"
)]
fn cursor_before_call(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scopewise_syntax.feature",
    name = "Coincident scopes are ambiguous for single-match matchers"
)]
fn ambiguous_scopes(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scopewise_syntax.feature",
    name = "Single-match matchers refuse sibling broadening"
)]
fn siblings_refused(world: RefCell<TestWorld>) {
    drop(world);
}
