//! Tests for [`ScopeType`].

use std::str::FromStr;

use rstest::rstest;

use crate::ScopeType;

#[rstest]
#[case("comment", ScopeType::Comment)]
#[case("functionCall", ScopeType::FunctionCall)]
#[case("argumentOrParameter", ScopeType::ArgumentOrParameter)]
#[case("namedFunction", ScopeType::NamedFunction)]
fn known_capture_names_parse(#[case] name: &str, #[case] expected: ScopeType) {
    assert_eq!(ScopeType::from_str(name), Ok(expected));
}

#[test]
fn unknown_capture_names_fall_back_to_other() {
    let scope = ScopeType::from_str("heredoc").expect("default variant");
    assert_eq!(scope, ScopeType::Other(String::from("heredoc")));
    assert_eq!(scope.as_str(), "heredoc");
    assert_eq!(scope.label(), "heredoc");
}

#[test]
fn every_known_scope_round_trips_through_its_capture_name() {
    for scope in ScopeType::known() {
        assert_eq!(ScopeType::from_str(scope.as_str()).as_ref(), Ok(scope));
    }
}

#[test]
fn labels_follow_the_cheatsheet() {
    assert_eq!(ScopeType::ArgumentOrParameter.label(), "Argument");
    assert_eq!(ScopeType::FunctionCall.to_string(), "functionCall");
}
