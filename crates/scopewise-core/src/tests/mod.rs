//! Unit tests for `scopewise-core` types.

mod scope_type_tests;
mod selection_tests;
