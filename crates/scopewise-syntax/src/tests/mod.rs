//! Cross-module tests for `scopewise-syntax`.

mod behaviour;
mod unit;
