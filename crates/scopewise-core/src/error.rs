//! Error types for parsing core values from text.

use thiserror::Error;

/// Errors raised when parsing a [`Position`](crate::Position) from
/// `line:column` text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PositionParseError {
    /// The `:` separator between line and column was missing.
    #[error("position '{input}' is missing the ':' separator")]
    MissingSeparator {
        /// The text that failed to parse.
        input: String,
    },

    /// The line or column component was not a non-negative integer.
    #[error("position '{input}' has an invalid {component}")]
    InvalidComponent {
        /// The text that failed to parse.
        input: String,
        /// Which component was rejected (`line` or `column`).
        component: &'static str,
    },
}

impl PositionParseError {
    /// Creates a missing separator error.
    #[must_use]
    pub fn missing_separator(input: impl Into<String>) -> Self {
        Self::MissingSeparator {
            input: input.into(),
        }
    }

    /// Creates an invalid component error.
    #[must_use]
    pub fn invalid_component(input: impl Into<String>, component: &'static str) -> Self {
        Self::InvalidComponent {
            input: input.into(),
            component,
        }
    }
}
