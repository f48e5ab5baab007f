//! Core data model for locating syntactic scopes from editor selections.
//!
//! This crate holds the editor-facing value types shared by the matcher in
//! `scopewise-syntax`: positions and ranges expressed in the host editor's
//! coordinate system, selections tagged with an opaque editor handle, the
//! catalogue of well-known scope types, and matcher configuration.
//!
//! # Core types
//!
//! - [`Position`] and [`Range`]: zero-based line/column coordinates with
//!   UTF-16 columns
//! - [`SelectionWithEditor`]: a range bound to the editor it came from
//! - [`ScopeType`]: the scope a matcher looks for (`comment`,
//!   `functionCall`, ...)
//! - [`MatcherConfig`] and [`TieBreak`]: tuning for ambiguous matches
//!
//! # Example
//!
//! ```
//! use scopewise_core::{Position, Range, SelectionWithEditor};
//!
//! let selection = SelectionWithEditor::from_positions(
//!     "buffer-1",
//!     Position::new(0, 0),
//!     Position::new(1, 2),
//! );
//! assert!(!selection.is_single_line());
//! assert!(Range::new(Position::new(0, 0), Position::new(3, 0)).contains(&selection.range()));
//! ```

mod config;
mod error;
mod position;
mod scope_type;
mod selection;

pub use config::{MatcherConfig, TieBreak, TieBreakParseError};
pub use error::PositionParseError;
pub use position::{Position, Range};
pub use scope_type::ScopeType;
pub use selection::SelectionWithEditor;

#[cfg(test)]
mod tests;
