//! Editor coordinates: positions and ranges.
//!
//! Lines and columns are zero-based. Columns count UTF-16 code units so that
//! values line up with what editors such as VS Code report for a cursor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PositionParseError;

/// A line and column position within a document.
///
/// Positions order lexicographically: first by line, then by column.
///
/// # Example
///
/// ```
/// use scopewise_core::Position;
///
/// assert!(Position::new(0, 40) < Position::new(1, 0));
/// assert_eq!("3:7".parse::<Position>(), Ok(Position::new(3, 7)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    line: u32,
    column: u32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the zero-indexed line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the zero-indexed UTF-16 column.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (line, column) = trimmed
            .split_once(':')
            .ok_or_else(|| PositionParseError::missing_separator(trimmed))?;
        let line = line
            .trim()
            .parse()
            .map_err(|_| PositionParseError::invalid_component(trimmed, "line"))?;
        let column = column
            .trim()
            .parse()
            .map_err(|_| PositionParseError::invalid_component(trimmed, "column"))?;
        Ok(Self::new(line, column))
    }
}

/// A closed span between two positions with `start <= end`.
///
/// An empty range (`start == end`) represents a bare cursor.
///
/// # Example
///
/// ```
/// use scopewise_core::{Position, Range};
///
/// // Arguments are reordered so the range is never inverted.
/// let range = Range::new(Position::new(2, 4), Position::new(0, 1));
/// assert_eq!(range.start(), Position::new(0, 1));
/// assert!(!range.is_single_line());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawRange")]
pub struct Range {
    start: Position,
    end: Position,
}

/// Wire form of [`Range`]; endpoints may arrive in either order.
#[derive(Deserialize)]
struct RawRange {
    start: Position,
    end: Position,
}

impl From<RawRange> for Range {
    fn from(raw: RawRange) -> Self {
        Self::new(raw.start, raw.end)
    }
}

impl Range {
    /// Creates a range spanning both positions, whichever order they come in.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Creates an empty range at `position`.
    #[must_use]
    pub const fn empty(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Returns the start position.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the end position.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Returns whether the range is a bare cursor.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.line == self.end.line && self.start.column == self.end.column
    }

    /// Returns whether both ends sit on the same line.
    #[must_use]
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns whether `other` lies entirely within this range.
    ///
    /// Containment is closed: touching either boundary still counts.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns whether `position` lies within this range, boundaries included.
    #[must_use]
    pub fn contains_position(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Returns the smallest range covering both ranges.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
