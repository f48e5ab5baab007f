//! Matcher configuration for resolving ambiguous selections.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Rule for ranking several candidates that all contain the selection.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TieBreak {
    /// Prefer the smallest containing candidate.
    #[default]
    Innermost,
    /// Prefer the largest containing candidate.
    Outermost,
    /// Apply no preference: every containing candidate ranks equally.
    All,
}

/// Errors encountered while parsing a [`TieBreak`] from text.
pub type TieBreakParseError = strum::ParseError;

/// Configuration shared by every call made through a matcher.
///
/// # Defaults
///
/// - `tie_break`: [`TieBreak::Innermost`]
/// - `merge_runs`: `true`
///
/// # Example
///
/// ```
/// use scopewise_core::{MatcherConfig, TieBreak};
///
/// let config = MatcherConfig::default().with_tie_break(TieBreak::Outermost);
/// assert_eq!(config.tie_break(), TieBreak::Outermost);
/// assert!(config.merge_runs());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Ranking applied when several candidates contain the selection.
    tie_break: TieBreak,
    /// Whether selections spanning adjacent same-type siblings merge into one
    /// match. When off, a merged run cannot anchor sibling broadening either.
    merge_runs: bool,
}

impl MatcherConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(tie_break: TieBreak, merge_runs: bool) -> Self {
        Self {
            tie_break,
            merge_runs,
        }
    }

    /// Returns the tie-break rule.
    #[must_use]
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Returns whether adjacent sibling runs merge into one match.
    #[must_use]
    pub const fn merge_runs(&self) -> bool {
        self.merge_runs
    }

    /// Returns a copy using `tie_break`.
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Returns a copy with run merging switched on or off.
    #[must_use]
    pub const fn with_merge_runs(mut self, merge_runs: bool) -> Self {
        self.merge_runs = merge_runs;
        self
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::Innermost,
            merge_runs: true,
        }
    }
}
