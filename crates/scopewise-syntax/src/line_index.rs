//! Conversion from Tree-sitter points to editor positions.
//!
//! Tree-sitter reports columns as byte offsets into the line, while editors
//! count UTF-16 code units. The two agree only on ASCII lines.

use scopewise_core::Position;

/// Byte offsets of every line start in a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(offset, _)| offset + 1));
        Self { line_starts }
    }

    /// Converts a Tree-sitter point into a UTF-16 editor position.
    pub(crate) fn position(&self, source: &str, point: tree_sitter::Point) -> Position {
        let line_start = self
            .line_starts
            .get(point.row)
            .copied()
            .unwrap_or(source.len());
        let line_end = line_start.saturating_add(point.column).min(source.len());
        // A point inside a multi-byte character has no UTF-16 equivalent;
        // fall back to the byte column rather than guessing.
        let column = source
            .get(line_start..line_end)
            .map_or(point.column, |prefix| prefix.encode_utf16().count());
        Position::new(saturate(point.row), saturate(column))
    }
}

fn saturate(value: usize) -> u32 {
    // Line/column numbers will realistically never exceed u32::MAX.
    u32::try_from(value).unwrap_or(u32::MAX)
}
