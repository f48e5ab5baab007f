//! Selections bound to the editor they belong to.

use crate::position::{Position, Range};

/// A selection range paired with an opaque handle to its editor.
///
/// The handle type `E` is chosen by the host: a document URI, a buffer id,
/// or a reference to an editor object. The matcher never inspects it; it only
/// carries it through to the selections it produces so the host knows where
/// to apply them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionWithEditor<E> {
    editor: E,
    range: Range,
}

impl<E> SelectionWithEditor<E> {
    /// Creates a selection for `editor` covering `range`.
    #[must_use]
    pub const fn new(editor: E, range: Range) -> Self {
        Self { editor, range }
    }

    /// Creates a selection for `editor` between two positions.
    ///
    /// The positions may be given in either order.
    #[must_use]
    pub fn from_positions(editor: E, start: Position, end: Position) -> Self {
        Self::new(editor, Range::new(start, end))
    }

    /// Returns the selected range.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Returns the editor handle.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Returns whether the selection is a bare cursor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns whether the selection starts and ends on the same line.
    #[must_use]
    pub const fn is_single_line(&self) -> bool {
        self.range.is_single_line()
    }

    /// Returns a selection over `range` in the same editor.
    #[must_use]
    pub fn with_range(&self, range: Range) -> Self
    where
        E: Clone,
    {
        Self::new(self.editor.clone(), range)
    }

    /// Consumes the selection, returning its editor handle and range.
    #[must_use]
    pub fn into_parts(self) -> (E, Range) {
        (self.editor, self.range)
    }
}
