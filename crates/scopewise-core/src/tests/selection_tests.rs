//! Tests for [`SelectionWithEditor`].

use crate::{Position, Range, SelectionWithEditor};

#[test]
fn selection_from_positions_normalises_order() {
    let selection =
        SelectionWithEditor::from_positions("doc", Position::new(1, 2), Position::new(0, 0));
    assert_eq!(selection.range().start(), Position::new(0, 0));
    assert_eq!(selection.range().end(), Position::new(1, 2));
    assert!(!selection.is_single_line());
    assert!(!selection.is_empty());
}

#[test]
fn with_range_keeps_the_editor() {
    let cursor = SelectionWithEditor::new(7_u32, Range::empty(Position::new(0, 0)));
    assert!(cursor.is_empty());

    let widened = cursor.with_range(Range::new(Position::new(0, 0), Position::new(0, 13)));
    assert_eq!(*widened.editor(), 7);
    assert!(widened.is_single_line());
    assert_eq!(widened.into_parts().1.end(), Position::new(0, 13));
}
