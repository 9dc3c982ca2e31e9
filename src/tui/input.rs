//! Cursor movement for keyboard navigation.

use crate::board::{Column, RowIndex};
use crossterm::event::KeyCode;

/// Board position under the keyboard cursor.
pub type Cursor = (RowIndex, Column);

/// Moves cursor based on arrow keys. Edges do not wrap.
pub fn move_cursor(cursor: Cursor, key: KeyCode) -> Cursor {
    let (row, column) = cursor;
    match key {
        KeyCode::Up => (row.up(), column),
        KeyCode::Down => (row.down(), column),
        KeyCode::Left => (row, column.left()),
        KeyCode::Right => (row, column.right()),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_one_step() {
        let start = (RowIndex::Middle, Column::Center);
        assert_eq!(move_cursor(start, KeyCode::Up), (RowIndex::Top, Column::Center));
        assert_eq!(move_cursor(start, KeyCode::Down), (RowIndex::Bottom, Column::Center));
        assert_eq!(move_cursor(start, KeyCode::Left), (RowIndex::Middle, Column::Left));
        assert_eq!(move_cursor(start, KeyCode::Right), (RowIndex::Middle, Column::Right));
    }

    #[test]
    fn test_corner_stays_put() {
        let corner = (RowIndex::Top, Column::Left);
        assert_eq!(move_cursor(corner, KeyCode::Up), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left), corner);
    }

    #[test]
    fn test_other_keys_ignored() {
        let start = (RowIndex::Bottom, Column::Right);
        assert_eq!(move_cursor(start, KeyCode::Char('x')), start);
    }
}
