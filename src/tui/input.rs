//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use timetravel_engine::BoardSize;

/// Moves a square cursor on an N×N board based on arrow keys.
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: usize, size: BoardSize, key: KeyCode) -> usize {
    let n = size.get();
    let (row, col) = (cursor / n, cursor % n);

    match key {
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col + 1 < n => cursor + 1,
        KeyCode::Up if row > 0 => cursor - n,
        KeyCode::Down if row + 1 < n => cursor + n,
        // No change for other keys or edge cases
        _ => cursor,
    }
}
