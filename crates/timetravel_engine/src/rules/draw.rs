//! Full-board and tie detection.

use super::win::compute_winner;
use crate::types::Square;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(squares), fields(len = squares.len()))]
pub fn is_full(squares: &[Square]) -> bool {
    squares.iter().all(|s| *s != Square::Empty)
}

/// A full board with no winning line.
#[instrument(skip(squares), fields(len = squares.len()))]
pub fn is_tie(squares: &[Square], board_size: usize) -> bool {
    is_full(squares) && compute_winner(squares, board_size).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_not_full() {
        for size in 3..=9 {
            assert!(!is_full(&vec![E; size * size]));
        }
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&[X, O, X, O, E, X, O, X, O]));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&[X; 9]));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / X O O / O X X
        let squares = [X, O, X, X, O, O, O, X, X];
        assert!(is_tie(&squares, 3));
    }

    #[test]
    fn test_not_tie_if_winner() {
        // X X X / O O X / O X O
        let squares = [X, X, X, O, O, X, O, X, O];
        assert!(is_full(&squares));
        assert!(!is_tie(&squares, 3));
    }
}
