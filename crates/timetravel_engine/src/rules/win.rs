//! Win detection for N×N boards.

use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Indices of squares checked together for a win.
pub type Line = Vec<usize>;

/// A player who controls a complete line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    player: Player,
    line: Line,
}

impl Winner {
    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the winning line in enumeration order.
    pub fn line(&self) -> &[usize] {
        &self.line
    }

    /// Checks if `index` lies on the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Enumerates every candidate line on an N×N board.
///
/// Order: rows ascending, columns ascending, main diagonal, anti-diagonal.
/// That order is the tie-break when several lines are complete at once.
#[instrument]
pub fn lines(board_size: usize) -> Vec<Line> {
    let n = board_size;
    let mut lines = Vec::with_capacity(2 * n + 2);

    lines.extend((0..n).map(|i| (0..n).map(|j| i * n + j).collect::<Line>()));
    lines.extend((0..n).map(|i| (0..n).map(|j| j * n + i).collect::<Line>()));
    lines.push((0..n).map(|k| k * (n + 1)).collect());
    lines.push((0..n).map(|k| (k + 1) * (n - 1)).collect());

    lines
}

/// Checks if some line is fully controlled by one player.
///
/// Returns the first complete line in [`lines`] order. Indices beyond the
/// end of `squares` count as empty.
#[instrument(skip(squares), fields(len = squares.len()))]
pub fn compute_winner(squares: &[Square], board_size: usize) -> Option<Winner> {
    let at = |index: usize| squares.get(index).copied().unwrap_or_default();

    lines(board_size).into_iter().find_map(|line| {
        let player = at(*line.first()?).player()?;
        line.iter()
            .all(|&index| at(index) == Square::Occupied(player))
            .then_some(Winner { player, line })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_lines_for_three() {
        let lines = lines(3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], vec![0, 1, 2]);
        assert_eq!(lines[3], vec![0, 3, 6]);
        assert_eq!(lines[6], vec![0, 4, 8]);
        assert_eq!(lines[7], vec![2, 4, 6]);
    }

    #[test]
    fn test_lines_count_scales() {
        for n in 3..=9 {
            let lines = lines(n);
            assert_eq!(lines.len(), 2 * n + 2);
            assert!(lines.iter().all(|line| line.len() == n));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(compute_winner(&[E; 9], 3), None);
    }

    #[test]
    fn test_winner_top_row() {
        let winner = compute_winner(&[X, X, X, O, O, E, E, E, E], 3).unwrap();
        assert_eq!(winner.player(), Player::X);
        assert_eq!(winner.line(), &[0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let winner = compute_winner(&[X, X, O, X, O, E, O, E, E], 3).unwrap();
        assert_eq!(winner.player(), Player::O);
        assert_eq!(winner.line(), &[2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(compute_winner(&[X, X, E, E, E, E, E, E, E], 3), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        assert_eq!(compute_winner(&[X, X, O, E, E, E, E, E, E], 3), None);
    }

    #[test]
    fn test_short_slice_counts_as_empty() {
        assert_eq!(compute_winner(&[X, X], 3), None);
    }

    #[test]
    fn test_degenerate_sizes_are_total() {
        assert_eq!(compute_winner(&[], 0), None);
        let winner = compute_winner(&[O], 1).unwrap();
        assert_eq!(winner.player(), Player::O);
        assert_eq!(winner.line(), &[0]);
    }
}
