//! Tests for N×N win and full-board detection.

use timetravel_engine::{BoardSize, GameState, Player, Square, compute_winner, is_full, lines};

const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);

fn board_with(size: usize, marks: &[(usize, Square)]) -> Vec<Square> {
    let mut squares = vec![Square::Empty; size * size];
    for &(index, square) in marks {
        squares[index] = square;
    }
    squares
}

#[test]
fn test_every_line_wins_on_every_size() {
    for n in 3..=9 {
        for line in lines(n) {
            let marks: Vec<_> = line.iter().map(|&i| (i, O)).collect();
            let squares = board_with(n, &marks);
            let winner = compute_winner(&squares, n).expect("complete line should win");
            assert_eq!(winner.player(), Player::O);
            assert_eq!(winner.line(), line.as_slice());
        }
    }
}

#[test]
fn test_line_with_one_gap_never_wins() {
    for n in 3..=9 {
        for line in lines(n) {
            for gap in 0..line.len() {
                let marks: Vec<_> = line
                    .iter()
                    .enumerate()
                    .filter(|(position, _)| *position != gap)
                    .map(|(_, &i)| (i, X))
                    .collect();
                assert_eq!(compute_winner(&board_with(n, &marks), n), None);
            }
        }
    }
}

#[test]
fn test_winning_line_maps_to_winner_mark() {
    // 5×5 with X filling column 3 and scattered O marks.
    let n = 5;
    let mut marks: Vec<_> = (0..n).map(|row| (row * n + 3, X)).collect();
    marks.extend([(0, O), (6, O), (12, O), (24, O)]);
    let squares = board_with(n, &marks);

    let winner = compute_winner(&squares, n).unwrap();
    assert_eq!(winner.player(), Player::X);
    assert!(winner.line().iter().all(|&i| squares[i] == X));
    assert!(winner.contains(13));
    assert!(!winner.contains(12));
}

#[test]
fn test_rows_before_columns() {
    // 4×4: row 1 and column 0 both complete.
    let marks: Vec<_> = [4, 5, 6, 7, 0, 8, 12].into_iter().map(|i| (i, X)).collect();
    let winner = compute_winner(&board_with(4, &marks), 4).unwrap();
    assert_eq!(winner.line(), &[4, 5, 6, 7]);
}

#[test]
fn test_columns_before_diagonals() {
    // 4×4: column 0 and the main diagonal both complete.
    let marks: Vec<_> = [0, 4, 8, 12, 5, 10, 15].into_iter().map(|i| (i, O)).collect();
    let winner = compute_winner(&board_with(4, &marks), 4).unwrap();
    assert_eq!(winner.line(), &[0, 4, 8, 12]);
}

#[test]
fn test_main_diagonal_before_anti_diagonal() {
    // 5×5: both diagonals complete through the shared center.
    let marks: Vec<_> = [0, 6, 12, 18, 24, 4, 8, 16, 20]
        .into_iter()
        .map(|i| (i, X))
        .collect();
    let winner = compute_winner(&board_with(5, &marks), 5).unwrap();
    assert_eq!(winner.line(), &[0, 6, 12, 18, 24]);
}

#[test]
fn test_earlier_row_wins_regardless_of_player() {
    // 3×3: O owns row 0, X owns row 2 (unreachable in play, still total).
    let squares = board_with(3, &[(0, O), (1, O), (2, O), (6, X), (7, X), (8, X)]);
    assert_eq!(compute_winner(&squares, 3).unwrap().player(), Player::O);
}

#[test]
fn test_initial_board_is_never_full() {
    for n in BoardSize::MIN..=BoardSize::MAX {
        let game = GameState::with_size(BoardSize::new(n));
        assert!(!is_full(game.board().squares()));
        assert!(!game.board().is_full());
        assert_eq!(game.winner(), None);
    }
}

#[test]
fn test_full_board_detected() {
    let squares = vec![X; 16];
    assert!(is_full(&squares));
    let mut squares = squares;
    squares[15] = Square::Empty;
    assert!(!is_full(&squares));
}
