//! Monotonic timeline invariant: each entry adds exactly one mark.

use super::Invariant;
use crate::game::GameState;
use crate::types::{Player, Square};

/// Invariant: the timeline grows one mark at a time.
///
/// The opening entry is blank and has no coordinates. Entry `k` differs from
/// entry `k - 1` only at its recorded coordinates, where the previously empty
/// square now holds the mark of the player who moved at step `k - 1`.
pub struct MonotonicTimelineInvariant;

impl Invariant<GameState> for MonotonicTimelineInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let start = history.first();
        if start.coordinates().is_some() || !start.board().is_blank() {
            return false;
        }

        let entries: Vec<_> = history.iter().collect();
        entries.windows(2).enumerate().all(|(step, pair)| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(coordinates) = pair[1].coordinates() else {
                return false;
            };
            if before.squares().len() != after.squares().len() {
                return false;
            }

            let n = after.size().get();
            if coordinates.row() >= n || coordinates.col() >= n {
                return false;
            }
            let played = coordinates.to_index(after.size());
            let mark = Square::Occupied(Player::for_step(step));
            before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .all(|(index, (old, new))| {
                    if index == played {
                        old.is_empty() && *new == mark
                    } else {
                        old == new
                    }
                })
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player on turn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Move;
    use crate::types::Coordinates;

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicTimelineInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_branching_holds() {
        let game = GameState::new()
            .apply_move(0)
            .apply_move(1)
            .jump_to(1)
            .apply_move(2)
            .apply_move(3);
        assert!(MonotonicTimelineInvariant::holds(&game));
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut game = GameState::new().apply_move(4);
        game.history.later[0]
            .board
            .set(4, Square::Occupied(Player::O))
            .unwrap();
        assert!(!MonotonicTimelineInvariant::holds(&game));
    }

    #[test]
    fn test_skipped_mark_violates() {
        let mut game = GameState::new().apply_move(4);
        let board = game.history.later[0].board().clone();
        game.history
            .later
            .push(Move::played(board, Coordinates::new(0, 0)));
        assert!(!MonotonicTimelineInvariant::holds(&game));
    }

    #[test]
    fn test_off_board_coordinates_violate() {
        let mut game = GameState::new().apply_move(4);
        let board = game.history.later[0].board().clone();
        game.history.later[0] = Move::played(board, Coordinates::new(1, usize::MAX));
        assert!(!MonotonicTimelineInvariant::holds(&game));
    }
}
