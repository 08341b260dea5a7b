//! Cursor invariant: the step number addresses a recorded entry.

use super::Invariant;
use crate::game::GameState;

/// Invariant: `step_number < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Step number addresses a recorded history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_past_end_holds() {
        let game = GameState::new().apply_move(0).jump_to(10);
        assert!(CursorInBoundsInvariant::holds(&game));
        assert_eq!(game.step_number(), 1);
    }

    #[test]
    fn test_corrupted_cursor_violates() {
        let mut game = GameState::new();
        game.step_number = 1;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
