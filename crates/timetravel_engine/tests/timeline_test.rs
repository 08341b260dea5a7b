//! Tests for moves, time travel, branch discard, and resizing.

use timetravel_engine::{Action, BoardSize, Coordinates, GameState, GameStatus, Player, Square};

fn play(game: GameState, moves: &[usize]) -> GameState {
    moves.iter().fold(game, |game, &index| game.apply_move(index))
}

#[test]
fn test_diagonal_win_scenario() {
    let game = play(GameState::new(), &[0, 1, 4, 2, 8]);

    let winner = game.winner().expect("X should win");
    assert_eq!(winner.player(), Player::X);
    assert_eq!(winner.line(), &[0, 4, 8]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_tie_scenario() {
    let game = play(GameState::new(), &[0, 1, 2, 3, 4, 6, 7, 8, 5]);

    assert!(game.board().is_full());
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Tie);
    assert_eq!(game.status().to_string(), "Tie game");
}

#[test]
fn test_occupied_square_is_noop() {
    let game = play(GameState::new(), &[4]);
    assert_eq!(game.apply_move(4), game);
}

#[test]
fn test_decided_game_is_noop() {
    let game = play(GameState::new(), &[0, 1, 4, 2, 8]);
    assert_eq!(game.apply_move(3), game);
}

#[test]
fn test_moves_allowed_again_after_jumping_before_win() {
    let game = play(GameState::new(), &[0, 1, 4, 2, 8]).jump_to(4);
    assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    let game = game.apply_move(5);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), GameStatus::InProgress(Player::O));
}

#[test]
fn test_replaying_same_move_keeps_future() {
    let game = play(GameState::new(), &[4]).jump_to(0).apply_move(4);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.step_number(), 1);
}

#[test]
fn test_replaying_same_move_preserves_long_future() {
    let original = play(GameState::new(), &[0, 1, 2, 3]);
    let game = original.jump_to(0).apply_move(0);

    assert_eq!(game.history(), original.history());
    assert_eq!(game.step_number(), 1);
    assert!(game.can_step_forward());
    assert_eq!(game.step_forward().step_forward().step_forward(), original);
}

#[test]
fn test_different_move_discards_future() {
    let game = play(GameState::new(), &[4]).jump_to(0).apply_move(0);
    assert_eq!(game.history().len(), 2);
    assert_eq!(
        game.current().coordinates(),
        Some(Coordinates::new(0, 0))
    );

    let game = play(GameState::new(), &[0, 1, 2, 3]).jump_to(1).apply_move(8);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.board().get(8), Some(Square::Occupied(Player::O)));
    assert!(!game.can_step_forward());
}

#[test]
fn test_jump_recomputes_active_player() {
    let game = play(GameState::new(), &[0, 1, 2]);
    assert_eq!(game.active_player(), Player::O);
    assert_eq!(game.jump_to(2).active_player(), Player::X);
    assert_eq!(game.jump_to(1).active_player(), Player::O);
    assert_eq!(game.jump_to(0).active_player(), Player::X);
}

#[test]
fn test_jump_does_not_touch_history() {
    let game = play(GameState::new(), &[0, 1, 2]);
    let jumped = game.jump_to(1);
    assert_eq!(jumped.history(), game.history());
    assert_eq!(jumped.board().occupied(), 1);
}

#[test]
fn test_jump_past_end_clamps() {
    let game = play(GameState::new(), &[0, 1]);
    assert_eq!(game.jump_to(99).step_number(), 2);
    assert_eq!(game.step_forward(), game);
}

#[test]
fn test_step_back_at_start_is_noop() {
    let game = GameState::new();
    assert_eq!(game.step_back(), game);
}

#[test]
fn test_resize_resets_everything() {
    for n in 3..=9 {
        let game = play(GameState::new(), &[0, 1, 2]).resize(n).resize(n);
        let expected = if n == 3 { 4 } else { 1 };
        assert_eq!(game.history().len(), expected, "size {n}");
    }

    for n in 4..=9 {
        let game = play(GameState::new(), &[0, 1]).resize(n);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step_number(), 0);
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.board().squares().len(), n * n);
        assert!(game.board().is_blank());
    }
}

#[test]
fn test_resize_clamps() {
    assert_eq!(GameState::new().resize(1).board_size().get(), 3);
    assert_eq!(GameState::new().resize(20).board_size().get(), 9);
    assert_eq!(GameState::new().resize(20).board().squares().len(), 81);
}

#[test]
fn test_resize_to_same_size_is_noop() {
    let game = play(GameState::new(), &[0, 4]);
    assert_eq!(game.resize(3), game);
    assert_eq!(game.resize(0), game);
}

#[test]
fn test_coordinates_recorded() {
    let game = GameState::with_size(BoardSize::new(5)).apply_move(13);
    let coordinates = game.current().coordinates().unwrap();
    assert_eq!((coordinates.row(), coordinates.col()), (2, 3));
    assert_eq!(game.current().label(1), "Go to move #1 (row 2, col 3)");
}

#[test]
fn test_large_board_win() {
    let n = 9;
    // X fills row 8, O plays along row 0.
    let moves: Vec<usize> = (0..n).flat_map(|col| [72 + col, col]).collect();
    let game = play(GameState::with_size(BoardSize::new(n)), &moves);

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winner().unwrap().line(), (72..81).collect::<Vec<_>>().as_slice());
    // O's final move never happened.
    assert_eq!(game.history().len(), 2 * n);
}

#[test]
fn test_actions_match_direct_calls() {
    let direct = play(GameState::new(), &[0, 1, 2]).jump_to(1).apply_move(5);
    let via_actions = GameState::new().apply_all([
        Action::Play(0),
        Action::Play(1),
        Action::Play(2),
        Action::StepBack,
        Action::StepBack,
        Action::Play(5),
    ]);
    assert_eq!(via_actions, direct);
    assert_eq!(via_actions.history().len(), 3);

    let resized = direct.apply(Action::Resize(4));
    assert_eq!(resized, GameState::with_size(BoardSize::new(4)));
    assert_eq!(Action::Play(4).to_string(), "play 4");
}

#[test]
fn test_state_serializes() {
    let game = play(GameState::new(), &[4, 0]);
    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);

    let size: BoardSize = serde_json::from_str("12").unwrap();
    assert_eq!(size.get(), 9);
}

#[test]
fn test_deserialize_rejects_cursor_past_history() {
    let game = play(GameState::new(), &[4, 0]);
    let mut value = serde_json::to_value(&game).unwrap();
    value["step_number"] = serde_json::json!(5);

    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("Invalid game state"));
}

#[test]
fn test_deserialize_rejects_mismatched_board_size() {
    let game = play(GameState::new(), &[4]);
    let mut value = serde_json::to_value(&game).unwrap();
    value["board_size"] = serde_json::json!(4);

    assert!(serde_json::from_value::<GameState>(value).is_err());
}

#[test]
fn test_deserialize_rejects_tampered_move() {
    let game = play(GameState::new(), &[4]);
    let mut value = serde_json::to_value(&game).unwrap();
    value["history"]["later"][0]["coordinates"] = serde_json::json!({ "row": 0, "col": 0 });

    assert!(serde_json::from_value::<GameState>(value).is_err());
}
