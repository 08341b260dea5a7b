//! Time-travel tic-tac-toe engine.
//!
//! Pure game logic for N×N tic-tac-toe (3×3 through 9×9) with a move
//! history the player can step through and branch from.
//!
//! # Architecture
//!
//! - **Rules**: stateless win and full-board evaluation
//! - **Game**: immutable [`GameState`] transitions (move, jump, resize)
//! - **Action**: one value per user input, applied with [`GameState::apply`]
//! - **Store**: [`GameStore`] publishes each new state to observers
//!
//! # Example
//!
//! ```
//! use timetravel_engine::{GameState, GameStatus, Player};
//!
//! let game = [0, 1, 4, 2, 8]
//!     .into_iter()
//!     .fold(GameState::new(), |game, index| game.apply_move(index));
//!
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.winner().unwrap().line(), &[0, 4, 8]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
pub mod rules;
mod store;
mod types;

pub use action::Action;
pub use game::{GameState, GameStatus, InvalidStateError};
pub use history::{History, Iter as HistoryIter, Move};
pub use rules::{Line, Winner, compute_winner, is_full, lines};
pub use store::{GameStore, Observer, SubscriptionId};
pub use types::{Board, BoardError, BoardSize, Coordinates, Player, Square};
