//! Pure tic-tac-toe game logic for Game XO.
//!
//! The human always plays X and moves first; a random-move bot plays O.
//! Every move appends an immutable board snapshot to the [`History`], and the
//! [`GameState`] step pointer can jump back to any earlier snapshot.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Position`], [`Move`]
//! - **Rules**: pure outcome evaluation over the 8 fixed lines
//! - **State**: the [`GameState`] controller with move, jump and reset transitions
//! - **Bot**: [`RandomBot`] move selection tagged with the state it targets
//! - **Invariants**: history properties checked in debug builds
//!
//! # Example
//!
//! ```
//! use xo_core::{GameState, Mark, Outcome, Position};
//!
//! let mut game = GameState::new();
//! for pos in [0, 3, 1, 4, 2] {
//!     game.play_index(pos).unwrap();
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Mark::X));
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! assert!(game.board().is_empty(Position::BottomRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod bot;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::Move;
pub use bot::{BOT_MOVE_DELAY, BotMove, RandomBot, Ticket};
pub use error::{GameError, MoveError};
pub use history::History;
pub use position::Position;
pub use rules::{evaluate_outcome, find_winner, is_full, winning_line};
pub use state::GameState;
pub use types::{Board, Cell, Mark, Outcome};
pub use view::GameView;
