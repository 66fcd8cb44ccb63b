//! Outcome evaluation for Game XO.
//!
//! Pure functions over a single board snapshot. The game state never caches
//! an outcome computed from any board other than the one at its step pointer.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, find_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Decides the outcome of a board.
///
/// A completed line takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(mark) = find_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}
