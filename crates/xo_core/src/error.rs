//! Error types for game transitions.

use super::{Outcome, Position, Ticket};

/// Why a move was not applied.
///
/// A rejected move leaves the game state untouched. The presentation layer
/// ignores these apart from logging them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The board at the step pointer is already decided.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// A cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// A bot move computed against a state that has since changed.
    #[display("Stale bot move for revision {} at step {}", _0.revision, _0.step)]
    Stale(Ticket),
}

impl std::error::Error for MoveError {}

/// Contract violations by the caller.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Jump target beyond the recorded history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for GameError {}
