//! Render input handed to the presentation layer.

use super::{Board, GameState, History, Mark, Outcome, Position, rules};
use serde::Serialize;

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Board at the step pointer.
    pub board: Board,
    /// Mark to move.
    pub turn: Mark,
    /// Outcome of the displayed board.
    pub outcome: Outcome,
    /// Displayed history step.
    pub step: usize,
    /// One move-list label per history entry.
    pub moves: Vec<String>,
    /// Completed line to highlight, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Status line text.
    pub status: String,
}

impl GameView {
    pub(crate) fn from_state(game: &GameState) -> Self {
        let outcome = game.outcome();
        let status = match outcome {
            Outcome::InProgress => format!("Next Player: {}", game.turn()),
            other => other.to_string(),
        };
        Self {
            board: *game.board(),
            turn: game.turn(),
            outcome,
            step: game.step(),
            moves: (0..game.history().len()).map(History::label).collect(),
            winning_line: rules::winning_line(game.board()),
            status,
        }
    }
}
