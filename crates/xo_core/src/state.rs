//! The game controller: move history, step pointer and outcome.

use super::bot::{BotMove, Ticket};
use super::error::{GameError, MoveError};
use super::rules;
use super::view::GameView;
use super::{Board, History, Mark, Move, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// Game state machine.
///
/// All mutation goes through [`play`](Self::play), [`jump_to`](Self::jump_to)
/// and [`reset`](Self::reset). Each applied transition ends with a single
/// recompute of the outcome from the board at the step pointer and bumps
/// the revision counter that bot moves are tagged with.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step: usize,
    outcome: Outcome,
    revision: u64,
}

impl GameState {
    /// Creates a game at the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
            outcome: Outcome::InProgress,
            revision: 0,
        }
    }

    /// Board at the step pointer.
    pub fn board(&self) -> &Board {
        // The step pointer is kept in bounds by every transition.
        &self.history.entries()[self.step]
    }

    /// Full move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed history entry.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Mark to move at the current step.
    pub fn turn(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Outcome of the board at the step pointer.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Counter bumped by every applied transition.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot identity used to tag deferred bot moves.
    pub fn ticket(&self) -> Ticket {
        Ticket {
            revision: self.revision,
            step: self.step,
        }
    }

    /// True when the game is undecided and O is to move.
    pub fn is_bot_turn(&self) -> bool {
        self.outcome == Outcome::InProgress && self.turn() == Mark::O
    }

    /// Places the current turn's mark at `position`.
    ///
    /// Truncates any history after the step pointer before appending the new
    /// snapshot.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the current board is decided,
    /// [`MoveError::CellOccupied`] if the cell is taken. State is unchanged.
    #[instrument(skip(self), fields(step = self.step, turn = %self.turn()))]
    pub fn play(&mut self, position: Position) -> Result<Move, MoveError> {
        if self.outcome.is_over() {
            debug!(outcome = ?self.outcome, "Ignoring move on decided board");
            return Err(MoveError::GameOver(self.outcome));
        }
        if !self.board().is_empty(position) {
            debug!("Ignoring move on occupied cell");
            return Err(MoveError::CellOccupied(position));
        }

        let mv = Move::new(self.turn(), position);
        let next = self.board().with_mark(position, mv.mark);
        self.history.truncate_after(self.step);
        self.history.push(next);
        self.step = self.history.len() - 1;
        self.recompute();

        info!(%mv, step = self.step, outcome = ?self.outcome, "Move applied");
        Ok(mv)
    }

    /// Cell-click entry point taking a raw board index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices above 8, otherwise as
    /// [`play`](Self::play).
    pub fn play_index(&mut self, index: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(position)
    }

    /// Applies a deferred bot move if the state it was planned against is
    /// still live.
    ///
    /// # Errors
    ///
    /// [`MoveError::Stale`] if any transition happened since the move was
    /// planned, otherwise as [`play`](Self::play).
    #[instrument(skip(self), fields(live = ?self.ticket()))]
    pub fn apply_bot_move(&mut self, bot_move: BotMove) -> Result<Move, MoveError> {
        if bot_move.ticket != self.ticket() {
            warn!(ticket = ?bot_move.ticket, "Dropping stale bot move");
            return Err(MoveError::Stale(bot_move.ticket));
        }
        self.play(bot_move.position)
    }

    /// Moves the step pointer to `step` without discarding history.
    ///
    /// # Errors
    ///
    /// [`GameError::StepOutOfRange`] if `step` is not a recorded entry.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Rejected jump outside history");
            return Err(GameError::StepOutOfRange { step, len });
        }
        self.step = step;
        self.recompute();
        info!(step, outcome = ?self.outcome, "Jumped to step");
        Ok(())
    }

    /// Returns to the initial empty game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = History::new();
        self.step = 0;
        self.recompute();
        info!("Game reset");
    }

    /// Render input for the presentation layer.
    pub fn view(&self) -> GameView {
        GameView::from_state(self)
    }

    /// Re-derives the outcome from the board at the step pointer.
    ///
    /// Runs at the end of every applied transition, so an outcome never
    /// outlives the board it was computed from.
    fn recompute(&mut self) {
        self.outcome = rules::evaluate_outcome(self.board());
        self.revision += 1;

        #[cfg(debug_assertions)]
        if let Err(violations) = crate::invariants::check_history(self) {
            panic!("History invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
