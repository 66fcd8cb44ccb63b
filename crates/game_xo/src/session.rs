//! Event-serializing controller around a single game.
//!
//! Every input (cell click, jump, restart, delivered bot move) is a
//! [`GameEvent`] handled one at a time by [`Session::handle`]. After each
//! applied transition the pending bot move is cancelled and, if O is to move,
//! a fresh one is planned against the new state.

use crate::bot_timer::BotTimer;
use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, instrument};
use xo_core::{BotMove, GameError, GameState, GameView, RandomBot};

/// Inputs to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A board cell (index 0-8) was clicked.
    CellClicked(usize),
    /// A move-list entry was selected.
    JumpTo(usize),
    /// The restart control was used.
    Restart,
    /// A bot move whose delay has elapsed.
    BotMove(BotMove),
}

/// A game plus the bot that plays O in it.
pub struct Session<R> {
    game: GameState,
    bot: RandomBot<R>,
    timer: BotTimer,
}

impl<R: Rng> Session<R> {
    /// Creates a session and the receiver that delayed bot moves arrive on.
    ///
    /// Events read from the receiver must be fed back into
    /// [`handle`](Self::handle).
    pub fn new(
        bot_delay: Duration,
        bot: RandomBot<R>,
    ) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let session = Self {
            game: GameState::new(),
            bot,
            timer: BotTimer::new(bot_delay, event_tx),
        };
        (session, event_rx)
    }

    /// Current game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Render input for the current frame.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// True until the bot's move has been applied.
    ///
    /// Covers both the delay and the window where the move sits in the
    /// channel. Every applied transition onto O's undecided turn schedules a
    /// move, so this is exactly [`GameState::is_bot_turn`].
    pub fn bot_pending(&self) -> bool {
        self.game.is_bot_turn()
    }

    /// Applies one event.
    ///
    /// Returns `Ok(true)` if the game changed. Rejected moves (occupied cell,
    /// decided board, stale bot move) return `Ok(false)` and change nothing,
    /// as do clicks while O is to move: the human only ever places X.
    ///
    /// # Errors
    ///
    /// [`GameError::StepOutOfRange`] for a jump past the recorded history.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn handle(&mut self, event: GameEvent) -> Result<bool, GameError> {
        let applied = match event {
            GameEvent::CellClicked(index) if self.game.is_bot_turn() => {
                debug!(index, "Click ignored while the bot is to move");
                return Ok(false);
            }
            GameEvent::CellClicked(index) => self.game.play_index(index).map(Some),
            GameEvent::BotMove(bot_move) => self.game.apply_bot_move(bot_move).map(Some),
            GameEvent::JumpTo(step) => {
                self.game.jump_to(step)?;
                Ok(None)
            }
            GameEvent::Restart => {
                self.game.reset();
                Ok(None)
            }
        };

        match applied {
            Ok(mv) => {
                if let Some(mv) = mv {
                    debug!(%mv, "Move applied");
                }
                self.after_transition();
                Ok(true)
            }
            Err(e) => {
                debug!(reason = %e, "Move ignored");
                Ok(false)
            }
        }
    }

    /// Replaces any pending bot move with one planned against the live state.
    fn after_transition(&mut self) {
        self.timer.cancel();
        if let Some(bot_move) = self.bot.plan(&self.game) {
            self.timer.schedule(bot_move);
        }
    }
}
