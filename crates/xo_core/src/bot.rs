//! Random-move bot that plays O.
//!
//! The bot only decides; it never touches the game. A decision is returned as
//! a [`BotMove`] tagged with the [`Ticket`] of the state it was computed
//! against, and [`GameState::apply_bot_move`] drops it if that state is gone.

use super::{Board, GameState, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Delay between the bot deciding on a move and the move being applied.
pub const BOT_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Identity of the game state a bot move was planned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    /// [`GameState::revision`] at planning time.
    pub revision: u64,
    /// [`GameState::step`] at planning time.
    pub step: usize,
}

/// A deferred bot move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMove {
    /// State the move targets.
    pub ticket: Ticket,
    /// Chosen cell.
    pub position: Position,
}

/// Bot choosing uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomBot<R> {
    rng: R,
}

impl RandomBot<StdRng> {
    /// Bot seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Bot with a reproducible move sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomBot<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomBot<R> {
    /// Bot backed by a caller-supplied generator (seeded in tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks an empty cell uniformly at random; `None` on a full board.
    #[instrument(skip_all)]
    pub fn choose(&mut self, board: &Board) -> Option<Position> {
        let empty = Position::empty_positions(board);
        let choice = empty.choose(&mut self.rng).copied();
        debug!(candidates = empty.len(), ?choice, "Bot chose position");
        choice
    }

    /// Plans a move if it is the bot's turn.
    #[instrument(skip_all, fields(step = game.step(), revision = game.revision()))]
    pub fn plan(&mut self, game: &GameState) -> Option<BotMove> {
        if !game.is_bot_turn() {
            return None;
        }
        let position = self.choose(game.board())?;
        Some(BotMove {
            ticket: game.ticket(),
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use std::collections::HashSet;

    fn seeded() -> RandomBot<StdRng> {
        RandomBot::seeded(7)
    }

    #[test]
    fn test_no_plan_on_human_turn() {
        let game = GameState::new();
        assert_eq!(seeded().plan(&game), None);
    }

    #[test]
    fn test_plan_targets_empty_cell_and_live_ticket() {
        let mut game = GameState::new();
        game.play(Position::Center).unwrap();
        let plan = seeded().plan(&game).unwrap();
        assert_eq!(plan.ticket, game.ticket());
        assert_ne!(plan.position, Position::Center);
    }

    #[test]
    fn test_no_choice_on_full_board() {
        let full = Position::ALL
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, Mark::X));
        assert_eq!(seeded().choose(&full), None);
    }

    #[test]
    fn test_choices_cover_every_empty_cell() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        let mut bot = seeded();
        let seen: HashSet<_> = (0..500).filter_map(|_| bot.choose(&board)).collect();
        assert_eq!(seen.len(), 7);
        assert!(!seen.contains(&Position::TopLeft));
        assert!(!seen.contains(&Position::Center));
    }

    #[test]
    fn test_no_plan_after_win() {
        let mut game = GameState::new();
        for idx in [0, 3, 1, 4, 2] {
            game.play_index(idx).unwrap();
        }
        game.jump_to(5).unwrap();
        assert_eq!(seeded().plan(&game), None);
    }
}
