//! The step pointer always addresses a recorded entry.

use super::Invariant;
use crate::GameState;

/// Invariant: `0 <= step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant for StepInBoundsInvariant {
    const DESCRIPTION: &'static str = "Step pointer addresses a recorded history entry";

    fn violated_at(game: &GameState) -> Option<usize> {
        (game.step() >= game.history().len()).then_some(game.step())
    }
}
