//! Each history entry adds exactly one mark to the previous one.

use super::Invariant;
use crate::{Board, GameState, Move};

/// Invariant: entry 0 is empty and entry i differs from entry i-1 in
/// exactly one cell, which went from empty to marked.
pub struct SingleCellDeltaInvariant;

impl Invariant for SingleCellDeltaInvariant {
    const DESCRIPTION: &'static str =
        "Each history entry adds exactly one mark to the previous entry";

    fn violated_at(game: &GameState) -> Option<usize> {
        let entries = game.history().entries();
        if entries.first() != Some(&Board::new()) {
            return Some(0);
        }
        entries
            .windows(2)
            .position(|pair| Move::between(&pair[0], &pair[1]).is_none())
            .map(|i| i + 1)
    }
}
