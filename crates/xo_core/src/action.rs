//! First-class move records.
//!
//! History stores board snapshots only; a [`Move`] is recovered from the
//! difference between two consecutive snapshots.

use super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Recovers the move that turned `before` into `after`.
    ///
    /// Returns `None` unless exactly one cell changed, from empty to marked.
    #[instrument(skip(before, after))]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut found = None;
        for pos in Position::ALL {
            match (before.get(pos), after.get(pos)) {
                (a, b) if a == b => {}
                (Cell::Empty, Cell::Marked(mark)) if found.is_none() => {
                    found = Some(Move::new(mark, pos));
                }
                _ => return None,
            }
        }
        found
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_single_placement() {
        let before = Board::new();
        let after = before.with_mark(Position::Center, Mark::X);
        assert_eq!(
            Move::between(&before, &after),
            Some(Move::new(Mark::X, Position::Center))
        );
    }

    #[test]
    fn test_between_rejects_two_changes() {
        let before = Board::new();
        let after = before
            .with_mark(Position::Center, Mark::X)
            .with_mark(Position::TopLeft, Mark::O);
        assert_eq!(Move::between(&before, &after), None);
    }

    #[test]
    fn test_between_rejects_identical_boards() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert_eq!(Move::between(&board, &board), None);
    }

    #[test]
    fn test_display() {
        let mv = Move::new(Mark::O, Position::BottomLeft);
        assert_eq!(mv.to_string(), "O -> Bottom-left");
    }
}
