//! Marks alternate X, O, X, ... through the history.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: the mark placed by entry i is X iff i is odd.
pub struct AlternatingMarksInvariant;

impl Invariant for AlternatingMarksInvariant {
    const DESCRIPTION: &'static str = "Players alternate turns starting with X";

    fn violated_at(game: &GameState) -> Option<usize> {
        let history = game.history();
        (1..history.len()).find(|&step| {
            !history
                .move_at(step)
                .is_some_and(|mv| mv.mark == Mark::for_step(step - 1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_alternating_game_holds() {
        let mut game = GameState::new();
        for idx in [0, 1, 2] {
            game.play_index(idx).unwrap();
        }
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_double_x_violates() {
        let mut game = GameState::new();
        let first = Board::new().with_mark(Position::TopLeft, Mark::X);
        game.history.push(first);
        game.history.push(first.with_mark(Position::Center, Mark::X));
        assert_eq!(AlternatingMarksInvariant::violated_at(&game), Some(2));
    }
}
