//! First-class invariants over the game history.
//!
//! Invariants are logical properties that must hold after every transition.
//! [`GameState`](crate::GameState) checks them in debug builds; they are also
//! testable on their own.

mod alternating_marks;
mod single_cell_delta;
mod step_in_bounds;

pub use alternating_marks::AlternatingMarksInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

use crate::GameState;

/// A property of the game history that every transition must preserve.
pub trait Invariant {
    /// Human-readable statement of the property.
    const DESCRIPTION: &'static str;

    /// First history step at which the property fails, if any.
    fn violated_at(game: &GameState) -> Option<usize>;

    /// True when no step violates the property.
    fn holds(game: &GameState) -> bool {
        Self::violated_at(game).is_none()
    }
}

/// A broken invariant and the step where it first breaks.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{} (broken at step {})", description, step)]
pub struct InvariantViolation {
    /// Statement of the broken invariant.
    pub description: &'static str,
    /// First offending history step.
    pub step: usize,
}

fn violation<I: Invariant>(game: &GameState) -> Option<InvariantViolation> {
    I::violated_at(game).map(|step| InvariantViolation {
        description: I::DESCRIPTION,
        step,
    })
}

/// Checks every history invariant against a game state.
pub fn check_history(game: &GameState) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = [
        violation::<SingleCellDeltaInvariant>(game),
        violation::<AlternatingMarksInvariant>(game),
        violation::<StepInBoundsInvariant>(game),
    ]
    .into_iter()
    .flatten()
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert!(check_history(&GameState::new()).is_ok());
    }

    #[test]
    fn test_after_moves_and_jump_holds() {
        let mut game = GameState::new();
        for idx in [4, 0, 8] {
            game.play_index(idx).unwrap();
        }
        game.jump_to(1).unwrap();
        assert!(check_history(&game).is_ok());
        game.play_index(2).unwrap();
        assert!(check_history(&game).is_ok());
    }

    #[test]
    fn test_violation_names_first_bad_step() {
        let mut game = GameState::new();
        game.play_index(4).unwrap();
        game.step = 5;
        let violations = check_history(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation {
                description: StepInBoundsInvariant::DESCRIPTION,
                step: 5,
            }]
        );
        assert!(violations[0].to_string().ends_with("(broken at step 5)"));
    }
}
