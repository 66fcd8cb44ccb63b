//! Full-board detection.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is marked.
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::super::win::find_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && find_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, Mark::X));
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let marks = [
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ];
        let board = Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |board, (pos, mark)| board.with_mark(*pos, mark));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, Mark::X))
            .with_mark(Position::MiddleLeft, Mark::O)
            .with_mark(Position::Center, Mark::O);
        assert!(!is_draw(&board));
    }
}
