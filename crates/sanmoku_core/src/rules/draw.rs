//! Draw detection.

use super::super::Board;
use super::win::{Verdict, evaluate};
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line.
///
/// A full board that does contain a line is a win, so the win check
/// comes first.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    evaluate(board) == Verdict::NoWin && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, E], [E, E, E]]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X / O O X / X O O
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
