//! Win detection.

use super::super::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of scanning the board for a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No line is complete.
    NoWin,
    /// `Mark` owns a complete line.
    Win(Mark),
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Verdict::NoWin => None,
            Verdict::Win(mark) => Some(mark),
        }
    }
}

/// Scans all eight lines (rows, columns, diagonals) and returns the
/// owner of the first complete one.
///
/// Re-run after every move; eight comparisons are cheaper than
/// tracking lines incrementally.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    for [a, b, c] in Board::LINES {
        let first = board.get(a);
        if let Some(mark) = first.and_then(Cell::mark)
            && first == board.get(b)
            && first == board.get(c)
        {
            return Verdict::Win(mark);
        }
    }

    Verdict::NoWin
}
