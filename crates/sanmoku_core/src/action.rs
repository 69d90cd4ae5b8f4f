//! Moves and the errors raised when one is rejected.

use super::{Coord, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub mark: Mark,
    /// Where the mark goes.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.coord.row, self.coord.col)
    }
}

/// Reason a move was refused. The game state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already reached a win or draw.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Row or column outside the board.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The mark does not belong to the player whose turn it is.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// True for rejections a player can fix by choosing another cell.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfRange { .. } | MoveError::CellOccupied { .. }
        )
    }
}

impl std::error::Error for MoveError {}
