//! History consistency: replaying the moves reproduces the board.

use super::super::{Board, Cell, GameState};
use super::Invariant;

/// Invariant: the move history rebuilds the board exactly, and no move in
/// it lands on an occupied cell (marks are never overwritten).
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut rebuilt = Board::new();

        for mv in state.history() {
            if !rebuilt.is_empty_at(mv.coord) {
                return false;
            }
            rebuilt.set(mv.coord, Cell::Marked(mv.mark));
        }

        rebuilt == *state.board()
    }

    fn description() -> &'static str {
        "Board matches move history and cells are never overwritten"
    }
}
