//! Turn order invariant: the player to move is determined by the marks on the board.

use super::super::{GameState, Mark};
use super::Invariant;
use tracing::warn;

/// Invariant: X is to move exactly when both players have placed the
/// same number of marks.
///
/// Only meaningful while the game waits for a move; between `place` and
/// `end_turn` it is expected not to hold.
pub struct TurnMatchesMarksInvariant;

impl Invariant<GameState> for TurnMatchesMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Mark::X);
        let o_count = state.board().count(Mark::O);
        let expected = if x_count == o_count { Mark::X } else { Mark::O };

        let valid = state.current_player() == expected;
        if !valid {
            warn!(
                current = %state.current_player(),
                %expected,
                "Turn order violated"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
