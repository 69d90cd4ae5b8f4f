//! Balanced marks invariant: X leads O by zero or one.

use super::super::{GameState, Mark};
use super::Invariant;
use tracing::warn;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// Follows from strict alternation starting with X.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Mark::X);
        let o_count = state.board().count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by zero or one marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(BalancedMarksInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_mid_turn() {
        let mut state = GameState::new();
        state.place(1, 1, Mark::X).expect("legal move");
        assert!(BalancedMarksInvariant::holds(&state));
        state.end_turn();
        state.place(0, 0, Mark::O).expect("legal move");
        assert!(BalancedMarksInvariant::holds(&state));
    }
}
