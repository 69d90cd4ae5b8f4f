//! Move validation as contracts.
//!
//! Preconditions are checked before every placement and decide whether a
//! move is legal. Postconditions re-check the invariants afterwards in
//! debug builds.

use super::action::{Move, MoveError};
use super::invariants::{AwaitingMoveInvariants, InvariantSet, PlacementInvariants};
use super::{Cell, Coord, GameState, Mark};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not reached a win or draw.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameAlreadyOver`] on a finished game.
    #[instrument(level = "trace", skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: row and column are both on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Fails with [`MoveError::OutOfRange`] for off-board coordinates.
    #[instrument(level = "trace")]
    pub fn check(coord: Coord) -> Result<(), MoveError> {
        if coord.in_bounds() {
            Ok(())
        } else {
            Err(MoveError::OutOfRange {
                row: coord.row,
                col: coord.col,
            })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] when a mark is already there.
    #[instrument(level = "trace", skip(state))]
    pub fn check(state: &GameState, coord: Coord) -> Result<(), MoveError> {
        if state.board().is_empty_at(coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                row: coord.row,
                col: coord.col,
            })
        }
    }
}

/// Precondition: the mark belongs to the player whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongTurn`] for the waiting player's mark.
    #[instrument(level = "trace", skip(state))]
    pub fn check(state: &GameState, mark: Mark) -> Result<(), MoveError> {
        if mark == state.current_player() {
            Ok(())
        } else {
            Err(MoveError::WrongTurn(mark))
        }
    }
}

/// Composite precondition, checked in order: game not over, coordinates
/// in bounds, cell empty. The first failure is reported.
pub struct LegalMove;

impl LegalMove {
    /// Validates a target coordinate against the current state.
    #[instrument(level = "trace", skip(state))]
    pub fn check(state: &GameState, coord: Coord) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        WithinBounds::check(coord)?;
        CellIsEmpty::check(state, coord)?;
        Ok(())
    }
}

/// Decides whether placing at `(row, col)` is legal right now.
///
/// Does not look at whose mark is placed; see [`PlayersTurn`].
#[instrument(skip(state))]
pub fn validate(state: &GameState, row: usize, col: usize) -> Result<(), MoveError> {
    LegalMove::check(state, Coord::new(row, col))
}

/// Contract for placing a mark.
///
/// Preconditions: [`LegalMove`], then [`PlayersTurn`].
///
/// Postconditions: exactly one more mark, nothing overwritten, marks
/// balanced, history matches the board.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(state, action.coord)?;
        PlayersTurn::check(state, action.mark)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let overwritten = before
            .board()
            .cells()
            .filter(|(_, cell)| *cell != Cell::Empty)
            .any(|(coord, cell)| after.board().get(coord) != Some(cell));
        if overwritten {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a placed mark changed".to_string(),
            ));
        }

        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: expected exactly one new move".to_string(),
            ));
        }

        PlacementInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts the waiting-for-a-move invariants (debug builds only).
#[instrument(level = "trace", skip(state))]
pub fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = AwaitingMoveInvariants::check_all(state)
    {
        warn!(?violations, "Game invariants violated");
        panic!("Game invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_empty_cell() {
        let state = GameState::new();
        assert_eq!(validate(&state, 1, 1), Ok(()));
    }

    #[test]
    fn test_out_of_range_reported_before_occupancy() {
        let state = GameState::new();
        assert_eq!(
            validate(&state, 3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            validate(&state, 0, 7),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new();
        state.place(0, 0, Mark::X).expect("legal move");
        assert_eq!(
            validate(&state, 0, 0),
            Err(MoveError::CellOccupied { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_game_over_reported_first() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            let mark = state.current_player();
            state.place(row, col, mark).expect("legal move");
            if !state.is_over() {
                state.end_turn();
            }
        }
        assert!(state.is_over());
        // Out of range and occupied coordinates still report game over.
        assert_eq!(validate(&state, 9, 9), Err(MoveError::GameAlreadyOver));
        assert_eq!(validate(&state, 0, 0), Err(MoveError::GameAlreadyOver));
        assert_eq!(validate(&state, 2, 2), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let state = GameState::new();
        let action = Move::new(Mark::O, Coord::new(1, 1));
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::WrongTurn(Mark::O))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.place(1, 1, Mark::X).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_move() {
        let before = GameState::new();
        assert!(matches!(
            MoveContract::post(&before, &before),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
