//! Sanmoku core - pure game logic for sanmoku-narabe (tic-tac-toe).
//!
//! No I/O lives here. The crate owns the board, the rules that judge it,
//! and the contracts that decide whether a move is legal.
//!
//! # Example
//!
//! ```
//! use sanmoku_core::{GameState, GameStatus, Mark};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     let mark = game.current_player();
//!     game.place(row, col, mark)?;
//!     if !game.is_over() {
//!         game.end_turn();
//!     }
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! # Ok::<(), sanmoku_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod state;
mod types;

pub mod invariants;
pub mod rules;
pub mod validate;

pub use action::{Move, MoveError};
pub use rules::{Verdict, evaluate, is_draw, is_full};
pub use state::{GameState, GameStatus};
pub use types::{BOARD_SIZE, Board, Cell, Coord, Mark};
pub use validate::validate;
