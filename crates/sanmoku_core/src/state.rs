//! Game state: the board, whose turn it is, and the moves so far.

use super::action::{Move, MoveError};
use super::rules::{self, Verdict};
use super::validate::{Contract, MoveContract, assert_invariants};
use super::{Board, Cell, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// The board filled up without a completed line.
    Draw,
}

/// Complete game state.
///
/// The board only changes through [`GameState::place`]; the player to move
/// only changes through [`GameState::end_turn`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is awaited.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Fails, leaving the state untouched, if the game is over, the
    /// coordinates are off the board, the cell is taken, or it is not
    /// `mark`'s turn (checked in that order). Does not pass the turn;
    /// call [`GameState::end_turn`] once the move is known not to end
    /// the game.
    #[instrument(skip(self), fields(move_number = self.history.len() + 1))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        let action = Move::new(mark, Coord::new(row, col));
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(action.coord, Cell::Marked(mark));
        self.history.push(action);
        debug!(%action, "Mark placed");

        #[cfg(debug_assertions)]
        {
            if let Err(err) = MoveContract::post(&before, self) {
                panic!("{err}");
            }
        }

        Ok(())
    }

    /// Passes the turn to the other player and returns the new mover.
    #[instrument(skip(self))]
    pub fn end_turn(&mut self) -> Mark {
        debug_assert!(!self.is_over(), "end_turn called on a finished game");
        self.current_player = self.current_player.opponent();
        debug!(next = %self.current_player, "Turn passed");
        assert_invariants(self);
        self.current_player
    }

    /// Evaluates the board: win first, then draw.
    #[instrument(level = "trace", skip(self))]
    pub fn status(&self) -> GameStatus {
        match rules::evaluate(&self.board) {
            Verdict::Win(mark) => GameStatus::Won(mark),
            Verdict::NoWin if rules::is_full(&self.board) => GameStatus::Draw,
            Verdict::NoWin => GameStatus::InProgress,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::evaluate(&self.board).winner()
    }

    /// True once a player completed a line.
    pub fn is_won(&self) -> bool {
        self.winner().is_some()
    }

    /// True when the board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// True once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_draw()
    }

    /// Empty cells, in row-major order. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.is_over() {
            return Vec::new();
        }
        self.board
            .cells()
            .filter(|(_, cell)| *cell == Cell::Empty)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Textual board with row and column indices.
    pub fn render(&self) -> String {
        self.board.render()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
