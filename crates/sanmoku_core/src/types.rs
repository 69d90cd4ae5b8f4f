//! Core domain types for sanmoku-narabe.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::instrument;

/// Side length of the (square) board.
pub const BOARD_SIZE: usize = 3;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// First player (MarkA).
    X,
    /// Second player (MarkB).
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Single-character symbol used when rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// A (row, column) coordinate. Not necessarily on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Whether both indices fall inside `[0, BOARD_SIZE)`.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

const fn at(row: usize, col: usize) -> Coord {
    Coord { row, col }
}

/// Fixed-size sanmoku board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// All eight lines: rows, then columns, then the two diagonals.
    pub const LINES: [[Coord; 3]; 8] = [
        // Rows
        [at(0, 0), at(0, 1), at(0, 2)],
        [at(1, 0), at(1, 1), at(1, 2)],
        [at(2, 0), at(2, 1), at(2, 2)],
        // Columns
        [at(0, 0), at(1, 0), at(2, 0)],
        [at(0, 1), at(1, 1), at(2, 1)],
        [at(0, 2), at(1, 2), at(2, 2)],
        // Diagonals
        [at(0, 0), at(1, 1), at(2, 2)],
        [at(0, 2), at(1, 1), at(2, 0)],
    ];

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    ///
    /// Useful for analysing positions; a [`GameState`](crate::GameState)
    /// never accepts an externally built board.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `coord`, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
    }

    /// Writes a cell. Callers have already bounds-checked `coord`.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Checks if the cell at `coord` is on the board and empty.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates over every coordinate with its cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coord::new(row, col), *cell))
        })
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.mark() == Some(mark))
            .count()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, cell)| cell != Cell::Empty)
    }

    /// Renders the board as text with row and column indices.
    ///
    /// ```text
    ///   0 1 2
    /// 0 X|O|
    ///   -----
    /// 1  |X|
    ///   -----
    /// 2  | |O
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn render(&self) -> String {
        let mut out = String::from(" ");
        for col in 0..BOARD_SIZE {
            let _ = write!(out, " {col}");
        }
        out.push('\n');

        for (row, cells) in self.cells.iter().enumerate() {
            let symbols: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
            let _ = writeln!(out, "{row} {}", symbols.join("|"));
            if row + 1 < BOARD_SIZE {
                let _ = writeln!(out, "  {}", "-".repeat(BOARD_SIZE * 2 - 1));
            }
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
