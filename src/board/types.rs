//! Core domain types: marks, squares, moves, and the board itself.

use super::cell::{Cell, OutOfRangeError};
use serde::{Deserialize, Serialize};

/// A player's token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// X moves first in every round.
    X,
    /// O moves second.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed yet.
    Empty,
    /// Square holding a mark.
    Taken(Mark),
}

impl Square {
    /// Character used when drawing the square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Taken(Mark::X) => 'X',
            Square::Taken(Mark::O) => 'O',
        }
    }
}

/// A mark placement: transient intent, applied to a board and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Where the mark goes.
    pub cell: Cell,
    /// The mark being placed.
    pub mark: Mark,
}

/// 3x3 board, stored row-major.
///
/// Created fresh at round start and mutated only through [`Board::apply`]
/// (or [`Board::place`]); cloned by the search engine to simulate moves
/// without touching the live board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Square at a validated cell.
    pub fn square(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Square at raw coordinates, rejecting out-of-range input.
    pub fn square_at(&self, row: usize, col: usize) -> Result<Square, OutOfRangeError> {
        Cell::new(row, col).map(|cell| self.square(cell))
    }

    /// Whether the cell holds no mark.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.square(cell) == Square::Empty
    }

    /// Places a mark. Callers validate emptiness first; the round
    /// controller is the enforcement boundary, not this method.
    pub fn place(&mut self, cell: Cell, mark: Mark) {
        debug_assert!(self.is_empty(cell), "cell {cell} already taken");
        self.squares[cell.index()] = Square::Taken(mark);
    }

    /// Applies a move.
    pub fn apply(&mut self, mov: Move) {
        self.place(mov.cell, mov.mark);
    }

    /// All squares as a row-major slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Every cell with its square, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Square)> + '_ {
        Cell::ALL.iter().map(move |&cell| (cell, self.square(cell)))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL
            .iter()
            .copied()
            .filter(move |&cell| self.is_empty(cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
