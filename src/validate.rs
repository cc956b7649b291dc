//! Move legality.
//!
//! The validator only reports legality; re-prompting on rejection is the
//! round controller's job.

use crate::board::{Board, Cell};

/// True iff (row, col) is on the board and the square is empty.
pub fn is_legal(board: &Board, row: usize, col: usize) -> bool {
    Cell::new(row, col).is_ok_and(|cell| board.is_empty(cell))
}

/// Legality for an already-validated coordinate.
pub fn is_legal_cell(board: &Board, cell: Cell) -> bool {
    board.is_empty(cell)
}
