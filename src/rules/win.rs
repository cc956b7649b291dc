//! Win detection.

use crate::board::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning lines as row-major square indices: 3 rows, 3 columns,
/// 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark holding a completed line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();
    for [a, b, c] in LINES {
        if let Square::Taken(mark) = squares[a] {
            if squares[b] == squares[a] && squares[c] == squares[a] {
                return Some(mark);
            }
        }
    }
    None
}
