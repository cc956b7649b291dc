//! Fullness detection.

use crate::board::{Board, Square};
use tracing::instrument;

/// Whether every square is taken.
///
/// A full board with no completed line is a draw; [`super::evaluate`]
/// checks lines first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|&square| square != Square::Empty)
}
