//! Outcome detection for tic-tac-toe.
//!
//! Pure functions of board contents: no turn counting, no stored state.
//! The outcome is recomputed after every half-turn, including the first
//! two, where a win is impossible but the check is still total.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::board::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    InProgress,
    /// A mark holds a completed line.
    Win(Mark),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Whether the round is over.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Evaluates a board.
///
/// The line check precedes the fullness check, so a board that is both
/// full and won reports the win, never a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
