//! Exhaustive minimax move selection.
//!
//! The 3x3 game tree is at most 9! positions, so the search visits the
//! whole remaining tree with no pruning and no heuristics: the chosen
//! move is optimal against optimal play.

use crate::board::{Board, Cell, Mark};
use crate::rules::{self, Outcome};
use tracing::{debug, instrument};

/// Search failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// Search invoked on a full board. Callers must evaluate the outcome
    /// before asking for a move; this is a contract violation, not a
    /// recoverable condition.
    #[display("no legal move: the board is full")]
    NoLegalMove,
}

/// Returns the empty cell whose placement yields the best guaranteed
/// score for `mark`, assuming the opponent also plays optimally.
///
/// Ties are broken by the first cell encountered in row-major order, so
/// the result is deterministic for a given board.
#[instrument(skip(board))]
pub fn best_move(board: &Board, mark: Mark) -> Result<Cell, SearchError> {
    let mut best: Option<(Cell, i32)> = None;
    for cell in board.empty_cells() {
        let mut next = board.clone();
        next.place(cell, mark);
        let score = minimax(&next, mark, 1, false);
        debug!(%cell, score, "scored candidate");
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((cell, score));
        }
    }
    let (cell, score) = best.ok_or(SearchError::NoLegalMove)?;
    debug!(%cell, score, "selected move");
    Ok(cell)
}

/// Scores a position from `mark`'s perspective.
///
/// Terminal scores are depth-shaped: `+10 - depth` for wins and
/// `-10 + depth` for losses, so the search prefers the fastest win and
/// the slowest loss among otherwise-equal branches. Draws score a flat 0
/// with no depth term.
fn minimax(board: &Board, mark: Mark, depth: i32, maximizing: bool) -> i32 {
    match rules::evaluate(board) {
        Outcome::Win(winner) if winner == mark => 10 - depth,
        Outcome::Win(_) => -10 + depth,
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let to_place = if maximizing { mark } else { mark.opponent() };
            let mut extreme = if maximizing { i32::MIN } else { i32::MAX };
            for cell in board.empty_cells() {
                let mut next = board.clone();
                next.place(cell, to_place);
                let score = minimax(&next, mark, depth + 1, !maximizing);
                extreme = if maximizing {
                    extreme.max(score)
                } else {
                    extreme.min(score)
                };
            }
            extreme
        }
    }
}
