//! Collaborator contracts between the engine and a front-end.
//!
//! The engine carries no presentation logic: it asks an [`InputSource`]
//! for human moves, pushes snapshots at a [`Renderer`] after every
//! applied move, and reports terminal results to an [`OutcomeSink`].
//! All calls are synchronous; waiting on a human is a blocking call.

use crate::board::{Board, Cell, Mark};
use crate::rules::Outcome;
use anyhow::Result;

/// Supplies cell choices for a human seat.
///
/// `request_cell` may be re-invoked repeatedly until the returned cell
/// passes validation; the engine is indifferent to how input is gathered.
pub trait InputSource {
    /// Blocks until the human picks a cell for `mark`.
    fn request_cell(&mut self, board: &Board, mark: Mark) -> Result<Cell>;

    /// Called when the previous proposal was rejected as occupied,
    /// before `request_cell` is re-invoked.
    fn notify_rejected(&mut self, _cell: Cell) {}
}

/// Receives a board snapshot after every applied move. Fire-and-forget:
/// the engine consumes no return value.
pub trait Renderer {
    /// Renders the current board.
    fn render(&mut self, board: &Board);
}

/// Receives terminal results, once per round and once per tournament.
/// External statistics or persistence hangs off this trait.
pub trait OutcomeSink {
    /// A round ended with the given outcome.
    fn round_over(&mut self, round: u32, outcome: Outcome);

    /// The tournament ended; `winner` reached `wins` round wins.
    fn tournament_over(&mut self, winner: Mark, wins: u32);
}
