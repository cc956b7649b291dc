//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::board::{Board, Cell, Mark};
use anyhow::Result;

/// A seat's move-proposing capability.
///
/// Exactly one proposal is in flight at a time; the round controller
/// serializes all access to the board.
pub trait Player {
    /// Proposes a cell for `mark` on the given board.
    fn propose(&mut self, board: &Board, mark: Mark) -> Result<Cell>;

    /// Display name.
    fn name(&self) -> &str;

    /// Notification that the previous proposal was rejected as occupied.
    /// The same player is re-asked without the turn advancing.
    fn notify_rejected(&mut self, _cell: Cell) {}
}
