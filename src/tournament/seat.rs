//! A tournament participant.

use crate::board::{Board, Cell, Mark};
use crate::players::Player;
use anyhow::Result;

/// One side of the table: a mark, the player sitting behind it, and the
/// round wins accumulated this tournament.
///
/// Win counters persist across rounds and are mutated only by the
/// tournament controller, once per round.
pub struct Seat {
    mark: Mark,
    wins: u32,
    player: Box<dyn Player>,
}

impl Seat {
    /// Seats a player behind a mark with zero wins.
    pub fn new(mark: Mark, player: Box<dyn Player>) -> Self {
        Self {
            mark,
            wins: 0,
            player,
        }
    }

    /// Mark this seat plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Round wins so far.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Player's display name.
    pub fn name(&self) -> &str {
        self.player.name()
    }

    pub(super) fn record_win(&mut self) {
        self.wins += 1;
    }

    pub(super) fn propose(&mut self, board: &Board) -> Result<Cell> {
        self.player.propose(board, self.mark)
    }

    pub(super) fn notify_rejected(&mut self, cell: Cell) {
        self.player.notify_rejected(cell);
    }
}
