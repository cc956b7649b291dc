//! Computer player backed by the minimax search.

use super::Player;
use crate::board::{Board, Cell, Mark};
use crate::search;
use anyhow::Result;
use tracing::debug;

/// Computer seat: every proposal comes from [`search::best_move`], so it
/// only ever names empty cells.
#[derive(derive_new::new)]
pub struct ComputerPlayer {
    #[new(into)]
    name: String,
}

impl Player for ComputerPlayer {
    fn propose(&mut self, board: &Board, mark: Mark) -> Result<Cell> {
        debug!(player = %self.name, %mark, "searching");
        let cell = search::best_move(board, mark)?;
        debug!(player = %self.name, %cell, "search finished");
        Ok(cell)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
