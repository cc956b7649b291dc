//! Human player backed by an input collaborator.

use super::Player;
use crate::board::{Board, Cell, Mark};
use crate::interface::InputSource;
use anyhow::Result;
use tracing::debug;

/// Human seat: defers every proposal to an [`InputSource`].
pub struct HumanPlayer {
    name: String,
    input: Box<dyn InputSource>,
}

impl HumanPlayer {
    /// Creates a human player reading moves from `input`.
    pub fn new(name: impl Into<String>, input: Box<dyn InputSource>) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl Player for HumanPlayer {
    fn propose(&mut self, board: &Board, mark: Mark) -> Result<Cell> {
        debug!(player = %self.name, %mark, "waiting for human input");
        self.input.request_cell(board, mark)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn notify_rejected(&mut self, cell: Cell) {
        self.input.notify_rejected(cell);
    }
}
