//! Single-round state machine.

use super::seat::Seat;
use crate::board::{Board, Cell, Move};
use crate::interface::Renderer;
use crate::rules::{self, Outcome};
use crate::validate;
use anyhow::Result;
use derive_getters::Getters;
use tracing::{debug, info, warn};

/// One game played to completion on a fresh board.
#[derive(Getters)]
pub struct Round {
    number: u32,
    board: Board,
    turn: u32,
}

impl Round {
    /// Starts round `number` with an empty board.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            board: Board::new(),
            turn: 0,
        }
    }

    /// Plays the round to its terminal outcome. X always opens; the
    /// outcome is evaluated after every applied move, and the renderer
    /// sees every applied move.
    pub fn play(&mut self, seats: &mut [Seat; 2], renderer: &mut dyn Renderer) -> Result<Outcome> {
        info!(round = self.number, "starting round");
        let mut active = 0usize;
        loop {
            self.turn += 1;
            let seat = &mut seats[active];
            let mark = seat.mark();
            let cell = Self::next_move(seat, &self.board)?;
            self.board.apply(Move::new(cell, mark));
            debug!(round = self.number, turn = self.turn, %mark, %cell, "applied move");
            renderer.render(&self.board);

            let outcome = rules::evaluate(&self.board);
            if outcome.is_over() {
                info!(round = self.number, turn = self.turn, ?outcome, "round over");
                return Ok(outcome);
            }
            active = 1 - active;
        }
    }

    /// Asks the same seat until its proposal passes validation. An
    /// illegal proposal does not consume the turn; the seat is notified
    /// and re-asked.
    fn next_move(seat: &mut Seat, board: &Board) -> Result<Cell> {
        loop {
            let cell = seat.propose(board)?;
            if validate::is_legal_cell(board, cell) {
                return Ok(cell);
            }
            warn!(player = seat.name(), %cell, "rejected occupied cell");
            seat.notify_rejected(cell);
        }
    }
}
