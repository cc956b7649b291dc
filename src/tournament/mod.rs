//! Round and tournament control.

mod round;
mod seat;

pub use round::Round;
pub use seat::Seat;

use crate::board::Mark;
use crate::interface::{OutcomeSink, Renderer};
use crate::players::Player;
use crate::rules::Outcome;
use anyhow::Result;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of rounds in a tournament.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
pub enum TournamentLength {
    /// One round decides it.
    #[strum(to_string = "single game")]
    Single,
    /// First to 2 of 3.
    #[strum(to_string = "best of 3")]
    BestOfThree,
    /// First to 3 of 5.
    #[strum(to_string = "best of 5")]
    BestOfFive,
}

impl TournamentLength {
    /// Total rounds available.
    pub fn total_rounds(self) -> u32 {
        match self {
            TournamentLength::Single => 1,
            TournamentLength::BestOfThree => 3,
            TournamentLength::BestOfFive => 5,
        }
    }

    /// Round wins required for the tournament, `total / 2 + 1` with
    /// integer division.
    pub fn rounds_to_win(self) -> u32 {
        self.total_rounds() / 2 + 1
    }
}

/// Drives rounds until one seat reaches the win threshold.
///
/// Each round gets a fresh board; win counters persist. Draws increment
/// no counter and simply trigger another round.
#[derive(Getters)]
pub struct Tournament {
    length: TournamentLength,
    seats: [Seat; 2],
    round: u32,
}

impl Tournament {
    /// Seats `x` and `o` for a tournament of the given length.
    pub fn new(length: TournamentLength, x: Box<dyn Player>, o: Box<dyn Player>) -> Self {
        Self {
            length,
            seats: [Seat::new(Mark::X, x), Seat::new(Mark::O, o)],
            round: 0,
        }
    }

    /// Plays rounds to completion and returns the overall winner's mark.
    ///
    /// Round outcomes and the final result are pushed to `sink`; the
    /// controller exposes no further play once this returns.
    pub fn run(
        &mut self,
        renderer: &mut dyn Renderer,
        sink: &mut dyn OutcomeSink,
    ) -> Result<Mark> {
        let needed = self.length.rounds_to_win();
        info!(length = %self.length, needed, "starting tournament");
        loop {
            self.round += 1;
            let mut round = Round::new(self.round);
            let outcome = round.play(&mut self.seats, renderer)?;
            if let Outcome::Win(mark) = outcome {
                self.seat_mut(mark).record_win();
            }
            sink.round_over(self.round, outcome);

            if let Some(winner) = self.winner() {
                let wins = self.seat(winner).wins();
                info!(%winner, wins, rounds = self.round, "tournament over");
                sink.tournament_over(winner, wins);
                return Ok(winner);
            }
        }
    }

    /// The mark that has reached the win threshold, if any.
    pub fn winner(&self) -> Option<Mark> {
        let needed = self.length.rounds_to_win();
        self.seats
            .iter()
            .find(|seat| seat.wins() >= needed)
            .map(Seat::mark)
    }

    /// Seat playing the given mark.
    pub fn seat(&self, mark: Mark) -> &Seat {
        self.seats
            .iter()
            .find(|seat| seat.mark() == mark)
            .expect("both marks are always seated")
    }

    fn seat_mut(&mut self, mark: Mark) -> &mut Seat {
        self.seats
            .iter_mut()
            .find(|seat| seat.mark() == mark)
            .expect("both marks are always seated")
    }
}
