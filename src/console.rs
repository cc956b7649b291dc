//! Console front-end: keypad input, ASCII board drawing, and outcome
//! banners. Pure presentation; all game logic stays in the engine.

use crate::board::{Board, Cell, Mark};
use crate::interface::{InputSource, OutcomeSink, Renderer};
use crate::rules::Outcome;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

/// Reads keypad tile choices (1-9, numpad layout) from stdin.
#[derive(Debug, Default, derive_new::new)]
pub struct ConsoleInput;

impl InputSource for ConsoleInput {
    fn request_cell(&mut self, _board: &Board, mark: Mark) -> Result<Cell> {
        let stdin = std::io::stdin();
        loop {
            print!("{mark}, choose a number corresponding to the tile (1-9): ");
            std::io::stdout().flush().context("flushing prompt")?;

            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .context("reading tile choice")?;
            if read == 0 {
                bail!("input closed while waiting for {mark}'s move");
            }

            match line.trim().parse::<u8>().map(Cell::from_key) {
                Ok(Ok(cell)) => return Ok(cell),
                _ => println!("\nPlease enter a number from 1 to 9.\n"),
            }
        }
    }

    fn notify_rejected(&mut self, _cell: Cell) {
        println!("\nThat tile isn't available. Please choose another.\n");
    }
}

/// Draws the board to stdout after every move.
#[derive(Debug, Default, derive_new::new)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&mut self, board: &Board) {
        println!("\n{}", draw(board));
    }
}

/// ASCII rendering with `---+---+---` row separators.
fn draw(board: &Board) -> String {
    let squares = board.squares();
    let mut out = String::new();
    for row in 0..3 {
        out.push_str(&format!(
            "  {} | {} | {} \n",
            squares[row * 3].symbol(),
            squares[row * 3 + 1].symbol(),
            squares[row * 3 + 2].symbol(),
        ));
        if row < 2 {
            out.push_str(" ---+---+---\n");
        }
    }
    out
}

/// Prints round banners, running standings, and the tournament-winner
/// box to stdout.
#[derive(Debug, derive_new::new)]
pub struct ConsoleReporter {
    needed: u32,
    #[new(default)]
    x_wins: u32,
    #[new(default)]
    o_wins: u32,
}

impl OutcomeSink for ConsoleReporter {
    fn round_over(&mut self, round: u32, outcome: Outcome) {
        match outcome {
            Outcome::Win(mark) => {
                match mark {
                    Mark::X => self.x_wins += 1,
                    Mark::O => self.o_wins += 1,
                }
                println!(" **********\n {{{mark}'s win!}}\n **********");
            }
            Outcome::Draw => println!("The round ends in a draw."),
            Outcome::InProgress => {}
        }
        println!(
            "\nRound {round} complete. Wins needed: {} | X wins: {} | O wins: {}\n",
            self.needed, self.x_wins, self.o_wins
        );
    }

    fn tournament_over(&mut self, winner: Mark, wins: u32) {
        println!(
            "\n +----------+\n | Player {winner} |\n |   Wins!  |\n +----------+\n ({wins} round wins)\n"
        );
    }
}
