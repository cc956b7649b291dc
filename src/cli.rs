//! Command-line interface for terni.

use clap::Parser;
use terni::TournamentLength;

/// Terni - best-of-N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "terni")]
#[command(about = "Play tic-tac-toe tournaments against a perfect opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who sits at O
    #[arg(long, value_enum, default_value = "computer")]
    pub opponent: OpponentKind,

    /// Tournament length
    #[arg(long, value_enum, default_value = "single")]
    pub length: TournamentLength,
}

/// Kind of opponent seated at O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OpponentKind {
    /// A second human at the keyboard.
    Human,
    /// The exhaustive minimax search.
    Computer,
}
