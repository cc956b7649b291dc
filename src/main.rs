//! Terni - console tic-tac-toe tournaments.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, OpponentKind};
use terni::{
    ComputerPlayer, ConsoleInput, ConsoleRenderer, ConsoleReporter, HumanPlayer, Player,
    Tournament,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(length = %cli.length, opponent = ?cli.opponent, "starting terni");

    let x: Box<dyn Player> = Box::new(HumanPlayer::new("Player 1", Box::new(ConsoleInput::new())));
    let o: Box<dyn Player> = match cli.opponent {
        OpponentKind::Human => {
            Box::new(HumanPlayer::new("Player 2", Box::new(ConsoleInput::new())))
        }
        OpponentKind::Computer => Box::new(ComputerPlayer::new("Computer")),
    };

    println!(
        "Playing a {} tournament: first to {} round wins.",
        cli.length,
        cli.length.rounds_to_win()
    );

    let mut tournament = Tournament::new(cli.length, x, o);
    let mut renderer = ConsoleRenderer::new();
    let mut reporter = ConsoleReporter::new(cli.length.rounds_to_win());
    let winner = tournament.run(&mut renderer, &mut reporter)?;

    info!(%winner, "tournament finished");
    Ok(())
}
