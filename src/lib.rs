//! Terni - a tic-tac-toe tournament engine with an exhaustive minimax
//! opponent.
//!
//! # Architecture
//!
//! - **board**: marks, squares, validated coordinates, the 3x3 grid
//! - **rules**: outcome detection (win lines, draw, in-progress)
//! - **validate**: move legality predicate
//! - **search**: exhaustive minimax move selection
//! - **players**: [`Player`] capability with human and computer seats
//! - **tournament**: round state machine and best-of-N control
//! - **console**: stdin/stdout collaborators for the terminal front-end
//!
//! The engine is single-threaded and synchronous; front-ends plug in
//! through the collaborator traits in the interface module.
//!
//! # Example
//!
//! ```
//! use terni::{Board, Mark, best_move};
//!
//! let board = Board::new();
//! let opening = best_move(&board, Mark::X).unwrap();
//! assert!(board.is_empty(opening));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod console;
mod interface;
mod players;
mod rules;
mod search;
mod tournament;
mod validate;

pub use board::{Board, Cell, Mark, Move, OutOfRangeError, Square};
pub use console::{ConsoleInput, ConsoleRenderer, ConsoleReporter};
pub use interface::{InputSource, OutcomeSink, Renderer};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use rules::{Outcome, check_winner, evaluate, is_full};
pub use search::{SearchError, best_move};
pub use tournament::{Round, Seat, Tournament, TournamentLength};
pub use validate::{is_legal, is_legal_cell};
