//! The 3x3 board: marks, squares, validated coordinates.

mod cell;
mod types;

pub use cell::{Cell, OutOfRangeError};
pub use types::{Board, Mark, Move, Square};
