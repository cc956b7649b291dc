//! Validated board coordinates and the keypad-to-cell mapping.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A coordinate or keypad key that does not name a tile on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum OutOfRangeError {
    /// Row or column outside {0, 1, 2}.
    #[display("coordinates ({row}, {col}) are outside the 3x3 board")]
    Coordinates {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
    },
    /// Keypad key outside 1-9.
    #[display("key {key} does not name a tile (expected 1-9)")]
    Key {
        /// Offending key.
        key: u8,
    },
}

/// A validated (row, column) coordinate on the 3x3 grid.
///
/// Construction goes through [`Cell::new`] or [`Cell::from_key`], so a
/// `Cell` held anywhere in the engine is always in range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// All 9 cells in row-major order. Enumeration order is what makes
    /// search tie-breaking deterministic.
    pub const ALL: [Cell; 9] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ];

    /// Creates a cell, rejecting out-of-range coordinates.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, OutOfRangeError> {
        if row > 2 || col > 2 {
            return Err(OutOfRangeError::Coordinates { row, col });
        }
        Ok(Self { row, col })
    }

    /// Maps a numeric-keypad key to a cell.
    ///
    /// Keys follow the keypad layout: 7-8-9 name the top row, 4-5-6 the
    /// middle row, 1-2-3 the bottom row.
    #[instrument]
    pub fn from_key(key: u8) -> Result<Self, OutOfRangeError> {
        if !(1..=9).contains(&key) {
            return Err(OutOfRangeError::Key { key });
        }
        let k = usize::from(key - 1);
        Ok(Self {
            row: 2 - k / 3,
            col: k % 3,
        })
    }

    /// Creates a cell from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this cell (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of this cell (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index of this cell (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Cell::new(1, 1).is_ok());
        assert_eq!(
            Cell::new(3, 0),
            Err(OutOfRangeError::Coordinates { row: 3, col: 0 })
        );
        assert_eq!(
            Cell::new(0, 7),
            Err(OutOfRangeError::Coordinates { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_keypad_layout() {
        // Top row is 7-8-9, bottom row is 1-2-3, matching a numeric keypad.
        let expect = [
            (7, 0, 0),
            (8, 0, 1),
            (9, 0, 2),
            (4, 1, 0),
            (5, 1, 1),
            (6, 1, 2),
            (1, 2, 0),
            (2, 2, 1),
            (3, 2, 2),
        ];
        for (key, row, col) in expect {
            let cell = Cell::from_key(key).unwrap();
            assert_eq!((cell.row(), cell.col()), (row, col), "key {key}");
        }
    }

    #[test]
    fn test_keypad_rejects_unmapped_keys() {
        assert_eq!(Cell::from_key(0), Err(OutOfRangeError::Key { key: 0 }));
        assert_eq!(Cell::from_key(10), Err(OutOfRangeError::Key { key: 10 }));
    }

    #[test]
    fn test_all_is_row_major() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
        assert_eq!(Cell::from_index(4), Cell::new(1, 1).ok());
        assert_eq!(Cell::from_index(9), None);
    }
}
