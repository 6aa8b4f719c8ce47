//! Bounds-checked board coordinates.

use super::types::BOARD_SIZE;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A (row, column) pair on the 8x8 board, 0-indexed.
///
/// Construction is bounds-checked, so a `Coord` is always a valid cell and
/// board lookups through it are infallible. On the wire it serializes as the
/// two-element `[row, col]` array used by the move protocol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({row},{col})")]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if either component is off-board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row index (0-7).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-7).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Steps by the given offsets, or `None` if the result leaves the board.
    pub fn step(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Self { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = CoordError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(CoordError)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(at: Coord) -> Self {
        (at.row, at.col)
    }
}

/// Coordinate outside the board bounds.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("coordinate out of bounds for an {}x{} board", BOARD_SIZE, BOARD_SIZE)]
pub struct CoordError;
