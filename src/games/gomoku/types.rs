//! Core domain types for Gomoku.

use super::position::Coord;
use super::state::SnapshotError;
use serde::{Deserialize, Serialize};

/// Board side length. The agent plays the 8x8 variant.
pub const BOARD_SIZE: usize = 8;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Black stones, rendered as `X` (moves first).
    Black,
    /// White stones, rendered as `O`.
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }

    /// Parses a board symbol. The digit `0` is accepted as white, since
    /// rendered boards sometimes conflate it with `O`.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Player::Black),
            'O' | 'o' | '0' => Some(Player::White),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's stone.
    Occupied(Player),
}

/// 8x8 Gomoku board.
///
/// The analysis engine treats boards as immutable snapshots; nothing in this
/// crate writes to a board after it reaches the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.row() as usize][at.col() as usize]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row() as usize][at.col() as usize] = cell;
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Returns the stone at the coordinate, if any.
    pub fn stone(&self, at: Coord) -> Option<Player> {
        match self.get(at) {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Parses a board from one string per row, using `.` for empty cells and
    /// the player symbols for stones.
    pub fn from_rows(rows: &[&str]) -> Result<Self, SnapshotError> {
        if rows.len() != BOARD_SIZE {
            return Err(SnapshotError::new(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != BOARD_SIZE {
                return Err(SnapshotError::new(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    BOARD_SIZE
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    _ => Cell::Occupied(Player::from_symbol(ch).ok_or_else(|| {
                        SnapshotError::new(format!("unknown cell symbol '{}' at ({},{})", ch, row, col))
                    })?),
                };
                // Both indices verified against BOARD_SIZE above.
                let at = Coord::new(row as u8, col as u8).unwrap();
                board.set(at, cell);
            }
        }
        Ok(board)
    }

    /// Formats the board as the indexed text grid fed into prompts.
    pub fn display(&self) -> String {
        let mut out = String::from("  ");
        for col in 0..BOARD_SIZE {
            out.push_str(&format!("{} ", col));
        }
        out.push('\n');
        for row in 0..BOARD_SIZE {
            out.push_str(&format!("{} ", row));
            for col in 0..BOARD_SIZE {
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                out.push(symbol);
                if col < BOARD_SIZE - 1 {
                    out.push(' ');
                }
            }
            if row < BOARD_SIZE - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
