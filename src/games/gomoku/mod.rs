//! Gomoku domain types: players, coordinates, the 8x8 board, and game snapshots.

mod position;
mod state;
mod types;

pub use position::{Coord, CoordError};
pub use state::{GameState, SnapshotError};
pub use types::{BOARD_SIZE, Board, Cell, Player};
