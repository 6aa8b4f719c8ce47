//! Game snapshots supplied by the external game runner.

use super::position::Coord;
use super::types::{Board, Player};
use derive_more::{Display, Error};
use serde::Deserialize;
use tracing::{debug, instrument};

/// A point-in-time view of a game: the board plus the player to move.
///
/// The snapshot is read-only input to the analysis engine; every call to the
/// orchestrator re-derives its conclusions from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Player,
}

/// JSON shape accepted by [`GameState::from_json`].
#[derive(Debug, Deserialize)]
struct Snapshot {
    board: Vec<String>,
    to_move: String,
}

impl GameState {
    /// Creates a snapshot from a board and the player to move.
    pub fn new(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// Parses the snapshot wire format:
    /// `{"board": ["........", ...], "to_move": "X"}`.
    #[instrument(skip(text), fields(snapshot_length = text.len()))]
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(text)
            .map_err(|e| SnapshotError::new(format!("invalid snapshot JSON: {}", e)))?;

        let rows: Vec<&str> = snapshot.board.iter().map(String::as_str).collect();
        let board = Board::from_rows(&rows)?;

        let symbol = snapshot.to_move.trim();
        let to_move = symbol
            .chars()
            .next()
            .filter(|_| symbol.len() == 1)
            .and_then(Player::from_symbol)
            .ok_or_else(|| {
                SnapshotError::new(format!("unknown player symbol '{}'", snapshot.to_move))
            })?;

        debug!(?to_move, "Snapshot parsed");
        Ok(Self { board, to_move })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Enumerates every empty cell in row-major order.
    pub fn legal_moves(&self) -> Vec<Coord> {
        Coord::all().filter(|&at| self.board.is_empty(at)).collect()
    }
}

/// Malformed board snapshot.
#[derive(Debug, Clone, Display, Error)]
#[display("Snapshot error: {} at {}:{}", message, file, line)]
pub struct SnapshotError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl SnapshotError {
    /// Creates a new snapshot error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
