//! Position summaries for prompt construction.

use super::scanner;
use crate::games::gomoku::{Board, Coord, Player};
use derive_getters::Getters;
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Scanner findings for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct ThreatSummary {
    /// Length of the player's longest chain.
    longest_chain: usize,
    /// Whether the player has an open three.
    open_three: bool,
    /// A legal move completing five in a row, if one exists.
    winning_move: Option<Coord>,
}

impl fmt::Display for ThreatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "longest chain {}, open three: {}, winning move: ",
            self.longest_chain,
            if self.open_three { "yes" } else { "no" },
        )?;
        match self.winning_move {
            Some(at) => write!(f, "{}", at),
            None => write!(f, "none"),
        }
    }
}

/// Threat summaries for both sides of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct BoardAnalysis {
    /// Summary for the player to move.
    own: ThreatSummary,
    /// Summary for the opponent.
    rival: ThreatSummary,
}

/// Runs the scanner for both players and packages the results.
///
/// Pure function of the snapshot; the findings are advisory prompt content,
/// never acted on directly.
#[instrument(skip(board, legal_moves))]
pub fn analyze(board: &Board, legal_moves: &[Coord], player: Player) -> BoardAnalysis {
    let analysis = BoardAnalysis {
        own: summarize(board, legal_moves, player),
        rival: summarize(board, legal_moves, player.opponent()),
    };
    debug!(own = %analysis.own, rival = %analysis.rival, "Board analyzed");
    analysis
}

fn summarize(board: &Board, legal_moves: &[Coord], player: Player) -> ThreatSummary {
    ThreatSummary {
        longest_chain: scanner::max_chain(board, player),
        open_three: scanner::has_open_three(board, player),
        winning_move: scanner::find_immediate_win(board, legal_moves, player),
    }
}
