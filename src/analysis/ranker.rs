//! Center-first move ordering.

use crate::games::gomoku::Coord;
use tracing::instrument;

/// Orders moves by ascending distance to the board center (3.5, 3.5), ties
/// broken row-major. The output is a permutation of the input and is
/// identical for any ordering of the same input set.
///
/// The first entry doubles as the orchestrator's fallback move.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn rank_center_first(moves: &[Coord]) -> Vec<Coord> {
    let mut ranked = moves.to_vec();
    ranked.sort_by_key(|&at| (center_distance(at), at.row(), at.col()));
    ranked
}

/// Squared Euclidean distance to the center, computed over doubled
/// coordinates (`2r - 7`, `2c - 7`) so the metric stays integral.
fn center_distance(at: Coord) -> i32 {
    let dr = 2 * at.row() as i32 - 7;
    let dc = 2 * at.col() as i32 - 7;
    dr * dr + dc * dc
}
