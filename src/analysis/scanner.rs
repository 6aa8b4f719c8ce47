//! Pattern detection over board snapshots.
//!
//! All scans are pure: the board is never written to, including the
//! hypothetical placement used by immediate-win detection.

use crate::games::gomoku::{Board, Coord, Player};
use tracing::instrument;

/// The four direction axes: east, south, southeast, northeast. Together with
/// their opposites these cover every line on the board.
const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Stones needed in a row to win.
const WIN_LENGTH: usize = 5;

/// Length of the longest chain `player` has on the board.
///
/// A cell is counted as a chain head along a direction iff the cell one step
/// backward is off-board or not the player's stone, so no chain is counted
/// twice. Returns 0 when the player has no stones.
#[instrument(skip(board))]
pub fn max_chain(board: &Board, player: Player) -> usize {
    let mut best = 0;
    for at in Coord::all() {
        if board.stone(at) != Some(player) {
            continue;
        }
        for (dr, dc) in DIRECTIONS {
            let is_head = match at.step(-dr, -dc) {
                Some(back) => board.stone(back) != Some(player),
                None => true,
            };
            if is_head {
                best = best.max(run_from(board, at, (dr, dc), player));
            }
        }
    }
    best
}

/// Whether `player` has an open three: exactly three consecutive stones with
/// both flanking cells on the board and empty. Off-board flanks count as
/// closed.
#[instrument(skip(board))]
pub fn has_open_three(board: &Board, player: Player) -> bool {
    for at in Coord::all() {
        if board.stone(at) != Some(player) {
            continue;
        }
        for (dr, dc) in DIRECTIONS {
            if run_from(board, at, (dr, dc), player) != 3 {
                continue;
            }
            let open_back = at.step(-dr, -dc).is_some_and(|flank| board.is_empty(flank));
            let open_front = at
                .step(dr * 3, dc * 3)
                .is_some_and(|flank| board.is_empty(flank));
            if open_back && open_front {
                return true;
            }
        }
    }
    false
}

/// First candidate move that would complete five or more in a row for
/// `player`, scanning candidates in the order given.
///
/// The placement is hypothetical: the run through the candidate is computed
/// from the existing stones on both sides, the board itself stays untouched.
#[instrument(skip(board, legal_moves), fields(candidates = legal_moves.len()))]
pub fn find_immediate_win(
    board: &Board,
    legal_moves: &[Coord],
    player: Player,
) -> Option<Coord> {
    legal_moves
        .iter()
        .copied()
        .find(|&at| wins_through(board, at, player))
}

/// Counts consecutive `player` stones starting at `from` (inclusive) along
/// the direction. Zero if `from` is not the player's stone.
fn run_from(board: &Board, from: Coord, (dr, dc): (i8, i8), player: Player) -> usize {
    let mut length = 0;
    let mut cursor = Some(from);
    while let Some(at) = cursor {
        if board.stone(at) != Some(player) {
            break;
        }
        length += 1;
        cursor = at.step(dr, dc);
    }
    length
}

/// Whether placing `player`'s stone at `at` would reach [`WIN_LENGTH`] along
/// any axis.
fn wins_through(board: &Board, at: Coord, player: Player) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = at
            .step(dr, dc)
            .map_or(0, |next| run_from(board, next, (dr, dc), player));
        let backward = at
            .step(-dr, -dc)
            .map_or(0, |prev| run_from(board, prev, (-dr, -dc), player));
        1 + forward + backward >= WIN_LENGTH
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::GameState;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_empty_board_has_no_patterns() {
        let board = Board::new();
        assert_eq!(max_chain(&board, Player::Black), 0);
        assert!(!has_open_three(&board, Player::Black));
    }

    #[test]
    fn test_row_chain_counts_exactly_once() {
        let board = board(&[
            "........",
            ".XXXX...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert_eq!(max_chain(&board, Player::Black), 4);
        assert_eq!(max_chain(&board, Player::White), 0);
    }

    #[test]
    fn test_chain_flanked_by_opponent_still_counts() {
        let board = board(&[
            "OXXXO...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert_eq!(max_chain(&board, Player::Black), 3);
    }

    #[test]
    fn test_diagonal_chains_both_slopes() {
        let down = board(&[
            "X.......",
            ".X......",
            "..X.....",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert_eq!(max_chain(&down, Player::Black), 3);

        let up = board(&[
            "........",
            "........",
            "........",
            "...O....",
            "..O.....",
            ".O......",
            "O.......",
            "........",
        ]);
        assert_eq!(max_chain(&up, Player::White), 4);
    }

    #[test]
    fn test_open_three_canonical() {
        let board = board(&[
            "........",
            "........",
            "........",
            "..XXX...",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(has_open_three(&board, Player::Black));
        assert!(!has_open_three(&board, Player::White));
    }

    #[test]
    fn test_open_three_closed_by_opponent() {
        let board = board(&[
            "........",
            "........",
            "........",
            ".OXXX...",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(!has_open_three(&board, Player::Black));
    }

    #[test]
    fn test_open_three_closed_by_edge() {
        let board = board(&[
            "XXX.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(!has_open_three(&board, Player::Black));
    }

    #[test]
    fn test_four_is_not_an_open_three() {
        let board = board(&[
            "........",
            "........",
            "........",
            ".XXXX...",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(!has_open_three(&board, Player::Black));
    }

    #[test]
    fn test_immediate_win_extends_four() {
        let board = board(&[
            "........",
            "........",
            "..XXXX..",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let state = GameState::new(board.clone(), Player::Black);
        let win = find_immediate_win(&board, &state.legal_moves(), Player::Black);
        // Row-major legal-move order reaches (2,1) before (2,6).
        assert_eq!(win, Some(at(2, 1)));
    }

    #[test]
    fn test_immediate_win_fills_gap() {
        let board = board(&[
            "........",
            "........",
            "........",
            "........",
            ".OO.OO..",
            "........",
            "........",
            "........",
        ]);
        let state = GameState::new(board.clone(), Player::White);
        let win = find_immediate_win(&board, &state.legal_moves(), Player::White);
        assert_eq!(win, Some(at(4, 3)));
    }

    #[test]
    fn test_no_immediate_win_from_three() {
        let board = board(&[
            "........",
            "........",
            "..XXX...",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let state = GameState::new(board.clone(), Player::Black);
        assert_eq!(
            find_immediate_win(&board, &state.legal_moves(), Player::Black),
            None
        );
    }

    #[test]
    fn test_immediate_win_with_no_candidates() {
        let board = Board::new();
        assert_eq!(find_immediate_win(&board, &[], Player::Black), None);
    }

    #[test]
    fn test_scans_never_mutate_the_board() {
        let board = board(&[
            "........",
            "........",
            "..XXXX..",
            "...OOO..",
            "........",
            "........",
            "........",
            "........",
        ]);
        let before = board.clone();
        let legal = GameState::new(board.clone(), Player::Black).legal_moves();
        max_chain(&board, Player::Black);
        has_open_three(&board, Player::White);
        find_immediate_win(&board, &legal, Player::Black);
        assert_eq!(board, before);
    }
}
