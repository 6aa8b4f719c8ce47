//! Integration tests for the move orchestrator with stubbed decision services.

use async_trait::async_trait;
use gomoku_agent::{
    Board, Coord, DecisionService, GameState, LlmError, MoveError, MoveOrchestrator, Player,
    rank_center_first,
};
use std::sync::{Arc, Mutex};

/// Service that always returns the same reply text.
struct Scripted {
    reply: String,
}

#[async_trait]
impl DecisionService for Scripted {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
        Ok(self.reply.clone())
    }
}

/// Service that always fails, as if the transport were down.
struct Unreachable;

#[async_trait]
impl DecisionService for Unreachable {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
        Err(LlmError::new("connection refused".to_string()))
    }
}

/// Service that records the prompts it was sent before replying.
struct Capturing {
    seen_user: Arc<Mutex<Option<String>>>,
    reply: String,
}

#[async_trait]
impl DecisionService for Capturing {
    async fn complete(&self, _system: &str, user: &str) -> Result<String, LlmError> {
        *self.seen_user.lock().unwrap() = Some(user.to_string());
        Ok(self.reply.clone())
    }
}

fn at(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

fn state_from(rows: &[&str], to_move: Player) -> GameState {
    GameState::new(Board::from_rows(rows).unwrap(), to_move)
}

#[tokio::test]
async fn test_accept_round_trip() {
    let state = GameState::new(Board::new(), Player::Black);
    let orchestrator = MoveOrchestrator::new(Scripted {
        reply: r#"{"move": [2, 5]}"#.to_string(),
    });

    let chosen = orchestrator.get_move(&state).await.unwrap();
    assert_eq!(chosen, at(2, 5));
}

#[tokio::test]
async fn test_accept_tolerates_prose_around_json() {
    let state = GameState::new(Board::new(), Player::Black);
    let orchestrator = MoveOrchestrator::new(Scripted {
        reply: "I considered the center.\n{\"move\": [4, 2]}\nGood luck!".to_string(),
    });

    let chosen = orchestrator.get_move(&state).await.unwrap();
    assert_eq!(chosen, at(4, 2));
}

#[tokio::test]
async fn test_fallback_on_transport_failure() {
    let state = GameState::new(Board::new(), Player::Black);
    let orchestrator = MoveOrchestrator::new(Unreachable);

    // Empty board: nearest cell to the true center (3.5, 3.5), row-major
    // tie-break, is (3,3).
    let chosen = orchestrator.get_move(&state).await.unwrap();
    assert_eq!(chosen, at(3, 3));
}

#[tokio::test]
async fn test_fallback_is_deterministic() {
    let state = state_from(
        &[
            "........",
            "........",
            "..X.....",
            "...OX...",
            "....O...",
            "........",
            "........",
            "........",
        ],
        Player::Black,
    );
    let orchestrator = MoveOrchestrator::new(Unreachable);

    let expected = rank_center_first(&state.legal_moves())[0];
    for _ in 0..3 {
        assert_eq!(orchestrator.get_move(&state).await.unwrap(), expected);
    }
}

#[tokio::test]
async fn test_fallback_on_malformed_reply() {
    let state = GameState::new(Board::new(), Player::Black);
    for reply in ["", "pass", "{\"move\": \"center\"}", "{\"move\": [1]}"] {
        let orchestrator = MoveOrchestrator::new(Scripted {
            reply: reply.to_string(),
        });
        assert_eq!(orchestrator.get_move(&state).await.unwrap(), at(3, 3));
    }
}

#[tokio::test]
async fn test_fallback_on_out_of_bounds_reply() {
    let state = GameState::new(Board::new(), Player::Black);
    let orchestrator = MoveOrchestrator::new(Scripted {
        reply: r#"{"move": [8, 3]}"#.to_string(),
    });
    assert_eq!(orchestrator.get_move(&state).await.unwrap(), at(3, 3));
}

#[tokio::test]
async fn test_fallback_on_occupied_cell_reply() {
    let state = state_from(
        &[
            "........",
            "........",
            "........",
            "...X....",
            "........",
            "........",
            "........",
            "........",
        ],
        Player::White,
    );
    let orchestrator = MoveOrchestrator::new(Scripted {
        reply: r#"{"move": [3, 3]}"#.to_string(),
    });

    // (3,3) is taken; the fallback is the next-ranked cell.
    let chosen = orchestrator.get_move(&state).await.unwrap();
    assert_eq!(chosen, at(3, 4));
}

#[tokio::test]
async fn test_full_board_is_an_error() {
    let rows = [
        "XOXOXOXO", "XOXOXOXO", "OXOXOXOX", "OXOXOXOX", "XOXOXOXO", "XOXOXOXO", "OXOXOXOX",
        "OXOXOXOX",
    ];
    let state = state_from(&rows, Player::Black);
    let orchestrator = MoveOrchestrator::new(Unreachable);

    assert_eq!(
        orchestrator.get_move(&state).await,
        Err(MoveError::NoLegalMoves)
    );
}

#[tokio::test]
async fn test_threats_go_into_the_prompt_not_the_move() {
    // Opponent has an open four: the analysis must surface it, but the
    // orchestrator still plays whatever the service replies.
    let state = state_from(
        &[
            "........",
            "........",
            "........",
            "..OOOO..",
            "........",
            "........",
            "........",
            "........",
        ],
        Player::Black,
    );

    let seen_user = Arc::new(Mutex::new(None));
    let orchestrator = MoveOrchestrator::new(Capturing {
        seen_user: seen_user.clone(),
        reply: r#"{"move": [7, 7]}"#.to_string(),
    });

    let chosen = orchestrator.get_move(&state).await.unwrap();
    assert_eq!(chosen, at(7, 7), "move comes from the reply, not the scanner");

    let prompt = seen_user.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("longest chain 4"), "prompt: {}", prompt);
    assert!(prompt.contains("O O O O"), "board should be rendered");
    assert!(prompt.contains("LEGAL_MOVES"));
    assert!(prompt.contains("(3,3)"), "ranked moves should be listed");
}

#[tokio::test]
async fn test_row_col_reply_shape_accepted() {
    let state = GameState::new(Board::new(), Player::White);
    let orchestrator = MoveOrchestrator::new(Scripted {
        reply: r#"{"row": 5, "col": 1}"#.to_string(),
    });
    assert_eq!(orchestrator.get_move(&state).await.unwrap(), at(5, 1));
}
