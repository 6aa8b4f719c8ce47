//! Move orchestration: prompt the decision service, validate its reply, and
//! fall back deterministically on any failure.

use crate::analysis::{BoardAnalysis, analyze, rank_center_first};
use crate::games::gomoku::{BOARD_SIZE, Coord, GameState};
use crate::llm_client::LlmError;
use async_trait::async_trait;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::fmt::Write as _;
use tracing::{debug, info, instrument, warn};

/// Collaborator that turns a prompt into raw reply text.
///
/// The production implementation is [`crate::LlmClient`]; tests substitute a
/// deterministic stub. Any error from `complete` is a "no usable response"
/// signal and sends the orchestrator down the fallback path.
#[async_trait]
pub trait DecisionService: Send + Sync {
    /// Requests a completion for the given system prompt and user message.
    async fn complete(&self, system_prompt: &str, user_message: &str)
    -> Result<String, LlmError>;
}

/// System prompt carrying the tactical policy. The analysis in the user
/// message is advisory; the model keeps full authority over the move.
const SYSTEM_PROMPT: &str = "\
You are a master-level Gomoku AI on an 8x8 board (0-indexed: rows and cols 0..7).
Reply with ONLY one line of JSON exactly as {\"move\": [row, col]} - no extra text, no code block.
Both numbers must be integers. The move MUST be one of LEGAL_MOVES (an empty cell).

DECISION ORDER (stop at the first rule that applies):
1) WIN NOW - if any move completes five in a row for you, play it.
2) BLOCK LOSS - if the opponent can win next move, block that line.
3) FORCING FOUR - create a four that forces an immediate reply.
4) OPEN THREE - otherwise prefer making an open three near your strongest chain.
5) DOUBLE THREAT - create two independent threats to force a win.
6) SHAPE AND CENTER - otherwise extend your longest open-ended line, preferring central squares.
7) TIE-BREAK - if still tied, choose the earliest move in LEGAL_MOVES.

Before replying, check that [row, col] is within 0..7 and listed in LEGAL_MOVES.";

/// Drives one move decision: analyze the board, prompt the decision service,
/// parse and validate the reply, and fall back to the center-first move when
/// anything goes wrong.
#[derive(Debug, Clone)]
pub struct MoveOrchestrator<S> {
    service: S,
}

impl<S: DecisionService> MoveOrchestrator<S> {
    /// Creates an orchestrator around a decision service.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Chooses a move for the snapshot.
    ///
    /// Always returns a legal move when one exists; errs only when the board
    /// has no legal moves at all, which is the caller's game-over condition.
    #[instrument(skip(self, state), fields(to_move = ?state.to_move()))]
    pub async fn get_move(&self, state: &GameState) -> Result<Coord, MoveError> {
        let legal = state.legal_moves();
        if legal.is_empty() {
            return Err(MoveError::NoLegalMoves);
        }

        let analysis = analyze(state.board(), &legal, state.to_move());
        let ranked = rank_center_first(&legal);
        let fallback = ranked[0];

        let user_message = build_user_message(state, &analysis, &ranked);
        debug!(prompt_length = user_message.len(), "Prompt built");

        let reply = match self.service.complete(SYSTEM_PROMPT, &user_message).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, chosen = %fallback, "Decision service failed, falling back");
                return Ok(fallback);
            }
        };

        match parse_reply(&reply) {
            Some(at) if legal.contains(&at) => {
                info!(chosen = %at, "Accepted model move");
                Ok(at)
            }
            Some(at) => {
                warn!(proposed = %at, chosen = %fallback, "Model proposed an illegal move, falling back");
                Ok(fallback)
            }
            None => {
                warn!(reply_length = reply.len(), chosen = %fallback, "No parseable move in reply, falling back");
                Ok(fallback)
            }
        }
    }
}

/// Serializes the board, both threat summaries, and the ranked legal moves
/// into the user message.
fn build_user_message(state: &GameState, analysis: &BoardAnalysis, ranked: &[Coord]) -> String {
    let player = state.to_move();
    let mut moves = String::new();
    for (idx, at) in ranked.iter().enumerate() {
        if idx > 0 {
            moves.push(' ');
        }
        let _ = write!(moves, "{}", at);
    }

    format!(
        "BOARD {size}x{size} (0-indexed, '.' = empty):\n{board}\n\n\
         You play as: {me}\nOpponent: {rival}\n\n\
         ANALYSIS (advisory):\n  you: {own}\n  opponent: {theirs}\n\n\
         LEGAL_MOVES (row,col), center first: {moves}\n\n\
         Apply the decision order and reply with one line of JSON only.",
        size = BOARD_SIZE,
        board = state.board().display(),
        me = player.symbol(),
        rival = player.opponent().symbol(),
        own = analysis.own(),
        theirs = analysis.rival(),
        moves = moves,
    )
}

/// Accepted reply shapes. `{"move": [row, col]}` is canonical; the
/// `{"row": .., "col": ..}` variant shows up from models trained on older
/// prompts and is tolerated.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MoveReply {
    Pair {
        #[serde(rename = "move")]
        mv: [i64; 2],
    },
    RowCol {
        row: i64,
        col: i64,
    },
}

/// Best-effort extraction of a board coordinate from raw reply text.
///
/// Takes the first balanced `{...}` object in the text, so surrounding prose
/// and whitespace are tolerated. Returns `None` for anything that does not
/// contain one well-formed, in-bounds coordinate.
fn parse_reply(text: &str) -> Option<Coord> {
    let object = extract_object(text)?;
    let (row, col) = match serde_json::from_str(object).ok()? {
        MoveReply::Pair { mv: [row, col] } => (row, col),
        MoveReply::RowCol { row, col } => (row, col),
    };
    Coord::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?)
}

/// Slice of the first brace-balanced object in `text`, if any.
fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Orchestration error.
///
/// Every internal failure degrades to the fallback move instead; the only
/// hard error is a board with nowhere left to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The snapshot has no empty cells.
    #[display("no legal moves available")]
    NoLegalMoves,
}
