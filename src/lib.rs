//! Gomoku agent library - LLM-delegated move selection with deterministic fallback.
//!
//! The crate analyzes an 8x8 Gomoku position (chains, open threes, immediate
//! wins), ranks the legal moves center-first, and folds everything into a
//! prompt for an external decision service. The service's reply is parsed and
//! validated; on any failure the agent deterministically plays the top-ranked
//! move, so it always produces a legal move when one exists.
//!
//! # Architecture
//!
//! - **Analysis**: pure pattern scans and move ranking over board snapshots
//! - **Orchestrator**: prompt → decision service → parse → accept or fallback
//! - **LLM client**: OpenAI and Anthropic backends behind the service trait
//!
//! # Example
//!
//! ```no_run
//! use gomoku_agent::{AgentConfig, GameState, LlmClient, MoveOrchestrator};
//!
//! # async fn example(state: GameState) -> anyhow::Result<()> {
//! let config = AgentConfig::new("agent1".to_string());
//! let client = LlmClient::new(config.create_llm_config()?);
//! let orchestrator = MoveOrchestrator::new(client);
//! let chosen = orchestrator.get_move(&state).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod agent_config;
mod analysis;
mod cli;
mod games;
mod llm_client;
mod orchestrator;

// Crate-level exports - Agent configuration
pub use agent_config::{AgentConfig, ConfigError};

// Crate-level exports - Board analysis
pub use analysis::{
    BoardAnalysis, ThreatSummary, analyze, find_immediate_win, has_open_three, max_chain,
    rank_center_first,
};

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Game types
pub use games::gomoku::{
    BOARD_SIZE, Board, Cell, Coord, CoordError, GameState, Player, SnapshotError,
};

// Crate-level exports - LLM client
pub use llm_client::{LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Orchestration
pub use orchestrator::{DecisionService, MoveError, MoveOrchestrator};
