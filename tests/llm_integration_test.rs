//! Live-API smoke test for the full move pipeline.
//!
//! Ignored unless the `api` feature is enabled, to prevent accidental token
//! usage: `cargo test --features api -- --ignored`.

use gomoku_agent::{AgentConfig, Board, GameState, LlmClient, MoveOrchestrator, Player};
use tracing_subscriber::EnvFilter;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_agent_picks_a_legal_opening_move() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let config = AgentConfig::new("IntegrationAgent".to_string());
    let llm_config = config
        .create_llm_config()
        .expect("API key must be set for live test");

    let state = GameState::new(Board::new(), Player::Black);
    let orchestrator = MoveOrchestrator::new(LlmClient::new(llm_config));

    let chosen = orchestrator.get_move(&state).await.expect("Should choose a move");
    eprintln!("Model opened at {}", chosen);

    assert!(
        state.legal_moves().contains(&chosen),
        "chosen move must be legal"
    );
}
