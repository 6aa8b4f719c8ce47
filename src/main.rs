//! Gomoku agent CLI.
//!
//! Thin I/O wrapper around the analysis engine and move orchestrator: reads a
//! board snapshot, asks the configured LLM for a move, prints the result.

use anyhow::Result;
use clap::Parser;
use gomoku_agent::{
    AgentConfig, Cli, Command, GameState, LlmClient, MoveOrchestrator, rank_center_first,
};
use std::io::Read as _;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Move { config, state } => run_move(config, state).await,
        Command::Rank { state } => run_rank(state),
    }
}

/// Full orchestration: snapshot in, chosen move out.
async fn run_move(config_path: PathBuf, state_path: Option<PathBuf>) -> Result<()> {
    let state = read_snapshot(state_path)?;
    let config = load_config(&config_path)?;

    info!(agent = %config.name(), "Requesting move");
    let client = LlmClient::new(config.create_llm_config()?);
    let orchestrator = MoveOrchestrator::new(client);
    let chosen = orchestrator.get_move(&state).await?;

    println!(
        "{}",
        serde_json::json!({ "move": [chosen.row(), chosen.col()] })
    );
    Ok(())
}

/// Offline inspection of the fallback ordering.
fn run_rank(state_path: Option<PathBuf>) -> Result<()> {
    let state = read_snapshot(state_path)?;
    let ranked = rank_center_first(&state.legal_moves());
    println!("{}", serde_json::to_string(&ranked)?);
    Ok(())
}

fn read_snapshot(path: Option<PathBuf>) -> Result<GameState> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(GameState::from_json(&text)?)
}

fn load_config(path: &PathBuf) -> Result<AgentConfig> {
    if path.exists() {
        Ok(AgentConfig::from_file(path)?)
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        Ok(AgentConfig::new("gomoku_agent".to_string()))
    }
}
