//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LLM-backed Gomoku move agent.
#[derive(Debug, Parser)]
#[command(name = "gomoku_agent", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose a move for a board snapshot via the configured LLM.
    Move {
        /// Path to the agent TOML config.
        #[arg(short, long, default_value = "agent.toml")]
        config: PathBuf,

        /// Board snapshot JSON file (reads stdin when omitted).
        #[arg(short, long)]
        state: Option<PathBuf>,
    },

    /// Print the ranked legal moves for a snapshot without calling the LLM.
    Rank {
        /// Board snapshot JSON file (reads stdin when omitted).
        #[arg(short, long)]
        state: Option<PathBuf>,
    },
}
