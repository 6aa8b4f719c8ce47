//! Board analysis: pattern scanning, move ranking, and threat summaries.

mod analyzer;
mod ranker;
mod scanner;

pub use analyzer::{BoardAnalysis, ThreatSummary, analyze};
pub use ranker::rank_center_first;
pub use scanner::{find_immediate_win, has_open_three, max_chain};
