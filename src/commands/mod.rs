//! Command implementations

pub mod analyze;
pub mod simple;
pub mod solve;
pub mod stats;

pub use analyze::{AnalysisResult, analyze_word};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use stats::{
    SimulationStatistics, StatsConfig, install_opening, print_statistics, run_stats,
    select_answers,
};
