//! Command implementations

pub mod evaluate;
pub mod simple;
pub mod simulate;

pub use evaluate::{EvaluateResult, evaluate_words};
pub use simple::{LineAction, handle_line, run_simple};
pub use simulate::{GameRecord, SimulationConfig, SimulationResult, play_game, run_simulation};
