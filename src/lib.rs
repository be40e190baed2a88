//! Reversi - rules engine and exhaustive minimax player for Othello

pub mod ai;
pub mod core;
pub mod engine;
pub mod heuristics;
pub mod shell;
pub mod utils;

// Re-export commonly used items
pub use ai::{machine_move, search, SearchResult};
pub use core::{Board, GameConfig, GameState, Loc, MoveFault, Outcome, Side};
pub use engine::Engine;
