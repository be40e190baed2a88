use crate::ai::{search, SearchResult};
use crate::core::GameState;
use crate::heuristics::Heuristic;

use std::time::Instant;
use tracing::info;

/// Search the machine's reply to `state` and report how long it took, in seconds
pub fn timed_search<H: Heuristic>(
    state: &GameState,
    level: usize,
    heuristic: &mut H,
) -> (SearchResult, f64) {
    let start_time = Instant::now();

    let result = search(&state.board, level, heuristic);
    let elapsed = start_time.elapsed().as_secs_f64();

    info!(
        level,
        nodes = result.nodes_explored,
        eval = ?result.eval,
        best = %result.best_move.map_or_else(|| "pass".to_string(), |loc| loc.to_string()),
        elapsed,
        "search finished"
    );

    (result, elapsed)
}
