//! Move selection by exhaustive minimax
pub mod node;
pub mod search;

pub use node::SearchNode;
pub use search::{apply_result, machine_move, search, SearchResult, SearchTree};
