mod engine;
mod options;
mod search;

pub use engine::Engine;
pub use options::{EngineOptions, HeuristicType};
pub use search::timed_search;
