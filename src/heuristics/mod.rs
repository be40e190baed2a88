pub mod positional;
pub mod random;

mod traits;
pub use traits::*;

pub use positional::{PositionalHeuristic, ScoreTerms};
pub use random::RandomHeuristic;
