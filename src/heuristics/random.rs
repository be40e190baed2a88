use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{core::Board, utils::make_rng};

use super::Heuristic;

/// Uniform noise in `[-1, 1)`; a baseline opponent that ignores the board
pub struct RandomHeuristic {
    rng: StdRng,
}

impl RandomHeuristic {
    pub fn new() -> Self {
        Self { rng: make_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for RandomHeuristic {
    fn score(&mut self, _board: &Board) -> f64 {
        self.rng.random_range(-1.0..1.0)
    }
}
