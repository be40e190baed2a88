//! Weighted-table evaluation with mobility and frontier terms.
//!
//! The weights are lopsided: human tiles and human mobility count more
//! heavily than the machine's.

use crate::core::{Board, Side, BOARD_SIZE};

use super::Heuristic;

/// The three terms of a positional evaluation, before summing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTerms {
    pub tiles: f64,
    pub mobility: f64,
    pub frontier: f64,
}

impl ScoreTerms {
    pub fn total(&self) -> f64 {
        self.tiles + self.mobility + self.frontier
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalHeuristic;

impl PositionalHeuristic {
    const HUMAN_TILE_FACTOR: f64 = 1.5;

    const MACHINE_MOBILITY_FACTOR: f64 = 3.0;
    const HUMAN_MOBILITY_FACTOR: f64 = 4.0;

    const HUMAN_FRONTIER_FACTOR: f64 = 2.5;
    const MACHINE_FRONTIER_FACTOR: f64 = 3.0;

    pub fn terms(board: &Board) -> ScoreTerms {
        let occupied = board.occupied() as f64;
        debug_assert!(occupied > 0.0, "cannot score an empty board");

        let cells = BOARD_SIZE as f64;

        let tiles = board.tile_value(Side::Machine) as f64
            - Self::HUMAN_TILE_FACTOR * board.tile_value(Side::Human) as f64;

        let mobility = (cells / occupied)
            * (Self::MACHINE_MOBILITY_FACTOR * board.mobility(Side::Machine) as f64
                - Self::HUMAN_MOBILITY_FACTOR * board.mobility(Side::Human) as f64);

        let frontier = (cells / (2.0 * occupied))
            * (Self::HUMAN_FRONTIER_FACTOR * board.frontier(Side::Human) as f64
                - Self::MACHINE_FRONTIER_FACTOR * board.frontier(Side::Machine) as f64);

        ScoreTerms {
            tiles,
            mobility,
            frontier,
        }
    }

    pub fn evaluate(board: &Board) -> f64 {
        Self::terms(board).total()
    }
}

impl Heuristic for PositionalHeuristic {
    fn score(&mut self, board: &Board) -> f64 {
        Self::evaluate(board)
    }
}
