use crate::core::Board;

/// Static evaluation of a board. Larger values favour the machine.
pub trait Heuristic {
    /// Defined for boards with at least one tile
    fn score(&mut self, board: &Board) -> f64;
}

impl<H: Heuristic + ?Sized> Heuristic for &mut H {
    fn score(&mut self, board: &Board) -> f64 {
        (**self).score(board)
    }
}
