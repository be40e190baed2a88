use super::bitboards::{Bitboard, BitboardOps};

use crate::core::{
    loc::{Loc, BOARD_LEN},
    side::{Side, SideArray},
};

/// Occupancy of the 8x8 grid: one bitboard per side.
///
/// `Board` is `Copy`; every move yields a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub tiles: SideArray<Bitboard>,
}

impl Default for Board {
    fn default() -> Self {
        Self::start(Side::Human)
    }
}

impl Board {
    /// Positional weight of each cell, indexed `[row][col]`
    pub const WEIGHTS: [[i32; BOARD_LEN]; BOARD_LEN] = [
        [9999, 5, 500, 200, 200, 500, 5, 9999],
        [5, 1, 50, 150, 150, 50, 1, 5],
        [500, 50, 250, 100, 100, 250, 50, 500],
        [200, 150, 100, 50, 50, 100, 150, 200],
        [200, 150, 100, 50, 50, 100, 150, 200],
        [500, 50, 250, 100, 100, 250, 50, 500],
        [5, 1, 50, 150, 150, 50, 1, 5],
        [9999, 5, 500, 200, 200, 500, 5, 9999],
    ];

    /// Seed cells of the side that moves first
    pub const FIRST_MOVER_SEEDS: [Loc; 2] = [Loc::new(3, 4), Loc::new(4, 3)];
    /// Seed cells of the side that moves second
    pub const SECOND_MOVER_SEEDS: [Loc; 2] = [Loc::new(3, 3), Loc::new(4, 4)];

    pub fn empty() -> Self {
        Self {
            tiles: SideArray::new(Bitboard::new(), Bitboard::new()),
        }
    }

    /// The four-tile opening position for a game started by `first`
    pub fn start(first: Side) -> Self {
        let mut board = Self::empty();
        for loc in Self::FIRST_MOVER_SEEDS {
            board.place(loc, first);
        }
        for loc in Self::SECOND_MOVER_SEEDS {
            board.place(loc, !first);
        }
        board
    }

    pub fn weight(loc: Loc) -> i32 {
        Self::WEIGHTS[loc.row as usize][loc.col as usize]
    }
}
