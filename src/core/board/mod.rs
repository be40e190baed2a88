//! Board representation and rules

pub mod bitboards;
pub mod definitions;
pub mod fen;
pub mod rules;

pub use bitboards::{Bitboard, BitboardOps};
pub use definitions::Board;

use super::{
    loc::Loc,
    side::Side,
};

impl Board {
    /// Owner of the tile at `loc`; `None` for an empty or off-board cell
    pub fn get(&self, loc: Loc) -> Option<Side> {
        if !loc.in_bounds() {
            return None;
        }

        Side::all()
            .into_iter()
            .find(|&side| self.tiles[side].get(loc))
    }

    pub fn is_empty(&self, loc: Loc) -> bool {
        loc.in_bounds() && self.get(loc).is_none()
    }

    /// Put a tile of `side` on `loc`, replacing whatever was there
    pub(crate) fn place(&mut self, loc: Loc, side: Side) {
        debug_assert!(loc.in_bounds());
        self.tiles[side].set(loc, true);
        self.tiles[!side].set(loc, false);
    }

    pub fn tile_count(&self, side: Side) -> usize {
        self.tiles[side].count()
    }

    pub fn occupied(&self) -> usize {
        self.occupancy().count()
    }

    pub fn occupancy(&self) -> Bitboard {
        self.tiles[Side::Human] | self.tiles[Side::Machine]
    }

    pub fn locs(&self, side: Side) -> Vec<Loc> {
        self.tiles[side].to_locs()
    }

    /// Sum of the positional weights of every tile owned by `side`
    pub fn tile_value(&self, side: Side) -> i32 {
        self.locs(side)
            .into_iter()
            .map(Board::weight)
            .sum()
    }

    /// Number of empty cells around `loc`; cells past the edge do not count
    pub fn empty_neighbors(&self, loc: Loc) -> usize {
        loc.neighbors()
            .iter()
            .filter(|&&n| self.is_empty(n))
            .count()
    }

    /// Empty cells bordering the tiles of `side`, counted once per tile
    pub fn frontier(&self, side: Side) -> usize {
        self.locs(side)
            .into_iter()
            .map(|loc| self.empty_neighbors(loc))
            .sum()
    }
}
