//! Placement legality and capture

use super::{Bitboard, BitboardOps, Board};
use crate::core::{
    loc::{Dir, Loc, DIRS},
    side::Side,
};

impl Board {
    /// Opposing tiles that a tile of `side` on `loc` would capture along `dir`.
    ///
    /// The ray walks over tiles of the opponent and must end on a tile of
    /// `side`. Hitting an empty cell or the edge first captures nothing, and
    /// so does an own tile directly next to `loc`.
    fn captures_along(&self, loc: Loc, side: Side, dir: Dir) -> Bitboard {
        let mut captured = Bitboard::new();

        for cell in loc.ray(dir) {
            match self.get(cell) {
                Some(owner) if owner == side => return captured,
                Some(_) => captured.set(cell, true),
                None => break,
            }
        }

        Bitboard::new()
    }

    /// Every tile captured by placing `side` on `loc`, over all eight rays
    pub fn captures(&self, loc: Loc, side: Side) -> Bitboard {
        if !self.is_empty(loc) {
            return Bitboard::new();
        }

        DIRS.into_iter()
            .fold(Bitboard::new(), |acc, dir| acc | self.captures_along(loc, side, dir))
    }

    /// Whether `side` may place a tile on `loc`
    pub fn legal_move(&self, loc: Loc, side: Side) -> bool {
        self.is_empty(loc)
            && DIRS.into_iter()
                .any(|dir| self.captures_along(loc, side, dir) != 0)
    }

    /// Board after `side` plays on `loc`. The caller guarantees legality.
    pub fn apply_move(&self, loc: Loc, side: Side) -> Board {
        debug_assert!(self.legal_move(loc, side), "illegal placement {} for {:?}", loc, side);

        let flipped = self.captures(loc, side);
        let mut next = *self;

        next.place(loc, side);
        next.tiles[side] |= flipped;
        next.tiles[!side] &= !flipped;

        next
    }

    /// `apply_move` for untrusted input: `None` when the placement is illegal
    pub fn try_move(&self, loc: Loc, side: Side) -> Option<Board> {
        self.legal_move(loc, side)
            .then(|| self.apply_move(loc, side))
    }

    /// Legal cells for `side` in row-major order
    pub fn legal_moves(&self, side: Side) -> impl Iterator<Item = Loc> + '_ {
        Loc::all().filter(move |&loc| self.legal_move(loc, side))
    }

    pub fn has_move(&self, side: Side) -> bool {
        self.legal_moves(side).next().is_some()
    }

    /// Number of cells where `side` could play
    pub fn mobility(&self, side: Side) -> usize {
        self.legal_moves(side).count()
    }
}
