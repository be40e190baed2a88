//! Bitboards
use crate::core::loc::{Loc, BOARD_SIZE};
use crate::core::convert::FromIndex;

/// One bit per cell, bit `loc.index()` for `loc`
pub type Bitboard = u64;

pub trait BitboardOps {
    fn new() -> Self;
    fn to_locs(self) -> Vec<Loc>;

    fn get(&self, loc: Loc) -> bool;
    fn set(&mut self, loc: Loc, value: bool);
    fn pop(&mut self) -> Option<Loc>;
    fn count(&self) -> usize;
}

impl BitboardOps for Bitboard {
    fn new() -> Self { 0 }

    fn to_locs(mut self) -> Vec<Loc> {
        let mut locs = Vec::with_capacity(self.count());
        while let Some(loc) = self.pop() {
            locs.push(loc);
        }
        locs
    }

    fn get(&self, loc: Loc) -> bool {
        self & (1u64 << loc.index()) != 0
    }

    fn set(&mut self, loc: Loc, value: bool) {
        if value {
            *self |= 1u64 << loc.index();
        } else {
            *self &= !(1u64 << loc.index());
        }
    }

    /// Removes and returns the lowest set cell, i.e. the first in row-major order
    fn pop(&mut self) -> Option<Loc> {
        if *self == 0 {
            return None;
        }

        let idx = self.trailing_zeros() as usize;
        *self &= *self - 1;

        debug_assert!(idx < BOARD_SIZE);
        Loc::from_index(idx).ok()
    }

    fn count(&self) -> usize {
        self.count_ones() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_count() {
        let mut bb = Bitboard::new();
        bb.set(Loc::new(3, 4), true);
        bb.set(Loc::new(7, 7), true);

        assert!(bb.get(Loc::new(3, 4)));
        assert!(!bb.get(Loc::new(4, 3)));
        assert_eq!(bb.count(), 2);

        bb.set(Loc::new(3, 4), false);
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_to_locs_row_major() {
        let mut bb = Bitboard::new();
        bb.set(Loc::new(5, 0), true);
        bb.set(Loc::new(0, 7), true);
        bb.set(Loc::new(0, 2), true);

        assert_eq!(
            bb.to_locs(),
            vec![Loc::new(0, 2), Loc::new(0, 7), Loc::new(5, 0)]
        );
    }
}
