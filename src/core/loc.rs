use std::{fmt::Display, ops::Add};
use anyhow::{ensure, Result};
use lazy_static::lazy_static;

use super::convert::{indexed, FromIndex, ToIndex};

pub const BOARD_LEN: usize = 8;
pub const BOARD_SIZE: usize = BOARD_LEN * BOARD_LEN;

/// A cell on the board, row 0 at the top and column 0 on the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub row: i32,
    pub col: i32,
}

impl Loc {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(&self) -> bool {
        self.row >= 0 && self.row < BOARD_LEN as i32 &&
        self.col >= 0 && self.col < BOARD_LEN as i32
    }

    /// Row-major index; only meaningful for in-bounds locations
    pub const fn index(&self) -> usize {
        (self.row as usize) * BOARD_LEN + (self.col as usize)
    }

    /// All 64 cells in row-major order
    pub fn all() -> impl Iterator<Item = Loc> {
        indexed(BOARD_SIZE)
    }

    /// In-bounds 8-neighbours of this cell
    pub fn neighbors(&self) -> &'static [Loc] {
        &NEIGHBORS[self.index()]
    }

    /// Cells along `dir`, starting next to this one and stopping at the edge
    pub fn ray(self, dir: Dir) -> impl Iterator<Item = Loc> {
        let delta = LocDelta::from(dir);
        std::iter::successors(Some(&self + &delta), move |loc| Some(loc + &delta))
            .take_while(Loc::in_bounds)
    }
}

impl FromIndex for Loc {
    fn from_index(idx: usize) -> Result<Self> {
        ensure!(idx < BOARD_SIZE, "Invalid cell index: {}", idx);
        Ok(Loc {
            row: (idx / BOARD_LEN) as i32,
            col: (idx % BOARD_LEN) as i32,
        })
    }
}

impl ToIndex for Loc {
    fn to_index(&self) -> Result<usize> {
        ensure!(self.in_bounds(), "Location off the board: {:?}", self);
        Ok(self.index())
    }
}

impl From<(i32, i32)> for Loc {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (self.col as u8 + b'a') as char, self.row + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocDelta {
    pub drow: i32,
    pub dcol: i32,
}

impl Add<&LocDelta> for &Loc {
    type Output = Loc;

    fn add(self, other: &LocDelta) -> Self::Output {
        Loc {
            row: self.row + other.drow,
            col: self.col + other.dcol,
        }
    }
}

/// The eight ray directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

pub const DIRS: [Dir; 8] = [
    Dir::N,
    Dir::NE,
    Dir::E,
    Dir::SE,
    Dir::S,
    Dir::SW,
    Dir::W,
    Dir::NW,
];

impl From<Dir> for LocDelta {
    fn from(dir: Dir) -> Self {
        match dir {
            Dir::N => LocDelta { drow: -1, dcol: 0 },
            Dir::NE => LocDelta { drow: -1, dcol: 1 },
            Dir::E => LocDelta { drow: 0, dcol: 1 },
            Dir::SE => LocDelta { drow: 1, dcol: 1 },
            Dir::S => LocDelta { drow: 1, dcol: 0 },
            Dir::SW => LocDelta { drow: 1, dcol: -1 },
            Dir::W => LocDelta { drow: 0, dcol: -1 },
            Dir::NW => LocDelta { drow: -1, dcol: -1 },
        }
    }
}

lazy_static!(
    static ref NEIGHBORS: Vec<Vec<Loc>> = Loc::all()
        .map(|loc| DIRS.into_iter()
            .map(|dir| &loc + &dir.into())
            .filter(Loc::in_bounds)
            .collect())
        .collect();
);
