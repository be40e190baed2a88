use anyhow::{anyhow, bail, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use super::convert::{FromIndex, ToIndex};
use std::ops::{Index, IndexMut, Not};
use std::str::FromStr;

/// One of the two players. The human is side A, the machine side B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Side {
    Human,
    Machine,
}

impl Side {
    pub fn all() -> [Side; 2] {
        [Side::Human, Side::Machine]
    }

    pub fn opponent(self) -> Self {
        !self
    }

    /// Glyph used by the board rendering and the position string
    pub fn glyph(self) -> char {
        match self {
            Side::Human => 'X',
            Side::Machine => 'O',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Side::Human),
            'O' => Some(Side::Machine),
            _ => None,
        }
    }
}

impl FromIndex for Side {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid side index: {}", idx))
    }
}

impl ToIndex for Side {
    fn to_index(&self) -> Result<usize> {
        ToPrimitive::to_usize(self)
            .ok_or_else(|| anyhow!("Invalid side value"))
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" | "human" => Ok(Side::Human),
            "o" | "machine" => Ok(Side::Machine),
            _ => bail!("Unknown side: {}", s),
        }
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Side::Human => Side::Machine,
            Side::Machine => Side::Human,
        }
    }
}

/// Array indexed by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideArray<T> {
    pub values: [T; 2],
}

impl<T> SideArray<T> {
    pub const fn new(human: T, machine: T) -> Self {
        Self {
            values: [human, machine],
        }
    }

    pub fn get(&self, side: Side) -> Result<&T> {
        Ok(&self.values[side.to_index()?])
    }

    pub fn get_mut(&mut self, side: Side) -> Result<&mut T> {
        Ok(&mut self.values[side.to_index()?])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T> Index<Side> for SideArray<T> {
    type Output = T;

    fn index(&self, index: Side) -> &Self::Output {
        match index {
            Side::Human => &self.values[0],
            Side::Machine => &self.values[1],
        }
    }
}

impl<T> IndexMut<Side> for SideArray<T> {
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        match index {
            Side::Human => &mut self.values[0],
            Side::Machine => &mut self.values[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_index() {
        assert_eq!(Side::from_index(0).unwrap(), Side::Human);
        assert_eq!(Side::from_index(1).unwrap(), Side::Machine);
        assert!(Side::from_index(2).is_err());
    }

    #[test]
    fn test_side_to_index() {
        assert_eq!(Side::Human.to_index().unwrap(), 0);
        assert_eq!(Side::Machine.to_index().unwrap(), 1);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Human.opponent(), Side::Machine);
        assert_eq!(!Side::Machine, Side::Human);
    }

    #[test]
    fn test_glyphs() {
        for side in Side::all() {
            assert_eq!(Side::from_glyph(side.glyph()), Some(side));
        }
        assert_eq!(Side::from_glyph('.'), None);
        assert_eq!("o".parse::<Side>().unwrap(), Side::Machine);
        assert!("nobody".parse::<Side>().is_err());
    }

    #[test]
    fn test_side_array() {
        let mut array = SideArray::new(5, 10);

        assert_eq!(*array.get(Side::Human).unwrap(), 5);
        assert_eq!(array[Side::Machine], 10);

        *array.get_mut(Side::Human).unwrap() = 15;
        array[Side::Machine] += 1;

        let values: Vec<_> = array.iter().copied().collect();
        assert_eq!(values, vec![15, 11]);
    }
}
