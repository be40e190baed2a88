//! Conversions between typed values and dense array indices

use anyhow::Result;

pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;
}

pub trait ToIndex {
    fn to_index(&self) -> Result<usize>;
}

/// Every value of `T` whose index lies in `0..len`, in index order
pub fn indexed<T: FromIndex>(len: usize) -> impl Iterator<Item = T> {
    (0..len).filter_map(|idx| T::from_index(idx).ok())
}
