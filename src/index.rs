use num_traits::{NumCast, PrimInt, ToPrimitive};
use std::hash::Hash;

/// A valid graph index.
pub trait GraphIndex:
    std::fmt::Debug
    + Eq
    + Ord
    + Hash
    + Copy
    + Sized
    + From<usize>
    + std::ops::Add<usize, Output = Self>
{
    // We don't wanna have GraphIndex: Into<usize>, to make this type strong, i.e. make it hard to accidentally convert it to a different type.
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;
}

/// A valid node index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct NodeIndex<IndexType: Sized>(IndexType);

impl<IndexType: PrimInt + Hash> GraphIndex for NodeIndex<IndexType> {
    fn as_usize(self) -> usize {
        <usize as NumCast>::from(self.0).unwrap()
    }
}

impl<IndexType: PrimInt + Hash> std::fmt::Debug for NodeIndex<IndexType> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

impl<IndexType: PrimInt> From<usize> for NodeIndex<IndexType> {
    fn from(source: usize) -> Self {
        Self(<IndexType as NumCast>::from(source).unwrap())
    }
}

impl<IndexType: PrimInt + Hash> std::ops::Add<usize> for NodeIndex<IndexType> {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self::from(self.as_usize() + rhs)
    }
}

/// An iterator over a consecutive sequence of graph indices.
pub struct GraphIndices<IndexType> {
    start: IndexType,
    end: IndexType,
}

impl<RawType: ToPrimitive, IndexType: GraphIndex> From<(RawType, RawType)>
    for GraphIndices<IndexType>
{
    fn from(raw: (RawType, RawType)) -> Self {
        Self {
            start: IndexType::from(raw.0.to_usize().unwrap()),
            end: IndexType::from(raw.1.to_usize().unwrap()),
        }
    }
}

impl<IndexType: GraphIndex> Iterator for GraphIndices<IndexType> {
    type Item = IndexType;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            let result = Some(self.start);
            self.start = self.start + 1;
            result
        } else {
            None
        }
    }
}
