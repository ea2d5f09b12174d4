use num_traits::{NumCast, PrimInt, ToPrimitive};
use std::hash::Hash;
use std::marker::PhantomData;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid node index.
pub struct NodeIndex<IndexType: Sized>(IndexType);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid edge index.
pub struct EdgeIndex<IndexType: Sized>(IndexType);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A node index that can be `None`.
/// The `None` variant is stored as `IndexType::max_value()`, which keeps e.g. parent arrays as small as an array of plain indices.
pub struct OptionalNodeIndex<IndexType: Sized>(IndexType);

/// A valid graph index.
pub trait GraphIndex:
    std::fmt::Debug + Eq + Ord + Hash + Copy + Sized + From<usize> + std::ops::Add<usize, Output = Self>
{
    // No `Into<usize>`, so that indices of different kinds cannot be mixed up by accident.
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;
}

macro_rules! impl_graph_index {
    ($GraphIndexType:ident) => {
        impl<IndexType: PrimInt + Hash> GraphIndex for $GraphIndexType<IndexType> {
            fn as_usize(self) -> usize {
                <usize as NumCast>::from(self.0).unwrap()
            }
        }

        impl<IndexType: PrimInt + Hash> std::fmt::Debug for $GraphIndexType<IndexType> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_usize())
            }
        }

        impl<IndexType: PrimInt> From<usize> for $GraphIndexType<IndexType> {
            fn from(source: usize) -> Self {
                let source = <IndexType as NumCast>::from(source).unwrap();
                debug_assert!(source != IndexType::max_value());
                Self(source)
            }
        }

        impl<IndexType: PrimInt + Hash> std::ops::Add<usize> for $GraphIndexType<IndexType> {
            type Output = Self;

            fn add(self, rhs: usize) -> Self::Output {
                Self::from(self.as_usize() + rhs)
            }
        }

        impl<T, IndexType: PrimInt + Hash> std::ops::Index<$GraphIndexType<IndexType>> for Vec<T> {
            type Output = T;

            fn index(&self, index: $GraphIndexType<IndexType>) -> &Self::Output {
                &self[index.as_usize()]
            }
        }

        impl<T, IndexType: PrimInt + Hash> std::ops::IndexMut<$GraphIndexType<IndexType>>
            for Vec<T>
        {
            fn index_mut(&mut self, index: $GraphIndexType<IndexType>) -> &mut Self::Output {
                &mut self[index.as_usize()]
            }
        }
    };
}

impl_graph_index!(NodeIndex);
impl_graph_index!(EdgeIndex);

impl<IndexType: PrimInt + Hash> OptionalNodeIndex<IndexType> {
    /// Returns a new `OptionalNodeIndex` that is marked as invalid.
    pub fn new_none() -> Self {
        Self(IndexType::max_value())
    }

    /// Get this index as `usize`, but return `None` if this index is marked as invalid.
    pub fn as_usize(self) -> Option<usize> {
        if self.0 != IndexType::max_value() {
            Some(<usize as NumCast>::from(self.0).unwrap())
        } else {
            None
        }
    }

    /// Returns `true` if the index is `None`.
    pub fn is_none(self) -> bool {
        self.as_usize().is_none()
    }

    /// Returns `true` if the index is `Some`.
    pub fn is_some(self) -> bool {
        self.as_usize().is_some()
    }
}

impl<IndexType: PrimInt + Hash> Default for OptionalNodeIndex<IndexType> {
    fn default() -> Self {
        Self::new_none()
    }
}

impl<IndexType: PrimInt + Hash> std::fmt::Debug for OptionalNodeIndex<IndexType> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(value) = self.as_usize() {
            write!(f, "{}", value)
        } else {
            write!(f, "None")
        }
    }
}

impl<IndexType: PrimInt + Hash> From<NodeIndex<IndexType>> for OptionalNodeIndex<IndexType> {
    fn from(source: NodeIndex<IndexType>) -> Self {
        Self(source.0)
    }
}

impl<IndexType: PrimInt + Hash> From<Option<NodeIndex<IndexType>>>
    for OptionalNodeIndex<IndexType>
{
    fn from(source: Option<NodeIndex<IndexType>>) -> Self {
        source.map(Self::from).unwrap_or_else(Self::new_none)
    }
}

impl<IndexType: PrimInt + Hash> From<OptionalNodeIndex<IndexType>>
    for Option<NodeIndex<IndexType>>
{
    fn from(source: OptionalNodeIndex<IndexType>) -> Self {
        source.as_usize().map(NodeIndex::from)
    }
}

/// An iterator over a consecutive sequence of graph indices.
pub struct GraphIndices<IndexType> {
    start: IndexType,
    end: IndexType,
    index_type: PhantomData<IndexType>,
}

impl<RawType: ToPrimitive, IndexType: GraphIndex> From<(RawType, RawType)>
    for GraphIndices<IndexType>
{
    fn from(raw: (RawType, RawType)) -> Self {
        Self {
            start: IndexType::from(raw.0.to_usize().unwrap()),
            end: IndexType::from(raw.1.to_usize().unwrap()),
            index_type: Default::default(),
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

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.as_usize() - self.start.as_usize();
        (remaining, Some(remaining))
    }
}

impl<IndexType: GraphIndex> DoubleEndedIterator for GraphIndices<IndexType> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end = IndexType::from(self.end.as_usize() - 1);
            Some(self.end)
        } else {
            None
        }
    }
}

impl<IndexType: GraphIndex> ExactSizeIterator for GraphIndices<IndexType> {}

#[cfg(test)]
mod tests {
    use super::{GraphIndex, GraphIndices, NodeIndex, OptionalNodeIndex};

    #[test]
    fn test_optional_node_index_round_trip_through_option() {
        let some = OptionalNodeIndex::<usize>::from(NodeIndex::from(7));
        assert!(some.is_some());
        assert_eq!(Option::<NodeIndex<usize>>::from(some), Some(NodeIndex::from(7)));

        let none = OptionalNodeIndex::<usize>::default();
        assert!(none.is_none());
        assert_eq!(Option::<NodeIndex<usize>>::from(none), None);
        assert_eq!(format!("{:?}", none), "None");
    }

    #[test]
    fn test_graph_indices_iterate_both_ways() {
        let indices: GraphIndices<NodeIndex<usize>> = GraphIndices::from((0, 4));
        assert_eq!(indices.len(), 4);
        assert_eq!(
            indices.map(GraphIndex::as_usize).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );

        let indices: GraphIndices<NodeIndex<usize>> = GraphIndices::from((1, 3));
        assert_eq!(
            indices.rev().map(GraphIndex::as_usize).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }

    #[test]
    fn test_vec_indexing_by_node_index() {
        let mut values = vec![10, 20, 30];
        let index = NodeIndex::<usize>::from(1);
        values[index] += 1;
        assert_eq!(values[index], 21);
    }
}
