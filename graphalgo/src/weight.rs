use std::fmt::Debug;
use std::ops::Add;

/// A weight type usable for shortest paths and spanning trees.
///
/// `infinity()` is the sentinel for "no path" or "no connecting edge known yet".
/// Algorithms add weights with [checked_add](GraphWeight::checked_add) and treat sums that overflow
/// or reach infinity as unreachable.
pub trait GraphWeight: Ord + Add<Output = Self> + Sized + Copy + Debug {
    /// The infinity value of this type.
    fn infinity() -> Self;

    /// The zero value of this type.
    fn zero() -> Self;

    /// Returns true if this weight is the infinity sentinel.
    fn is_infinity(&self) -> bool {
        *self == Self::infinity()
    }

    /// Adds two weights, returning `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

/// Edge data that has a weight usable for shortest path and spanning tree computation.
pub trait WeightedEdgeData<WeightType: GraphWeight> {
    /// The weight of the edge.
    fn weight(&self) -> WeightType;
}

impl<WeightType: GraphWeight> WeightedEdgeData<WeightType> for WeightType {
    #[inline]
    fn weight(&self) -> WeightType {
        *self
    }
}

macro_rules! impl_graph_weight {
    ($weight_type:ty) => {
        impl GraphWeight for $weight_type {
            #[inline]
            fn infinity() -> Self {
                Self::MAX
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn checked_add(self, other: Self) -> Option<Self> {
                <$weight_type>::checked_add(self, other)
            }
        }
    };
}

impl_graph_weight!(usize);
impl_graph_weight!(isize);
impl_graph_weight!(u8);
impl_graph_weight!(i8);
impl_graph_weight!(u16);
impl_graph_weight!(i16);
impl_graph_weight!(u32);
impl_graph_weight!(i32);
impl_graph_weight!(u64);
impl_graph_weight!(i64);
impl_graph_weight!(u128);
impl_graph_weight!(i128);
