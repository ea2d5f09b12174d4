use crate::index::GraphIndex;
use crate::interface::{Edge, GraphBase};
use crate::weight::GraphWeight;

/// Kruskal's algorithm over a disjoint set.
pub mod kruskal;
/// Prim's algorithm with a lazily pruned heap.
pub mod prim;

pub use kruskal::Kruskal;
pub use prim::Prim;

/// A minimum spanning forest of an undirected weighted graph.
///
/// Each edge is stored with `from_node <= to_node`.
/// If the graph was not connected, the forest has fewer than `node_count - 1` edges.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MinimumSpanningForest<NodeIndex, WeightType> {
    total_weight: WeightType,
    edges: Vec<Edge<NodeIndex>>,
}

impl<NodeIndex: GraphIndex, WeightType: GraphWeight> MinimumSpanningForest<NodeIndex, WeightType> {
    /// Creates a forest from its edges and their summed weight.
    pub fn new(total_weight: WeightType, edges: Vec<Edge<NodeIndex>>) -> Self {
        Self {
            total_weight,
            edges,
        }
    }

    /// The sum of the weights of all selected edges.
    pub fn total_weight(&self) -> WeightType {
        self.total_weight
    }

    /// The selected edges.
    pub fn edges(&self) -> &[Edge<NodeIndex>] {
        &self.edges
    }

    /// Returns an iterator over the selected edges.
    pub fn iter(&self) -> impl '_ + Iterator<Item = &Edge<NodeIndex>> {
        self.edges.iter()
    }

    /// The number of selected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if this forest is a single tree covering a graph with `node_count` nodes.
    pub fn is_spanning_tree(&self, node_count: usize) -> bool {
        self.missing_edge_count(node_count) == 0
    }

    /// Returns the amount of edges missing for this forest to be a spanning tree of a graph with `node_count` nodes.
    pub fn missing_edge_count(&self, node_count: usize) -> usize {
        node_count.saturating_sub(1).saturating_sub(self.edges.len())
    }
}

impl<'a, NodeIndex, WeightType> IntoIterator for &'a MinimumSpanningForest<NodeIndex, WeightType> {
    type Item = &'a Edge<NodeIndex>;
    type IntoIter = std::slice::Iter<'a, Edge<NodeIndex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// An algorithm computing a minimum spanning forest of an undirected weighted graph.
pub trait MinimumSpanningForestAlgorithm<Graph: GraphBase, WeightType: GraphWeight> {
    /// Computes a minimum spanning forest of the given graph.
    fn compute_minimum_spanning_forest(
        &self,
        graph: &Graph,
    ) -> MinimumSpanningForest<Graph::NodeIndex, WeightType>;
}
