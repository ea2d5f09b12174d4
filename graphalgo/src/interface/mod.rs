//! Traits describing a graph with a fixed node set.
//!
//! `ImmutableGraphContainer` gives access to nodes, edges and edge data,
//! `MutableGraphContainer` adds edges, and `NavigableGraph` iterates neighbors, borrowing the graph for the iterator's lifetime.
//!
//! The algorithms only read graphs, so they are bounded by `StaticGraph`.
//! Graphs are filled through `MutableGraphContainer` before any algorithm runs.

use crate::index::{GraphIndex, GraphIndices};
use num_traits::PrimInt;
use std::hash::Hash;

/// The node, edge and index types of a graph.
pub trait GraphBase {
    /// Data stored per node.
    type NodeData;
    /// Data stored per edge, e.g. its weight.
    type EdgeData;
    /// Node index type.
    type NodeIndex: GraphIndex;
    /// Node index type that can also be `None`.
    type OptionalNodeIndex: Default
        + std::fmt::Debug
        + Copy
        + Eq
        + From<Self::NodeIndex>
        + From<Option<Self::NodeIndex>>
        + Into<Option<Self::NodeIndex>>;
    /// Edge index type.
    type EdgeIndex: GraphIndex;
}

/// Read access to the nodes and edges of a graph.
///
/// Nodes are indexed `0..node_count` and edges `0..edge_count`.
/// Edges are indexed in the order in which they were added.
pub trait ImmutableGraphContainer: GraphBase {
    /// All node indices, ascending.
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex>;

    /// All edge indices, in insertion order.
    fn edge_indices(&self) -> GraphIndices<Self::EdgeIndex>;

    /// True if `node_id` is below `node_count`.
    fn contains_node_index(&self, node_id: Self::NodeIndex) -> bool {
        node_id.as_usize() < self.node_count()
    }

    /// The number of nodes.
    fn node_count(&self) -> usize;

    /// The number of edges.
    fn edge_count(&self) -> usize;

    /// The data of the given edge.
    /// Panics on an unknown edge.
    fn edge_data(&self, edge_id: Self::EdgeIndex) -> &Self::EdgeData;

    /// Returns the endpoints of an edge, in the order they were given when adding the edge.
    fn edge_endpoints(&self, edge_id: Self::EdgeIndex) -> Edge<Self::NodeIndex>;

    /// True if the graph has no nodes, and hence no edges.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

/// Write access for inserting edges between existing nodes.
///
/// The node set is fixed when the graph is created, see e.g. [with_node_count](crate::implementation::petgraph_impl::with_node_count).
pub trait MutableGraphContainer: ImmutableGraphContainer {
    /// Inserts an edge from `from` to `to` and returns its index.
    /// Both endpoints must be nodes of the graph, which is only checked in debug builds.
    fn add_edge(
        &mut self,
        from: Self::NodeIndex,
        to: Self::NodeIndex,
        edge_data: Self::EdgeData,
    ) -> Self::EdgeIndex;
}

/// Neighbor iteration.
///
/// In an undirected graph, the outgoing and the incoming neighbors of a node are the same.
/// In a directed graph, the incoming neighbors of a node are its outgoing neighbors in the transpose graph.
pub trait NavigableGraph<'a>: ImmutableGraphContainer + Sized {
    /// Iterator over outgoing neighbors.
    type OutNeighbors: Iterator<Item = Neighbor<Self::NodeIndex, Self::EdgeIndex>>;
    /// Iterator over incoming neighbors.
    type InNeighbors: Iterator<Item = Neighbor<Self::NodeIndex, Self::EdgeIndex>>;

    /// Returns an iterator over the outgoing neighbors of `node_id`.
    fn out_neighbors(&'a self, node_id: Self::NodeIndex) -> Self::OutNeighbors;

    /// Returns an iterator over the incoming neighbors of `node_id`.
    fn in_neighbors(&'a self, node_id: Self::NodeIndex) -> Self::InNeighbors;

    /// The number of outgoing edges of `node_id`, counting parallel edges.
    fn out_degree(&'a self, node_id: Self::NodeIndex) -> usize {
        self.out_neighbors(node_id).count()
    }

    /// The number of incoming edges of `node_id`, counting parallel edges.
    fn in_degree(&'a self, node_id: Self::NodeIndex) -> usize {
        self.in_neighbors(node_id).count()
    }
}

/// Shorthand bound for read-only graphs.
pub trait StaticGraph: ImmutableGraphContainer + for<'a> NavigableGraph<'a> {}
impl<T: ImmutableGraphContainer + for<'a> NavigableGraph<'a>> StaticGraph for T {}

/// The two endpoints of an edge.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Edge<NodeIndex> {
    /// Tail.
    pub from_node: NodeIndex,
    /// Head.
    pub to_node: NodeIndex,
}

impl<NodeIndex: Ord + Copy> Edge<NodeIndex> {
    /// Returns this edge with its endpoints ordered such that `from_node <= to_node`.
    /// This is the canonical representation of an undirected edge.
    pub fn canonical(self) -> Self {
        Self {
            from_node: self.from_node.min(self.to_node),
            to_node: self.from_node.max(self.to_node),
        }
    }
}

impl<IndexType: PrimInt + Hash> Edge<crate::index::NodeIndex<IndexType>> {
    /// Returns the endpoints of this edge as `usize` pair.
    pub fn as_usize_pair(&self) -> (usize, usize) {
        (self.from_node.as_usize(), self.to_node.as_usize())
    }
}

/// A neighbor together with the edge leading to it.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Neighbor<NodeIndex, EdgeIndex> {
    /// The edge leading to the neighbor.
    pub edge_id: EdgeIndex,
    /// The neighbor itself.
    pub node_id: NodeIndex,
}
