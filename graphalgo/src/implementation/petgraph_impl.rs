use crate::index::{GraphIndex, GraphIndices};
use crate::interface::{
    Edge, GraphBase, ImmutableGraphContainer, MutableGraphContainer, NavigableGraph, Neighbor,
};
use num_traits::{PrimInt, ToPrimitive};
use petgraph::graph::Edges;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction, EdgeType, Undirected};

pub use petgraph;

/// A graph with a fixed set of nodes, backed by a petgraph `Graph`.
///
/// With `Ty = Undirected`, each edge is a neighbor relation in both directions with the same edge data.
/// With `Ty = Directed`, the incoming neighbors of a node are its neighbors in the transpose graph.
/// Petgraph keeps the incoming adjacency up to date with each added edge, so the transpose never needs to be built separately.
#[derive(Clone)]
pub struct PetGraph<EdgeData, Ty: EdgeType> {
    graph: petgraph::Graph<(), EdgeData, Ty, usize>,
}

/// An undirected graph, used with integer edge weights for shortest paths and spanning trees.
pub type PetUndirectedGraph<EdgeData> = PetGraph<EdgeData, Undirected>;
/// A directed graph with transpose access, used for strongly connected components.
pub type PetDirectedGraph<EdgeData> = PetGraph<EdgeData, Directed>;

/// Creates a graph with `node_count` nodes and no edges.
/// The nodes are indexed `0..node_count`.
pub fn with_node_count<EdgeData, Ty: EdgeType>(node_count: usize) -> PetGraph<EdgeData, Ty> {
    let mut graph = petgraph::Graph::with_capacity(node_count, 0);
    for _ in 0..node_count {
        graph.add_node(());
    }
    PetGraph { graph }
}

impl<EdgeData, Ty: EdgeType> GraphBase for PetGraph<EdgeData, Ty> {
    type NodeData = ();
    type EdgeData = EdgeData;
    type NodeIndex = crate::index::NodeIndex<usize>;
    type OptionalNodeIndex = crate::index::OptionalNodeIndex<usize>;
    type EdgeIndex = crate::index::EdgeIndex<usize>;
}

impl<EdgeData, Ty: EdgeType> ImmutableGraphContainer for PetGraph<EdgeData, Ty> {
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex> {
        GraphIndices::from((0, self.graph.node_count()))
    }

    fn edge_indices(&self) -> GraphIndices<Self::EdgeIndex> {
        GraphIndices::from((0, self.graph.edge_count()))
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn edge_data(&self, edge_id: Self::EdgeIndex) -> &Self::EdgeData {
        &self.graph[petgraph::graph::EdgeIndex::from(edge_id)]
    }

    fn edge_endpoints(&self, edge_id: Self::EdgeIndex) -> Edge<Self::NodeIndex> {
        let edge = &self.graph.raw_edges()[edge_id.as_usize()];
        Edge {
            from_node: edge.source().index().into(),
            to_node: edge.target().index().into(),
        }
    }
}

impl<EdgeData, Ty: EdgeType> MutableGraphContainer for PetGraph<EdgeData, Ty> {
    fn add_edge(
        &mut self,
        from: Self::NodeIndex,
        to: Self::NodeIndex,
        edge_data: EdgeData,
    ) -> Self::EdgeIndex {
        debug_assert!(
            self.contains_node_index(from) && self.contains_node_index(to),
            "Edge ({:?}, {:?}) leaves the node range 0..{}",
            from,
            to,
            self.node_count()
        );
        self.graph
            .add_edge(from.into(), to.into(), edge_data)
            .index()
            .into()
    }
}

/// An iterator over the neighbors of a node in a [PetGraph].
///
/// Petgraph reports each edge with its original orientation, so the neighbor is whichever endpoint is not the node itself.
/// Neighbors are returned in reverse order of edge insertion.
pub struct PetgraphNeighbors<'a, EdgeData, Ty: EdgeType> {
    edges: Edges<'a, EdgeData, Ty, usize>,
    node: petgraph::graph::NodeIndex<usize>,
}

impl<'a, EdgeData, Ty: EdgeType> Iterator for PetgraphNeighbors<'a, EdgeData, Ty> {
    type Item = Neighbor<crate::index::NodeIndex<usize>, crate::index::EdgeIndex<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node;
        self.edges.next().map(|edge| {
            let neighbor = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            Neighbor {
                edge_id: edge.id().index().into(),
                node_id: neighbor.index().into(),
            }
        })
    }
}

impl<'a, EdgeData: 'a, Ty: EdgeType + 'a> NavigableGraph<'a> for PetGraph<EdgeData, Ty> {
    type OutNeighbors = PetgraphNeighbors<'a, EdgeData, Ty>;
    type InNeighbors = PetgraphNeighbors<'a, EdgeData, Ty>;

    fn out_neighbors(&'a self, node_id: Self::NodeIndex) -> Self::OutNeighbors {
        debug_assert!(self.contains_node_index(node_id));
        let node = node_id.into();
        PetgraphNeighbors {
            edges: self.graph.edges_directed(node, Direction::Outgoing),
            node,
        }
    }

    fn in_neighbors(&'a self, node_id: Self::NodeIndex) -> Self::InNeighbors {
        debug_assert!(self.contains_node_index(node_id));
        let node = node_id.into();
        PetgraphNeighbors {
            edges: self.graph.edges_directed(node, Direction::Incoming),
            node,
        }
    }
}

impl<IndexType: PrimInt + ToPrimitive + std::hash::Hash + petgraph::graph::IndexType>
    From<crate::index::NodeIndex<IndexType>> for petgraph::graph::NodeIndex<IndexType>
{
    fn from(index: crate::index::NodeIndex<IndexType>) -> Self {
        petgraph::graph::NodeIndex::new(index.as_usize())
    }
}

impl<IndexType: PrimInt + ToPrimitive + std::hash::Hash + petgraph::graph::IndexType>
    From<crate::index::EdgeIndex<IndexType>> for petgraph::graph::EdgeIndex<IndexType>
{
    fn from(index: crate::index::EdgeIndex<IndexType>) -> Self {
        petgraph::graph::EdgeIndex::new(index.as_usize())
    }
}
