use crate::index::GraphIndex;
use crate::interface::{NavigableGraph, Neighbor};
use bitvector::BitVector;

/// A post-order DFS that follows the outgoing edges of each node.
pub type PostOrderForwardDfs<'a, Graph> = DfsPostOrderTraversal<'a, Graph, ForwardNeighborStrategy>;
/// A post-order DFS that follows the incoming edges of each node, i.e. a DFS in the transpose graph.
pub type PostOrderBackwardDfs<'a, Graph> =
    DfsPostOrderTraversal<'a, Graph, BackwardNeighborStrategy>;

/// A generic depth first postorder graph traversal.
/// The traversal is generic over the graph implementation and the direction of the search (`NeighborStrategy`).
///
/// Instead of recursing, the traversal keeps one frame per node on the current DFS path in a heap-allocated stack.
/// A frame holds the node and its partially consumed neighbor iterator, so the depth of the search is only bounded by memory.
/// Neighbors are explored in the order the graph returns them.
///
/// The set of visited nodes is kept across [continue_traversal_from](DfsPostOrderTraversal::continue_traversal_from) calls,
/// such that a sequence of starts explores each node at most once.
pub struct DfsPostOrderTraversal<
    'a,
    Graph: NavigableGraph<'a>,
    NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
> {
    graph: &'a Graph,
    stack: Vec<(Graph::NodeIndex, NeighborStrategy::Iterator)>,
    visited: BitVector,
}

impl<'a, Graph: NavigableGraph<'a>, NeighborStrategy: TraversalNeighborStrategy<'a, Graph>>
    DfsPostOrderTraversal<'a, Graph, NeighborStrategy>
{
    /// Creates a new traversal that operates on the given graph, starting from the given node.
    pub fn new(graph: &'a Graph, start: Graph::NodeIndex) -> Self {
        let mut traversal = Self::new_without_start(graph);
        traversal.continue_traversal_from(start);
        traversal
    }

    /// Creates a new traversal that operates on the given graph.
    /// There is no starting node given, and to start the search, [continue_traversal_from](DfsPostOrderTraversal::continue_traversal_from) needs to be used.
    pub fn new_without_start(graph: &'a Graph) -> Self {
        Self {
            graph,
            stack: Vec::new(),
            visited: BitVector::new(graph.node_count()),
        }
    }

    /// Continues the traversal from the given node without resetting the visited nodes.
    /// Returns `false` and does nothing if the node was already visited.
    ///
    /// Must only be called once the previous search is exhausted.
    pub fn continue_traversal_from(&mut self, start: Graph::NodeIndex) -> bool {
        debug_assert!(self.stack.is_empty());
        if self.is_visited(start) {
            return false;
        }

        self.visited.insert(start.as_usize());
        self.stack
            .push((start, NeighborStrategy::neighbor_iterator(self.graph, start)));
        true
    }

    /// Returns true if the given node was reached by this traversal.
    pub fn is_visited(&self, node: Graph::NodeIndex) -> bool {
        self.visited.contains(node.as_usize())
    }
}

impl<'a, Graph: NavigableGraph<'a>, NeighborStrategy: TraversalNeighborStrategy<'a, Graph>> Iterator
    for DfsPostOrderTraversal<'a, Graph, NeighborStrategy>
{
    type Item = Graph::NodeIndex;

    /// Computes and returns the next node in depth-first search postorder.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, neighbors) = self.stack.last_mut()?;
            let node = *node;
            let visited = &self.visited;
            let unvisited_neighbor = neighbors
                .map(|neighbor| neighbor.node_id)
                .find(|neighbor| !visited.contains(neighbor.as_usize()));

            if let Some(neighbor) = unvisited_neighbor {
                self.visited.insert(neighbor.as_usize());
                let neighbor_iterator = NeighborStrategy::neighbor_iterator(self.graph, neighbor);
                self.stack.push((neighbor, neighbor_iterator));
            } else {
                self.stack.pop();
                return Some(node);
            }
        }
    }
}

/// A type that defines the strategy for computing the neighborhood of a node.
pub trait TraversalNeighborStrategy<'a, Graph: NavigableGraph<'a>> {
    /// The iterator type used to iterate over the neighbors of a node.
    type Iterator: Iterator<Item = Neighbor<Graph::NodeIndex, Graph::EdgeIndex>>;

    /// Returns an iterator over the neighbors of a given node.
    fn neighbor_iterator(graph: &'a Graph, node: Graph::NodeIndex) -> Self::Iterator;
}

/// A neighbor strategy that traverses all outgoing edges of a node.
pub struct ForwardNeighborStrategy;

impl<'a, Graph: NavigableGraph<'a>> TraversalNeighborStrategy<'a, Graph>
    for ForwardNeighborStrategy
{
    type Iterator = Graph::OutNeighbors;

    fn neighbor_iterator(graph: &'a Graph, node: Graph::NodeIndex) -> Self::Iterator {
        graph.out_neighbors(node)
    }
}

/// A neighbor strategy that traverses all incoming edges of a node.
pub struct BackwardNeighborStrategy;

impl<'a, Graph: NavigableGraph<'a>> TraversalNeighborStrategy<'a, Graph>
    for BackwardNeighborStrategy
{
    type Iterator = Graph::InNeighbors;

    fn neighbor_iterator(graph: &'a Graph, node: Graph::NodeIndex) -> Self::Iterator {
        graph.in_neighbors(node)
    }
}
