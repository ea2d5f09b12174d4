use crate::algo::traversal::{PostOrderBackwardDfs, PostOrderForwardDfs};
use crate::interface::StaticGraph;

/// The strongly connected components of a directed graph.
/// Each node of the graph is in exactly one component.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StronglyConnectedComponents<NodeIndex> {
    components: Vec<Vec<NodeIndex>>,
}

impl<NodeIndex: Ord> StronglyConnectedComponents<NodeIndex> {
    /// Sorts the nodes of each component ascending, and the components by their smallest node.
    pub fn canonicalise(&mut self) {
        for component in &mut self.components {
            component.sort_unstable();
        }
        // Components are disjoint and non-empty, so their first nodes are distinct.
        self.components
            .sort_unstable_by(|a, b| a.first().cmp(&b.first()));
    }

    /// Returns the amount of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the graph had no nodes.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns an iterator over the components, each given as a slice of its nodes.
    pub fn iter(&self) -> impl '_ + Iterator<Item = &[NodeIndex]> {
        self.components.iter().map(Vec::as_slice)
    }
}

/// Computes the strongly connected components of a graph with Kosaraju's algorithm.
///
/// The first pass records the nodes in the order in which a forward depth first search finishes them,
/// starting a new search from each unvisited node in ascending order.
/// The second pass searches the transpose graph from the nodes in reverse finishing order,
/// and each search collects exactly one component.
///
/// Components are returned in the order they are found, which is a topological order of the condensation.
pub fn decompose_strongly_connected_components<Graph: StaticGraph>(
    graph: &Graph,
) -> StronglyConnectedComponents<Graph::NodeIndex> {
    let mut finishing_order = Vec::with_capacity(graph.node_count());
    let mut forward_dfs = PostOrderForwardDfs::new_without_start(graph);
    for node in graph.node_indices() {
        if forward_dfs.continue_traversal_from(node) {
            finishing_order.extend(forward_dfs.by_ref());
        }
    }
    debug_assert_eq!(finishing_order.len(), graph.node_count());

    let mut components = Vec::new();
    let mut backward_dfs = PostOrderBackwardDfs::new_without_start(graph);
    for &node in finishing_order.iter().rev() {
        if backward_dfs.continue_traversal_from(node) {
            components.push(backward_dfs.by_ref().collect());
        }
    }

    StronglyConnectedComponents { components }
}
