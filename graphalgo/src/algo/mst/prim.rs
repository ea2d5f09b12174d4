use crate::algo::mst::{MinimumSpanningForest, MinimumSpanningForestAlgorithm};
use crate::index::GraphIndex;
use crate::interface::{Edge, StaticGraph};
use crate::weight::{GraphWeight, WeightedEdgeData};
use bitvector::BitVector;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Prim's algorithm, growing a single tree from a start node.
///
/// Only the connected component of the start node is spanned.
/// The resulting edges are sorted.
/// An edge of weight `WeightType::infinity()` is still a valid connecting edge.
#[derive(Debug, Clone, Copy)]
pub struct Prim<NodeIndex> {
    start: NodeIndex,
}

impl<NodeIndex> Prim<NodeIndex> {
    /// Prim's algorithm starting from `start`.
    pub fn new(start: NodeIndex) -> Self {
        Self { start }
    }
}

impl<
        WeightType: GraphWeight,
        EdgeData: WeightedEdgeData<WeightType>,
        Graph: StaticGraph<EdgeData = EdgeData>,
    > MinimumSpanningForestAlgorithm<Graph, WeightType> for Prim<Graph::NodeIndex>
{
    fn compute_minimum_spanning_forest(
        &self,
        graph: &Graph,
    ) -> MinimumSpanningForest<Graph::NodeIndex, WeightType> {
        let node_count = graph.node_count();
        let mut settled = BitVector::new(node_count);
        let mut connecting_weights = vec![WeightType::infinity(); node_count];
        let mut parents = vec![Graph::OptionalNodeIndex::default(); node_count];
        let mut queue = BinaryHeap::new();
        let mut total_weight = WeightType::zero();
        let mut edges = Vec::new();

        connecting_weights[self.start.as_usize()] = WeightType::zero();
        queue.push(Reverse((WeightType::zero(), self.start)));

        while let Some(Reverse((weight, node))) = queue.pop() {
            if settled.contains(node.as_usize()) {
                continue;
            }
            settled.insert(node.as_usize());
            debug_assert_eq!(weight, connecting_weights[node.as_usize()]);
            total_weight = total_weight + weight;

            let parent: Option<Graph::NodeIndex> = parents[node.as_usize()].into();
            if let Some(parent) = parent {
                edges.push(
                    Edge {
                        from_node: parent,
                        to_node: node,
                    }
                    .canonical(),
                );
            }

            for neighbor in graph.out_neighbors(node) {
                let neighbor_id = neighbor.node_id;
                if settled.contains(neighbor_id.as_usize()) {
                    continue;
                }

                let edge_weight = graph.edge_data(neighbor.edge_id).weight();
                let parent: Option<Graph::NodeIndex> = parents[neighbor_id.as_usize()].into();
                if parent.is_none() || edge_weight < connecting_weights[neighbor_id.as_usize()] {
                    connecting_weights[neighbor_id.as_usize()] = edge_weight;
                    parents[neighbor_id.as_usize()] = node.into();
                    queue.push(Reverse((edge_weight, neighbor_id)));
                }
            }
        }

        edges.sort();
        MinimumSpanningForest::new(total_weight, edges)
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::mst::{MinimumSpanningForest, MinimumSpanningForestAlgorithm, Prim};
    use crate::implementation::petgraph_impl::{self, PetUndirectedGraph};
    use crate::index::NodeIndex;
    use crate::interface::MutableGraphContainer;

    #[test]
    fn test_prim_prefers_lighter_parallel_edge() {
        let mut graph: PetUndirectedGraph<u32> = petgraph_impl::with_node_count(3);
        graph.add_edge(0.into(), 1.into(), 8);
        graph.add_edge(1.into(), 0.into(), 2);
        graph.add_edge(1.into(), 2.into(), 4);
        graph.add_edge(0.into(), 2.into(), 9);

        let forest: MinimumSpanningForest<NodeIndex<usize>, u32> =
            Prim::new(2.into()).compute_minimum_spanning_forest(&graph);
        assert_eq!(forest.total_weight(), 6);
        let edges: Vec<_> = forest.iter().map(|edge| edge.as_usize_pair()).collect();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_prim_from_isolated_node_selects_nothing() {
        let mut graph: PetUndirectedGraph<u32> = petgraph_impl::with_node_count(3);
        graph.add_edge(0.into(), 1.into(), 1);

        let forest: MinimumSpanningForest<NodeIndex<usize>, u32> =
            Prim::new(2.into()).compute_minimum_spanning_forest(&graph);
        assert_eq!(forest.edge_count(), 0);
        assert_eq!(forest.total_weight(), 0);
        assert_eq!(forest.missing_edge_count(3), 2);
    }
}
