use crate::algo::disjoint_set::DisjointSet;
use crate::algo::mst::{MinimumSpanningForest, MinimumSpanningForestAlgorithm};
use crate::index::GraphIndex;
use crate::interface::StaticGraph;
use crate::weight::{GraphWeight, WeightedEdgeData};

/// Kruskal's algorithm.
///
/// Edges are considered in ascending order of weight, and edges of equal weight in the order they were added to the graph.
/// An edge is selected if it connects two different trees of the forest built so far.
/// The selected edges are returned in the order they were selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kruskal;

impl<
        WeightType: GraphWeight,
        EdgeData: WeightedEdgeData<WeightType>,
        Graph: StaticGraph<EdgeData = EdgeData>,
    > MinimumSpanningForestAlgorithm<Graph, WeightType> for Kruskal
{
    fn compute_minimum_spanning_forest(
        &self,
        graph: &Graph,
    ) -> MinimumSpanningForest<Graph::NodeIndex, WeightType> {
        let node_count = graph.node_count();
        let tree_edge_count = node_count.saturating_sub(1);

        let mut weighted_edges: Vec<_> = graph
            .edge_indices()
            .map(|edge_id| (graph.edge_data(edge_id).weight(), edge_id))
            .collect();
        // Stable, so ties stay in insertion order.
        weighted_edges.sort_by_key(|&(weight, _)| weight);

        let mut disjoint_set = DisjointSet::new(node_count);
        let mut total_weight = WeightType::zero();
        let mut edges = Vec::with_capacity(tree_edge_count);

        for (weight, edge_id) in weighted_edges {
            if edges.len() == tree_edge_count {
                break;
            }

            let endpoints = graph.edge_endpoints(edge_id);
            if disjoint_set.union(endpoints.from_node.as_usize(), endpoints.to_node.as_usize()) {
                total_weight = total_weight + weight;
                edges.push(endpoints.canonical());
            }
        }

        MinimumSpanningForest::new(total_weight, edges)
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::mst::{Kruskal, MinimumSpanningForest, MinimumSpanningForestAlgorithm};
    use crate::implementation::petgraph_impl::{self, PetUndirectedGraph};
    use crate::index::NodeIndex;
    use crate::interface::MutableGraphContainer;

    #[test]
    fn test_kruskal_breaks_ties_by_insertion_order() {
        let mut graph: PetUndirectedGraph<u64> = petgraph_impl::with_node_count(3);
        graph.add_edge(2.into(), 1.into(), 5);
        graph.add_edge(0.into(), 2.into(), 5);
        graph.add_edge(1.into(), 0.into(), 5);

        let forest: MinimumSpanningForest<NodeIndex<usize>, u64> =
            Kruskal.compute_minimum_spanning_forest(&graph);
        let edges: Vec<_> = forest.iter().map(|edge| edge.as_usize_pair()).collect();
        assert_eq!(edges, vec![(1, 2), (0, 2)]);
        assert_eq!(forest.total_weight(), 10);
    }

    #[test]
    fn test_kruskal_skips_cycles_and_self_loops() {
        let mut graph: PetUndirectedGraph<u64> = petgraph_impl::with_node_count(4);
        graph.add_edge(1.into(), 1.into(), 0);
        graph.add_edge(0.into(), 1.into(), 1);
        graph.add_edge(1.into(), 0.into(), 1);
        graph.add_edge(0.into(), 2.into(), 3);
        graph.add_edge(1.into(), 2.into(), 2);

        let forest: MinimumSpanningForest<NodeIndex<usize>, u64> =
            Kruskal.compute_minimum_spanning_forest(&graph);
        let edges: Vec<_> = forest.iter().map(|edge| edge.as_usize_pair()).collect();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
        assert_eq!(forest.total_weight(), 3);
        assert_eq!(forest.missing_edge_count(4), 1);
    }

    #[test]
    fn test_kruskal_on_empty_graph() {
        let graph: PetUndirectedGraph<u64> = petgraph_impl::with_node_count(0);
        let forest: MinimumSpanningForest<NodeIndex<usize>, u64> =
            Kruskal.compute_minimum_spanning_forest(&graph);
        assert_eq!(forest.edge_count(), 0);
        assert!(forest.is_spanning_tree(0));
    }
}
