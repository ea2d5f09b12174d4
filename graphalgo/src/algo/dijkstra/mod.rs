use crate::index::GraphIndex;
use crate::interface::{GraphBase, StaticGraph};
use crate::weight::{GraphWeight, WeightedEdgeData};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

/// The distances from a single source to all nodes of a graph, as computed by [Dijkstra].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShortestPathDistances<WeightType> {
    distances: Vec<WeightType>,
}

impl<WeightType: GraphWeight> ShortestPathDistances<WeightType> {
    /// Returns the distance to the given node, or `None` if the node is unreachable from the source.
    pub fn get<NodeIndex: GraphIndex>(&self, node: NodeIndex) -> Option<WeightType> {
        let distance = self.distances[node.as_usize()];
        if distance.is_infinity() {
            None
        } else {
            Some(distance)
        }
    }

    /// Returns true if the given node is reachable from the source.
    pub fn is_reachable<NodeIndex: GraphIndex>(&self, node: NodeIndex) -> bool {
        self.get(node).is_some()
    }

    /// Returns an iterator over the distances to all nodes in ascending order of node index.
    /// Unreachable nodes are reported as `None`.
    pub fn iter(&self) -> impl '_ + Iterator<Item = Option<WeightType>> {
        self.distances
            .iter()
            .map(|distance| if distance.is_infinity() { None } else { Some(*distance) })
    }

    /// Returns the raw distance array, where unreachable nodes have distance `WeightType::infinity()`.
    pub fn as_slice(&self) -> &[WeightType] {
        &self.distances
    }

    /// Returns the amount of nodes.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the graph had no nodes.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Dijkstra's algorithm for single-source shortest path lengths.
///
/// Only lengths are computed, so no back pointers are stored.
///
/// The priority queue has no decrease-key operation.
/// Instead, an improved node is pushed again and outdated queue entries are skipped when they are popped.
///
/// All edge weights must be non-negative.
/// This is not checked, and with negative weights the computation may not terminate or the distances are unspecified.
///
/// Path lengths that overflow `WeightType` or reach `WeightType::infinity()` are treated as unreachable.
pub struct Dijkstra<Graph: GraphBase, WeightType: GraphWeight> {
    queue: BinaryHeap<Reverse<(WeightType, Graph::NodeIndex)>>,
    node_weights: Vec<WeightType>,
    graph: PhantomData<Graph>,
}

impl<
        WeightType: GraphWeight,
        EdgeData: WeightedEdgeData<WeightType>,
        Graph: StaticGraph<EdgeData = EdgeData>,
    > Dijkstra<Graph, WeightType>
{
    /// Create the data structures for the given graph.
    pub fn new(graph: &Graph) -> Self {
        Self {
            queue: BinaryHeap::new(),
            node_weights: vec![WeightType::infinity(); graph.node_count()],
            graph: Default::default(),
        }
    }

    /// Compute the lengths of the shortest paths from `source` to all nodes.
    ///
    /// The data structures are left cleared, such that the same instance can be reused for further sources in the same graph.
    pub fn shortest_path_lens(
        &mut self,
        graph: &Graph,
        source: Graph::NodeIndex,
    ) -> ShortestPathDistances<WeightType> {
        debug_assert_eq!(self.node_weights.len(), graph.node_count());
        self.queue.push(Reverse((WeightType::zero(), source)));
        self.node_weights[source.as_usize()] = WeightType::zero();

        while let Some(Reverse((weight, node_index))) = self.queue.pop() {
            // Skip queue entries that were superseded by a shorter path.
            let actual_weight = self.node_weights[node_index.as_usize()];
            if actual_weight < weight {
                continue;
            }
            debug_assert_eq!(actual_weight, weight);

            // Never add to the infinity sentinel, it would wrap around.
            if actual_weight.is_infinity() {
                continue;
            }

            // Relax neighbors
            for out_neighbor in graph.out_neighbors(node_index) {
                let new_neighbor_weight = match actual_weight
                    .checked_add(graph.edge_data(out_neighbor.edge_id).weight())
                {
                    Some(weight) if !weight.is_infinity() => weight,
                    _ => continue,
                };
                let neighbor_weight = &mut self.node_weights[out_neighbor.node_id.as_usize()];
                if new_neighbor_weight < *neighbor_weight {
                    *neighbor_weight = new_neighbor_weight;
                    self.queue
                        .push(Reverse((new_neighbor_weight, out_neighbor.node_id)));
                }
            }
        }

        let distances = std::mem::replace(
            &mut self.node_weights,
            vec![WeightType::infinity(); graph.node_count()],
        );
        ShortestPathDistances { distances }
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::dijkstra::Dijkstra;
    use crate::implementation::petgraph_impl::{self, PetUndirectedGraph};
    use crate::index::NodeIndex;
    use crate::interface::{ImmutableGraphContainer, MutableGraphContainer};
    use crate::weight::GraphWeight;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn build_graph(node_count: usize, edges: &[(usize, usize, i64)]) -> PetUndirectedGraph<i64> {
        let mut graph = petgraph_impl::with_node_count(node_count);
        for &(from, to, weight) in edges {
            graph.add_edge(from.into(), to.into(), weight);
        }
        graph
    }

    fn distances_from(graph: &PetUndirectedGraph<i64>, source: usize) -> Vec<Option<i64>> {
        Dijkstra::new(graph)
            .shortest_path_lens(graph, source.into())
            .iter()
            .collect()
    }

    #[test]
    fn test_dijkstra_simple() {
        let graph = build_graph(3, &[(0, 1, 2), (1, 2, 2), (0, 2, 5)]);
        assert_eq!(distances_from(&graph, 0), vec![Some(0), Some(2), Some(4)]);
        assert_eq!(distances_from(&graph, 2), vec![Some(4), Some(2), Some(0)]);
    }

    #[test]
    fn test_dijkstra_cycle() {
        let graph = build_graph(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (3, 0, 5)]);
        assert_eq!(
            distances_from(&graph, 0),
            vec![Some(0), Some(1), Some(3), Some(4)]
        );
    }

    #[test]
    fn test_dijkstra_unreachable_node_has_no_distance() {
        let graph = build_graph(4, &[(0, 1, 3), (1, 2, 4)]);
        let distances = Dijkstra::new(&graph).shortest_path_lens(&graph, 0.into());
        assert_eq!(distances.len(), 4);
        assert_eq!(distances.get(NodeIndex::<usize>::from(2)), Some(7));
        assert_eq!(distances.get(NodeIndex::<usize>::from(3)), None);
        assert!(!distances.is_reachable(NodeIndex::<usize>::from(3)));
        assert_eq!(distances.as_slice()[3], i64::infinity());
    }

    #[test]
    fn test_dijkstra_parallel_edges_zero_weights_and_self_loops() {
        let graph = build_graph(3, &[(0, 1, 9), (1, 0, 4), (1, 1, 0), (1, 2, 0)]);
        assert_eq!(distances_from(&graph, 0), vec![Some(0), Some(4), Some(4)]);
    }

    #[test]
    fn test_dijkstra_single_node() {
        let graph = build_graph(1, &[]);
        assert_eq!(distances_from(&graph, 0), vec![Some(0)]);
    }

    #[test]
    fn test_dijkstra_reuse_for_several_sources() {
        let graph = build_graph(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let mut dijkstra = Dijkstra::new(&graph);
        let first = dijkstra.shortest_path_lens(&graph, 0.into());
        let second = dijkstra.shortest_path_lens(&graph, 3.into());
        let first_again = dijkstra.shortest_path_lens(&graph, 0.into());
        assert_eq!(first, first_again);
        assert_eq!(
            second.iter().collect::<Vec<_>>(),
            vec![Some(3), Some(2), Some(1), Some(0)]
        );
    }

    #[test]
    fn test_dijkstra_overflowing_path_is_unreachable() {
        let graph = build_graph(3, &[(0, 1, i64::MAX - 5), (1, 2, 10)]);
        assert_eq!(
            distances_from(&graph, 0),
            vec![Some(0), Some(i64::MAX - 5), None]
        );
        assert_eq!(
            distances_from(&graph, 2),
            vec![None, Some(10), Some(0)]
        );
    }

    #[test]
    fn test_dijkstra_path_of_infinite_length_is_unreachable() {
        let graph = build_graph(2, &[(0, 1, i64::MAX)]);
        assert_eq!(distances_from(&graph, 0), vec![Some(0), None]);
    }

    /// Computes shortest path lengths by relaxing all edges until nothing changes.
    fn brute_force_distances(
        node_count: usize,
        edges: &[(usize, usize, i64)],
        source: usize,
    ) -> Vec<Option<i64>> {
        let mut distances = vec![None; node_count];
        distances[source] = Some(0);
        let mut changed = true;
        while changed {
            changed = false;
            for &(a, b, weight) in edges {
                for &(from, to) in &[(a, b), (b, a)] {
                    if let Some(from_distance) = distances[from] {
                        let candidate: i64 = from_distance + weight;
                        if distances[to].map_or(true, |current| candidate < current) {
                            distances[to] = Some(candidate);
                            changed = true;
                        }
                    }
                }
            }
        }
        distances
    }

    #[test]
    fn test_dijkstra_matches_brute_force_on_random_graphs() {
        let mut random = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let node_count = random.gen_range(1..9);
            let edge_count = random.gen_range(0..16);
            let edges: Vec<_> = (0..edge_count)
                .map(|_| {
                    (
                        random.gen_range(0..node_count),
                        random.gen_range(0..node_count),
                        random.gen_range(0..20),
                    )
                })
                .collect();
            let graph = build_graph(node_count, &edges);
            assert_eq!(graph.node_count(), node_count);

            for source in 0..node_count {
                let expected = brute_force_distances(node_count, &edges, source);
                let actual = distances_from(&graph, source);
                assert_eq!(actual, expected);
                assert_eq!(actual[source], Some(0));
                assert_eq!(distances_from(&graph, source), actual);
            }
        }
    }
}
