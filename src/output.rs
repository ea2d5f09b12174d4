//! Writing results in the textual formats of the command line tool.
//! All vertices are written 1-based.

use graphalgo::components::StronglyConnectedComponents;
use graphalgo::dijkstra::ShortestPathDistances;
use graphalgo::mst::MinimumSpanningForest;
use graphalgo::{GraphIndex, GraphWeight};
use std::fmt::Display;
use std::io::Write;

/// Writes `vertex:distance` for each vertex on one line, with `-1` for unreachable vertices.
pub fn write_distances<WeightType: GraphWeight + Display>(
    mut writer: impl Write,
    distances: &ShortestPathDistances<WeightType>,
) -> std::io::Result<()> {
    for (node, distance) in distances.iter().enumerate() {
        if node > 0 {
            write!(writer, " ")?;
        }
        match distance {
            Some(distance) => write!(writer, "{}:{}", node + 1, distance)?,
            None => write!(writer, "{}:-1", node + 1)?,
        }
    }
    writeln!(writer)
}

/// Writes the total weight of the forest.
pub fn write_forest_weight<NodeIndex: GraphIndex, WeightType: GraphWeight + Display>(
    mut writer: impl Write,
    forest: &MinimumSpanningForest<NodeIndex, WeightType>,
) -> std::io::Result<()> {
    writeln!(writer, "{}", forest.total_weight())
}

/// Writes the edges of the forest as `(u,v)` on one line.
pub fn write_forest_edges<NodeIndex: GraphIndex, WeightType: GraphWeight>(
    mut writer: impl Write,
    forest: &MinimumSpanningForest<NodeIndex, WeightType>,
) -> std::io::Result<()> {
    for (index, edge) in forest.iter().enumerate() {
        if index > 0 {
            write!(writer, " ")?;
        }
        write!(
            writer,
            "({},{})",
            edge.from_node.as_usize() + 1,
            edge.to_node.as_usize() + 1
        )?;
    }
    writeln!(writer)
}

/// Writes each component on its own line.
/// There is no line break after the last component.
pub fn write_components<NodeIndex: GraphIndex>(
    mut writer: impl Write,
    components: &StronglyConnectedComponents<NodeIndex>,
) -> std::io::Result<()> {
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        for (member_index, node) in component.iter().enumerate() {
            if member_index > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", node.as_usize() + 1)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_components, write_distances, write_forest_edges, write_forest_weight};
    use graphalgo::components::decompose_strongly_connected_components;
    use graphalgo::dijkstra::Dijkstra;
    use graphalgo::mst::{Kruskal, MinimumSpanningForest, MinimumSpanningForestAlgorithm, Prim};
    use graphalgo::petgraph_impl::{self, PetDirectedGraph, PetUndirectedGraph};
    use graphalgo::{MutableGraphContainer, NodeIndex};

    fn weighted_graph(node_count: usize, edges: &[(usize, usize, i64)]) -> PetUndirectedGraph<i64> {
        let mut graph = petgraph_impl::with_node_count(node_count);
        for &(from, to, weight) in edges {
            graph.add_edge((from - 1).into(), (to - 1).into(), weight);
        }
        graph
    }

    fn to_string(output: Vec<u8>) -> String {
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_write_distances() {
        let graph = weighted_graph(4, &[(1, 2, 1), (2, 3, 2), (3, 4, 1), (4, 1, 5)]);
        let distances = Dijkstra::new(&graph).shortest_path_lens(&graph, 0.into());
        let mut output = Vec::new();
        write_distances(&mut output, &distances).unwrap();
        assert_eq!(to_string(output), "1:0 2:1 3:3 4:4\n");
    }

    #[test]
    fn test_write_unreachable_distances() {
        let graph = weighted_graph(4, &[(1, 2, 3), (2, 3, 4)]);
        let distances = Dijkstra::new(&graph).shortest_path_lens(&graph, 0.into());
        let mut output = Vec::new();
        write_distances(&mut output, &distances).unwrap();
        assert_eq!(to_string(output), "1:0 2:3 3:7 4:-1\n");
    }

    #[test]
    fn test_write_spanning_tree() {
        let graph = weighted_graph(4, &[(1, 2, 1), (2, 3, 2), (3, 4, 1), (4, 1, 5)]);
        let forest: MinimumSpanningForest<NodeIndex<usize>, i64> =
            Prim::new(0.into()).compute_minimum_spanning_forest(&graph);

        let mut output = Vec::new();
        write_forest_weight(&mut output, &forest).unwrap();
        assert_eq!(to_string(output), "4\n");

        let mut output = Vec::new();
        write_forest_edges(&mut output, &forest).unwrap();
        assert_eq!(to_string(output), "(1,2) (2,3) (3,4)\n");
    }

    #[test]
    fn test_write_spanning_forest() {
        let graph = weighted_graph(4, &[(1, 2, 1), (3, 4, 1)]);
        let forest: MinimumSpanningForest<NodeIndex<usize>, i64> =
            Kruskal.compute_minimum_spanning_forest(&graph);
        let mut output = Vec::new();
        write_forest_edges(&mut output, &forest).unwrap();
        assert_eq!(to_string(output), "(1,2) (3,4)\n");
    }

    #[test]
    fn test_write_components() {
        let mut graph: PetDirectedGraph<()> = petgraph_impl::with_node_count(4);
        graph.add_edge(0.into(), 1.into(), ());
        graph.add_edge(1.into(), 2.into(), ());
        graph.add_edge(2.into(), 0.into(), ());
        let mut components = decompose_strongly_connected_components(&graph);
        components.canonicalise();

        let mut output = Vec::new();
        write_components(&mut output, &components).unwrap();
        assert_eq!(to_string(output), "1 2 3\n4");
    }
}
