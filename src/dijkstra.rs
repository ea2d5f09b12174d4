use crate::graph_file::read_weighted_graph_from_file;
use crate::output::write_distances;
use crate::{create_output, require_input_file, start_vertex_index, CliOptions};
use clap::Parser;
use graphalgo::dijkstra::Dijkstra;
use graphalgo::ImmutableGraphContainer;
use log::{info, warn};
use std::io::Write;

#[derive(Parser)]
pub struct DijkstraCommand {
    #[clap(
        short,
        long,
        help = "The input graph, an undirected edge list with lines 'u v [weight]'"
    )]
    pub file: Option<String>,

    #[clap(
        short,
        long,
        help = "The file the distances are written to, standard output if not given"
    )]
    pub output: Option<String>,

    #[clap(
        short = 'i',
        long,
        default_value = "1",
        help = "The vertex the shortest paths start from, counting from 1"
    )]
    pub start_vertex: usize,
}

pub(crate) fn compute_shortest_paths(
    _options: &CliOptions,
    subcommand: &DijkstraCommand,
) -> crate::Result<()> {
    let input = require_input_file(&subcommand.file)?;
    info!("Reading undirected weighted graph from '{}'", input);
    let graph = read_weighted_graph_from_file(input)?;
    info!(
        "Read {} vertices and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    let start = start_vertex_index(subcommand.start_vertex, graph.node_count())?;

    let negative_edge_count = graph
        .edge_indices()
        .filter(|&edge| *graph.edge_data(edge) < 0)
        .count();
    if negative_edge_count > 0 {
        warn!(
            "The graph has {} edges with negative weight, the computation may not terminate",
            negative_edge_count
        );
    }

    info!(
        "Computing shortest path lengths from vertex {}",
        subcommand.start_vertex
    );
    let distances = Dijkstra::new(&graph).shortest_path_lens(&graph, start);
    info!(
        "Reached {} of {} vertices",
        distances.iter().filter(Option::is_some).count(),
        distances.len()
    );

    let mut output = create_output(&subcommand.output)?;
    write_distances(&mut output, &distances)?;
    output.flush()?;
    Ok(())
}
