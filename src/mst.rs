use crate::graph_file::{read_weighted_graph_from_file, Weight};
use crate::output::{write_forest_edges, write_forest_weight};
use crate::{create_output, require_input_file, start_vertex_index, CliOptions};
use clap::Parser;
use graphalgo::mst::{Kruskal, MinimumSpanningForest, MinimumSpanningForestAlgorithm, Prim};
use graphalgo::petgraph_impl::PetUndirectedGraph;
use graphalgo::{ImmutableGraphContainer, NodeIndex};
use log::{info, warn};
use std::io::Write;

#[derive(Parser)]
pub struct PrimCommand {
    #[clap(
        short,
        long,
        help = "The input graph, an undirected edge list with lines 'u v [weight]'"
    )]
    pub file: Option<String>,

    #[clap(
        short,
        long,
        help = "The file the result is written to, standard output if not given"
    )]
    pub output: Option<String>,

    #[clap(
        short = 'i',
        long,
        default_value = "1",
        help = "The vertex the tree is grown from, counting from 1"
    )]
    pub start_vertex: usize,

    #[clap(
        short,
        long,
        help = "Output the edges of the tree instead of its total weight"
    )]
    pub show_edges: bool,
}

#[derive(Parser)]
pub struct KruskalCommand {
    #[clap(
        short,
        long,
        help = "The input graph, an undirected edge list with lines 'u v [weight]'"
    )]
    pub file: Option<String>,

    #[clap(
        short,
        long,
        help = "The file the result is written to, standard output if not given"
    )]
    pub output: Option<String>,

    #[clap(
        short,
        long,
        help = "Output the edges of the forest instead of its total weight"
    )]
    pub show_edges: bool,
}

fn read_graph(file: &Option<String>) -> crate::Result<PetUndirectedGraph<Weight>> {
    let input = require_input_file(file)?;
    info!("Reading undirected weighted graph from '{}'", input);
    let graph = read_weighted_graph_from_file(input)?;
    info!(
        "Read {} vertices and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn write_forest(
    forest: &MinimumSpanningForest<NodeIndex<usize>, Weight>,
    node_count: usize,
    output: &Option<String>,
    show_edges: bool,
) -> crate::Result<()> {
    info!(
        "Selected {} edges with total weight {}",
        forest.edge_count(),
        forest.total_weight()
    );
    if !forest.is_spanning_tree(node_count) {
        warn!(
            "The result is a spanning forest, {} edges short of a spanning tree",
            forest.missing_edge_count(node_count)
        );
    }

    let mut output = create_output(output)?;
    if show_edges {
        write_forest_edges(&mut output, forest)?;
    } else {
        write_forest_weight(&mut output, forest)?;
    }
    output.flush()?;
    Ok(())
}

pub(crate) fn compute_prim(_options: &CliOptions, subcommand: &PrimCommand) -> crate::Result<()> {
    let graph = read_graph(&subcommand.file)?;
    let start = start_vertex_index(subcommand.start_vertex, graph.node_count())?;

    info!(
        "Computing minimum spanning tree with Prim's algorithm from vertex {}",
        subcommand.start_vertex
    );
    let forest = Prim::new(start).compute_minimum_spanning_forest(&graph);
    write_forest(
        &forest,
        graph.node_count(),
        &subcommand.output,
        subcommand.show_edges,
    )
}

pub(crate) fn compute_kruskal(
    _options: &CliOptions,
    subcommand: &KruskalCommand,
) -> crate::Result<()> {
    let graph = read_graph(&subcommand.file)?;

    info!("Computing minimum spanning forest with Kruskal's algorithm");
    let forest = Kruskal.compute_minimum_spanning_forest(&graph);
    write_forest(
        &forest,
        graph.node_count(),
        &subcommand.output,
        subcommand.show_edges,
    )
}
