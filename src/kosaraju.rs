use crate::graph_file::read_directed_graph_from_file;
use crate::output::write_components;
use crate::{create_output, require_input_file, CliOptions};
use clap::Parser;
use graphalgo::components::decompose_strongly_connected_components;
use graphalgo::ImmutableGraphContainer;
use log::info;
use std::io::Write;

#[derive(Parser)]
pub struct KosarajuCommand {
    #[clap(
        short,
        long,
        help = "The input graph, a directed edge list with lines 'u v'"
    )]
    pub file: Option<String>,

    #[clap(
        short,
        long,
        help = "The file the components are written to, standard output if not given"
    )]
    pub output: Option<String>,
}

pub(crate) fn compute_strongly_connected_components(
    _options: &CliOptions,
    subcommand: &KosarajuCommand,
) -> crate::Result<()> {
    let input = require_input_file(&subcommand.file)?;
    info!("Reading directed graph from '{}'", input);
    let graph = read_directed_graph_from_file(input)?;
    info!(
        "Read {} vertices and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    info!("Computing strongly connected components with Kosaraju's algorithm");
    let mut components = decompose_strongly_connected_components(&graph);
    components.canonicalise();
    info!("Found {} strongly connected components", components.len());

    let mut output = create_output(&subcommand.output)?;
    write_components(&mut output, &components)?;
    output.flush()?;
    Ok(())
}
