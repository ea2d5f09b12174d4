#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use graphalgo::NodeIndex;
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs::File;
use std::io::{BufWriter, Write};

mod dijkstra;
mod graph_file;
mod kosaraju;
mod mst;
mod output;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    links {
        GraphFile(graph_file::Error, graph_file::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }
    }
}

#[derive(Parser)]
#[clap(name = "graphalgo", version = env!("CARGO_PKG_VERSION"))]
pub struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
pub enum Command {
    #[clap(about = "Computes the shortest path lengths from a start vertex in an undirected weighted graph.")]
    Dijkstra(dijkstra::DijkstraCommand),
    #[clap(about = "Computes a minimum spanning tree with Prim's algorithm, spanning the component of the start vertex.")]
    Prim(mst::PrimCommand),
    #[clap(about = "Computes a minimum spanning forest with Kruskal's algorithm.")]
    Kruskal(mst::KruskalCommand),
    /// Computes the strongly connected components of a directed graph with Kosaraju's algorithm.
    Kosaraju(kosaraju::KosarajuCommand),
}

// The main is unpacked from an error-chain macro.
// Using just the macro makes IntelliJ complain that there would be no main.
// The real main (programmed manually) is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

/// Results go to stdout, so all log output goes to stderr.
fn initialise_logging(level_filter: LevelFilter) {
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("Could not initialise logging: {}", error);
    }

    info!("Logging initialised successfully");
}

/// Returns the input file, or a `Parameter` error if none was given.
pub(crate) fn require_input_file(file: &Option<String>) -> Result<&str> {
    if let Some(file) = file {
        Ok(file)
    } else {
        error!("No input file given, use -f/--file");
        Err(ErrorKind::Parameter.into())
    }
}

/// Converts a 1-based start vertex into a node index of a graph with `node_count` nodes.
pub(crate) fn start_vertex_index(start_vertex: usize, node_count: usize) -> Result<NodeIndex<usize>> {
    if (1..=node_count).contains(&start_vertex) {
        Ok((start_vertex - 1).into())
    } else {
        error!(
            "The start vertex {} is not a vertex of the graph, expected a value from 1 to {}",
            start_vertex, node_count
        );
        Err(ErrorKind::Parameter.into())
    }
}

/// Opens the output file if one was given, and stdout otherwise.
pub(crate) fn create_output(output: &Option<String>) -> Result<Box<dyn Write>> {
    Ok(if let Some(output) = output {
        info!("Creating/truncating output file '{}'", output);
        Box::new(BufWriter::new(File::create(output)?))
    } else {
        Box::new(BufWriter::new(std::io::stdout()))
    })
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    match &options.subcommand {
        Command::Dijkstra(subcommand) => dijkstra::compute_shortest_paths(options, subcommand),
        Command::Prim(subcommand) => mst::compute_prim(options, subcommand),
        Command::Kruskal(subcommand) => mst::compute_kruskal(options, subcommand),
        Command::Kosaraju(subcommand) => {
            kosaraju::compute_strongly_connected_components(options, subcommand)
        }
    }?;

    info!("Done");
    Ok(())
}
