//! Reading graphs from plain edge list files.
//!
//! A file starts with a header line `<vertex count> <edge count>`, followed by one edge per line.
//! Vertices are numbered from 1 in the file.
//! Blank lines and lines starting with `%` are ignored everywhere.

use error_chain::{bail, error_chain};
use graphalgo::petgraph_impl::petgraph::EdgeType;
use graphalgo::petgraph_impl::{self, PetDirectedGraph, PetGraph, PetUndirectedGraph};
use graphalgo::MutableGraphContainer;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::SplitWhitespace;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    errors {
        MissingHeader {
            description("the graph file contains no header line")
            display("the graph file contains no header line")
        }

        MalformedHeader(line: String) {
            description("the header line does not start with the vertex count and the edge count")
            display("malformed header line, expected '<vertex count> <edge count>': '{}'", line)
        }
    }
}

/// The edge weight type of weighted graph files.
pub type Weight = i64;

/// The weight of an edge whose line gives no weight.
const DEFAULT_WEIGHT: Weight = 1;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Header {
    node_count: usize,
    edge_count: usize,
}

/// Reads an undirected graph from lines `u v [w]`, where the weight `w` defaults to 1.
pub fn read_weighted_graph_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<PetUndirectedGraph<Weight>> {
    read_weighted_graph(BufReader::new(File::open(path)?))
}

/// Reads an undirected graph from lines `u v [w]`, where the weight `w` defaults to 1.
///
/// `Weight::MAX` is reserved for unreachable vertices, so edges with that weight are skipped.
pub fn read_weighted_graph<R: BufRead>(reader: R) -> Result<PetUndirectedGraph<Weight>> {
    read_graph(reader, |tokens| match tokens.next() {
        Some(weight) => weight
            .parse()
            .ok()
            .filter(|weight: &Weight| *weight < Weight::MAX),
        None => Some(DEFAULT_WEIGHT),
    })
}

/// Reads a directed unweighted graph from lines `u v`.
pub fn read_directed_graph_from_file<P: AsRef<Path>>(path: P) -> Result<PetDirectedGraph<()>> {
    read_directed_graph(BufReader::new(File::open(path)?))
}

/// Reads a directed unweighted graph from lines `u v`.
pub fn read_directed_graph<R: BufRead>(reader: R) -> Result<PetDirectedGraph<()>> {
    read_graph(reader, |_| Some(()))
}

fn is_ignored(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty() || line.starts_with('%')
}

fn parse_header(line: &str) -> Result<Header> {
    let mut tokens = line.split_whitespace();
    let mut next_count = || tokens.next().and_then(|token| token.parse::<usize>().ok());
    let (node_count, edge_count) = match (next_count(), next_count()) {
        (Some(node_count), Some(edge_count)) => (node_count, edge_count),
        _ => bail!(ErrorKind::MalformedHeader(line.to_owned())),
    };

    if tokens.next().is_some() {
        warn!(
            "Ignoring everything after the vertex count and the edge count in the header line '{}'",
            line
        );
    }

    Ok(Header {
        node_count,
        edge_count,
    })
}

/// Parses a 1-based vertex and returns it 0-based, if it is a vertex of a graph with `node_count` nodes.
fn parse_vertex(token: Option<&str>, node_count: usize) -> Option<usize> {
    let vertex: usize = token?.parse().ok()?;
    if (1..=node_count).contains(&vertex) {
        Some(vertex - 1)
    } else {
        None
    }
}

fn read_graph<
    R: BufRead,
    EdgeData,
    Ty: EdgeType,
    ParseEdgeData: Fn(&mut SplitWhitespace) -> Option<EdgeData>,
>(
    reader: R,
    parse_edge_data: ParseEdgeData,
) -> Result<PetGraph<EdgeData, Ty>> {
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !is_ignored(&line) {
                    break parse_header(&line)?;
                }
            }
            None => bail!(ErrorKind::MissingHeader),
        }
    };
    debug!(
        "Header declares {} vertices and {} edges",
        header.node_count, header.edge_count
    );

    let mut graph = petgraph_impl::with_node_count(header.node_count);
    let mut accepted_edge_count = 0;
    for (line_index, line) in lines {
        if accepted_edge_count == header.edge_count {
            break;
        }
        let line = line?;
        if is_ignored(&line) {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let from = parse_vertex(tokens.next(), header.node_count);
        let to = parse_vertex(tokens.next(), header.node_count);
        let edge_data = parse_edge_data(&mut tokens);
        if let (Some(from), Some(to), Some(edge_data)) = (from, to, edge_data) {
            graph.add_edge(from.into(), to.into(), edge_data);
            accepted_edge_count += 1;
        } else {
            warn!(
                "Skipping malformed or out of range edge in line {}: '{}'",
                line_index + 1,
                line
            );
        }
    }

    if accepted_edge_count < header.edge_count {
        warn!(
            "The header declares {} edges, but only {} were read",
            header.edge_count, accepted_edge_count
        );
    }

    Ok(graph)
}
