//! Classic graph algorithms on in-memory adjacency representations.
//!
//! Graphs are built with [with_node_count](petgraph_impl::with_node_count) and the [MutableGraphContainer] trait.
//! The algorithms only require the [StaticGraph] traits and return plain result values; nothing in this crate performs I/O.

#![warn(missing_docs)]

mod algo;
mod implementation;
mod index;
mod interface;
mod weight;

pub use algo::*;
pub use implementation::*;
pub use index::*;
pub use interface::*;
pub use weight::*;
