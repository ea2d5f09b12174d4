/// Algorithms related to graph components, i.e. finding the strongly connected components of a directed graph.
pub mod components;
/// Dijkstra's shortest path algorithm.
pub mod dijkstra;
/// A union-find structure over consecutive indices.
pub mod disjoint_set;
/// Minimum spanning forests via Prim's and Kruskal's algorithms.
pub mod mst;
/// Depth first postorder traversals that do not recurse on the call stack.
pub mod traversal;
