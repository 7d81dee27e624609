use thiserror::Error;

#[cfg(doc)]
use crate::graph::Graph;
#[cfg(doc)]
use crate::graph::NodeId;

/// Errors which are detected while constructing a [`Graph`]; the graph is rejected and no search
/// takes place.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MalformedGraphError {
    /// An edge refers to a node which does not exist.
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },
    /// The graph has more nodes than can be identified by a [`NodeId`].
    #[error("a graph can have at most {max_num_nodes} nodes, but {num_nodes} were requested")]
    TooManyNodes {
        num_nodes: usize,
        max_num_nodes: usize,
    },
    /// A node is listed as its own neighbour.
    #[error("node {node} is adjacent to itself")]
    SelfLoop { node: usize },
    /// The adjacency relation lists `to` as a neighbour of `from` but not the other way around.
    #[error("node {to} is a neighbour of node {from}, but not vice versa")]
    AsymmetricAdjacency { from: usize, to: usize },
    /// A neighbour occurs more than once in the adjacency list of a node.
    #[error("node {neighbour} occurs more than once in the neighbours of node {node}")]
    DuplicateNeighbour { node: usize, neighbour: usize },
    /// A row of an adjacency matrix does not have one entry per node.
    #[error("row {row} of the adjacency matrix has {length} entries instead of {num_nodes}")]
    NonSquareMatrix {
        row: usize,
        length: usize,
        num_nodes: usize,
    },
}
