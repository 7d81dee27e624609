use thiserror::Error;

/// Error which indicates that a node index outside of the graph was used, e.g. when requesting
/// the value ordering for a node.
///
/// Nodes handed out by the graph are always in range, so this signals a broken contract in the
/// caller rather than a property of the input.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("node {node} does not exist in a graph with {num_nodes} nodes")]
pub struct InvalidNodeError {
    pub node: u32,
    pub num_nodes: usize,
}
