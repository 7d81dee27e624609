//! The static structure of a colouring problem: the nodes which should receive a colour and the
//! edges between nodes which may not share one.
mod node_id;
mod undirected_graph;

pub use node_id::NodeId;
pub use undirected_graph::Graph;
