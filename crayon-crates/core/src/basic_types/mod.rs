mod colour;
mod invalid_node_error;
mod malformed_graph_error;
mod solution;
mod solver_error;
mod trail;

pub use colour::Colour;
pub use invalid_node_error::InvalidNodeError;
pub use malformed_graph_error::MalformedGraphError;
pub use solution::Solution;
pub use solver_error::SolverError;
pub(crate) use trail::Trail;
