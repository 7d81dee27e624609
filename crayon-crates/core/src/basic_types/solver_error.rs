use thiserror::Error;

use super::InvalidNodeError;
#[cfg(doc)]
use crate::Solver;

/// Errors related to creating or running the [`Solver`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The palette should contain at least one colour.
    #[error("the number of colours should be positive")]
    EmptyPalette,
    /// A heuristic was queried for a node outside of the graph.
    #[error("the search queried an invalid node: {0}")]
    InvalidNode(#[from] InvalidNodeError),
}
