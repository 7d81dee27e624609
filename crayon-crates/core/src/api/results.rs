//! Contains the outputs of the [`Solver`].
use crate::basic_types::Solution;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// Indicates that a colouring was found and provides the corresponding [`Solution`].
    Satisfiable(Solution),
    /// Indicates that the graph cannot be coloured with the given number of colours.
    Unsatisfiable,
}

impl SatisfactionResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatisfactionResult::Satisfiable(_))
    }

    /// Returns the [`Solution`] if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SatisfactionResult::Satisfiable(solution) => Some(solution),
            SatisfactionResult::Unsatisfiable => None,
        }
    }
}
