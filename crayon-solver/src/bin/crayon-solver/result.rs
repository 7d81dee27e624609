use std::fmt::Display;

use crayon_solver::parsers::GraphParseError;
use crayon_solver::SolverError;
use thiserror::Error;

pub(crate) type CrayonResult<T> = Result<T, CrayonError>;

#[derive(Error, Debug)]
pub(crate) enum CrayonError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The file {0} is not supported.")]
    InvalidInstanceFile(String),
    #[error("The graph could not be read, more details: {0}")]
    Parse(#[from] GraphParseError),
    #[error("The solver failed, more details: {0}")]
    Solver(#[from] SolverError),
}

impl CrayonError {
    pub(crate) fn invalid_instance(path: impl Display) -> Self {
        Self::InvalidInstanceFile(format!("{}", path))
    }
}
