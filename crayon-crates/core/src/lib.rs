//! # Crayon Core
//! The core of the Crayon graph-colouring solver: a backtracking search which maintains arc
//! consistency (AC-3) after every tentative colouring, guided by the degree heuristic for the
//! first node, minimum-remaining-values for every node after that, and least-constraining-value
//! for the order in which the colours of a node are attempted.
//!
//! The main entry point is the [`Solver`], which is given a [`graph::Graph`] and the number of
//! colours which may be used.
pub mod asserts;
pub(crate) mod basic_types;
pub mod branching;
pub mod containers;
pub mod engine;
pub mod graph;
pub mod propagation;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use crayon_core::Solver;`
// vs.
// `use crayon_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::api::solver::SolverOptions;
pub use crate::basic_types::Colour;
pub use crate::basic_types::InvalidNodeError;
pub use crate::basic_types::MalformedGraphError;
pub use crate::basic_types::Solution;
pub use crate::basic_types::SolverError;
pub use crate::propagation::InferenceMode;
