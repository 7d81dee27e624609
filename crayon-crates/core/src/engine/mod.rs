//! Contains the state which the search modifies (the [`DomainStore`] and the [`Assignments`]) and
//! the backtracking search which drives the solver.
mod assignments;
pub(crate) mod backtracking_search;
mod domains;
mod solver_statistics;

pub use assignments::AssignmentKind;
pub use assignments::AssignmentRecord;
pub use assignments::Assignments;
pub(crate) use backtracking_search::BacktrackingSearch;
pub use backtracking_search::SearchPhase;
pub use domains::DomainSnapshot;
pub use domains::DomainStore;
pub use solver_statistics::EngineStatistics;
pub use solver_statistics::SolverStatistics;
