use crate::create_statistics_struct;
use crate::propagation::PropagationStatistics;

create_statistics_struct!(
    /// Structure responsible for storing several statistics of the most recent call to
    /// [`Solver::satisfy`](crate::Solver::satisfy).
    SolverStatistics {
        /// Core statistics of the search (e.g. the number of decisions)
        engine_statistics: EngineStatistics,
        /// The statistics of the inference which was performed after every decision
        propagation_statistics: PropagationStatistics,
    }
);

create_statistics_struct!(
    /// Core statistics of the backtracking search
    EngineStatistics {
        /// The number of tentative colourings made by the search
        num_decisions: u64,
        /// The number of times a tentative colouring was undone
        num_backtracks: u64,
        /// The number of nodes which were coloured because a single colour was left in their domain
        num_auto_assignments: u64,
        /// The largest decision level which was reached
        peak_decision_level: u64,
        /// The amount of time (in milliseconds) which is spent in the search
        time_spent_in_solver: u64,
    }
);
