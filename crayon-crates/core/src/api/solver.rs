use std::time::Instant;

use log::debug;

use super::results::SatisfactionResult;
use crate::basic_types::SolverError;
use crate::crayon_assert_simple;
use crate::engine::BacktrackingSearch;
use crate::engine::SolverStatistics;
use crate::graph::Graph;
use crate::propagation::InferenceMode;
use crate::statistics::log_statistic;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Options which influence how the [`Solver`] searches for a colouring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// The inference which is performed after every tentative colouring.
    pub inference: InferenceMode,
}

/// The main interaction point, which decides whether a [`Graph`] can be coloured with a given
/// number of colours such that adjacent nodes receive different colours.
///
/// ```rust
/// # use crayon_core::graph::Graph;
/// # use crayon_core::results::SatisfactionResult;
/// # use crayon_core::Solver;
/// // A cycle of length 4
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
///
/// let mut solver = Solver::new(graph, 2).unwrap();
///
/// match solver.satisfy().unwrap() {
///     SatisfactionResult::Satisfiable(solution) => {
///         assert!(solution.is_proper_colouring(solver.graph()));
///     }
///     SatisfactionResult::Unsatisfiable => panic!("an even cycle can be coloured with 2 colours"),
/// }
/// ```
#[derive(Debug)]
pub struct Solver {
    graph: Graph,
    num_colours: u32,
    options: SolverOptions,
    /// The statistics of the most recent call to [`Solver::satisfy`].
    statistics: SolverStatistics,
}

impl Solver {
    /// Creates a solver for colouring `graph` with the colours `0..num_colours`, using the default
    /// [`SolverOptions`].
    pub fn new(graph: Graph, num_colours: u32) -> Result<Solver, SolverError> {
        Solver::with_options(graph, num_colours, SolverOptions::default())
    }

    /// Creates a solver with the provided [`SolverOptions`].
    ///
    /// Fails with [`SolverError::EmptyPalette`] if `num_colours` is zero.
    pub fn with_options(
        graph: Graph,
        num_colours: u32,
        options: SolverOptions,
    ) -> Result<Solver, SolverError> {
        if num_colours == 0 {
            return Err(SolverError::EmptyPalette);
        }

        Ok(Solver {
            graph,
            num_colours,
            options,
            statistics: SolverStatistics::default(),
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn num_colours(&self) -> u32 {
        self.num_colours
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// Searches for a colouring of the graph.
    ///
    /// Every call starts from scratch (all nodes uncoloured, all domains full), so repeated calls
    /// give identical results. Not finding a colouring is not an error; the only error is a node
    /// outside of the graph reaching the heuristics, which indicates a bug.
    pub fn satisfy(&mut self) -> Result<SatisfactionResult, SolverError> {
        let start = Instant::now();
        debug!(
            "Solving with {:?} inference and {} colours",
            self.options.inference, self.num_colours
        );

        let mut search = BacktrackingSearch::new(
            &self.graph,
            self.num_colours,
            self.options.inference.create_inference(),
        );
        let result = search.solve();

        self.statistics = SolverStatistics {
            engine_statistics: search.statistics(),
            propagation_statistics: search.propagation_statistics(),
        };
        self.statistics.engine_statistics.time_spent_in_solver =
            start.elapsed().as_millis() as u64;

        match result? {
            Some(solution) => {
                crayon_assert_simple!(
                    solution.is_proper_colouring(&self.graph),
                    "the colouring found by the search violates the edges {:?}",
                    solution.conflicting_edges(&self.graph).collect::<Vec<_>>()
                );
                Ok(SatisfactionResult::Satisfiable(solution))
            }
            None => Ok(SatisfactionResult::Unsatisfiable),
        }
    }

    /// The statistics of the most recent call to [`Solver::satisfy`].
    pub fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    /// Logs the statistics of the most recent call to [`Solver::satisfy`], if statistic logging
    /// has been configured. The statistics of the inference are only logged if `verbose` is true.
    pub fn log_statistics(&self, verbose: bool) {
        if !should_log_statistics() {
            return;
        }

        log_statistic("numNodes", self.graph.num_nodes());
        log_statistic("numEdges", self.graph.num_edges());
        log_statistic("numColours", self.num_colours);
        self.statistics
            .engine_statistics
            .log(StatisticLogger::new(["engine"]));
        if verbose {
            self.statistics
                .propagation_statistics
                .log(StatisticLogger::new(["propagation"]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).expect("valid graph")
    }

    #[test]
    fn empty_palette_is_rejected() {
        let result = Solver::new(triangle(), 0);

        assert_eq!(Some(SolverError::EmptyPalette), result.err());
    }

    #[test]
    fn repeated_calls_give_the_same_solution() {
        let mut solver = Solver::new(triangle(), 3).expect("non-empty palette");

        let first = solver.satisfy().expect("valid search");
        let second = solver.satisfy().expect("valid search");

        assert!(first.is_satisfiable());
        assert_eq!(first, second);
    }

    #[test]
    fn statistics_describe_the_most_recent_call() {
        let mut solver = Solver::new(triangle(), 2).expect("non-empty palette");

        let result = solver.satisfy().expect("valid search");

        assert_eq!(SatisfactionResult::Unsatisfiable, result);
        let statistics = solver.statistics();
        assert_eq!(
            statistics.engine_statistics.num_decisions,
            statistics.engine_statistics.num_backtracks
        );
        assert!(statistics.propagation_statistics.num_wipeouts > 0);
    }

    #[test]
    fn options_select_the_inference() {
        let options = SolverOptions {
            inference: InferenceMode::ForwardChecking,
        };
        let mut solver = Solver::with_options(triangle(), 3, options).expect("non-empty palette");

        let result = solver.satisfy().expect("valid search");

        assert_eq!(InferenceMode::ForwardChecking, solver.options().inference);
        assert!(result
            .solution()
            .is_some_and(|solution| solution.is_proper_colouring(solver.graph())));
    }
}
