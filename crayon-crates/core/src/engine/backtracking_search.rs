use log::debug;
use log::trace;

use super::AssignmentKind;
use super::Assignments;
use super::DomainStore;
use super::EngineStatistics;
use crate::basic_types::Colour;
use crate::basic_types::InvalidNodeError;
use crate::basic_types::Solution;
use crate::branching::InOrderTieBreaker;
use crate::branching::LeastConstrainingValue;
use crate::branching::MaxDegree;
use crate::branching::MinimumRemainingValues;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::crayon_assert_moderate;
use crate::crayon_assert_simple;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::propagation::Inference;
use crate::propagation::PropagationStatistics;

/// Which variable selector is used for the next selection.
///
/// A search starts in [`SearchPhase::Initial`], in which the node with the most neighbours is
/// chosen; after that first selection it moves to [`SearchPhase::Ongoing`] for the remainder of
/// the search, in which the node with the fewest remaining colours is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Initial,
    Ongoing,
}

/// A depth-first search over the colourings of a graph.
///
/// Every tentative colouring opens a new decision level on both the [`DomainStore`] and the
/// [`Assignments`]; all changes caused by it (the pruning performed by the [`Inference`] and the
/// nodes which are coloured because a single colour is left) are recorded on that level. When the
/// attempt fails, both are synchronised back to the previous level, which undoes exactly these
/// changes.
pub(crate) struct BacktrackingSearch<'a> {
    graph: &'a Graph,
    num_colours: u32,
    domains: DomainStore,
    assignments: Assignments,
    inference: Box<dyn Inference>,
    phase: SearchPhase,
    initial_selector: MaxDegree<InOrderTieBreaker<NodeId, usize>>,
    variable_selector: MinimumRemainingValues<InOrderTieBreaker<NodeId, usize>>,
    value_selector: LeastConstrainingValue,
    statistics: EngineStatistics,
}

impl std::fmt::Debug for BacktrackingSearch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BacktrackingSearch")
            .field("phase", &self.phase)
            .field("decision_level", &self.domains.get_decision_level())
            .finish()
    }
}

impl<'a> BacktrackingSearch<'a> {
    /// Creates a search in its initial state: no node is coloured and every domain is the full
    /// palette.
    pub(crate) fn new(
        graph: &'a Graph,
        num_colours: u32,
        inference: Box<dyn Inference>,
    ) -> BacktrackingSearch<'a> {
        BacktrackingSearch {
            graph,
            num_colours,
            domains: DomainStore::new(graph.num_nodes(), num_colours),
            assignments: Assignments::new(graph.num_nodes()),
            inference,
            phase: SearchPhase::Initial,
            initial_selector: MaxDegree::default(),
            variable_selector: MinimumRemainingValues::default(),
            value_selector: LeastConstrainingValue,
            statistics: EngineStatistics::default(),
        }
    }

    /// Searches for a colouring; returns [`None`] if the graph cannot be coloured with the palette.
    pub(crate) fn solve(&mut self) -> Result<Option<Solution>, InvalidNodeError> {
        debug!(
            "Starting search over {} nodes with {} colours",
            self.graph.num_nodes(),
            self.num_colours
        );

        if !self.search()? {
            debug!("Search exhausted all colourings");
            return Ok(None);
        }

        let solution = self.assignments.to_solution();
        crayon_assert_simple!(
            solution.is_some(),
            "the search reported success without colouring every node"
        );
        debug!(
            "Search found a colouring after {} decisions",
            self.statistics.num_decisions
        );

        Ok(solution)
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[cfg(test)]
    pub(crate) fn domains(&self) -> &DomainStore {
        &self.domains
    }

    #[cfg(test)]
    pub(crate) fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub(crate) fn statistics(&self) -> EngineStatistics {
        self.statistics
    }

    pub(crate) fn propagation_statistics(&self) -> PropagationStatistics {
        self.inference.statistics()
    }

    /// Returns whether the current branch can be extended to a complete colouring; if it can, the
    /// assignments hold that colouring when this returns.
    fn search(&mut self) -> Result<bool, InvalidNodeError> {
        if self.assignments.is_complete() {
            return Ok(true);
        }

        let Some(node) = self.select_variable() else {
            return Ok(true);
        };

        let colours = {
            let context = SelectionContext::new(self.graph, &self.domains, &self.assignments);
            self.value_selector.order_values(&context, node)?
        };

        for colour in colours {
            if self.try_colour(node, colour)? {
                return Ok(true);
            }
            self.backtrack();
        }

        Ok(false)
    }

    fn select_variable(&mut self) -> Option<NodeId> {
        let context = SelectionContext::new(self.graph, &self.domains, &self.assignments);

        match self.phase {
            SearchPhase::Initial => {
                self.phase = SearchPhase::Ongoing;
                self.initial_selector.select_variable(&context)
            }
            SearchPhase::Ongoing => self.variable_selector.select_variable(&context),
        }
    }

    /// Tentatively colours `node` with `colour` on a new decision level and continues the search
    /// from there. When this returns `false`, the caller is responsible for undoing the level.
    fn try_colour(&mut self, node: NodeId, colour: Colour) -> Result<bool, InvalidNodeError> {
        self.domains.increase_decision_level();
        self.assignments.increase_decision_level();

        let decision_level = self.domains.get_decision_level() as u64;
        self.statistics.num_decisions += 1;
        self.statistics.peak_decision_level =
            self.statistics.peak_decision_level.max(decision_level);
        trace!("Decision {node} := {colour} at level {decision_level}");

        let _ = self.domains.fix(node, colour);
        self.assignments.assign(node, colour, AssignmentKind::Decision);

        if !self.inference.infer(
            self.graph,
            &mut self.domains,
            &self.assignments,
            node,
            colour,
        ) {
            return Ok(false);
        }

        if !self.assign_singletons() {
            return Ok(false);
        }

        self.search()
    }

    /// Colours every unassigned node which has a single colour left (only if the inference allows
    /// it); returns `false` if an unassigned node has no colour left.
    fn assign_singletons(&mut self) -> bool {
        let assigns_singletons = self.inference.assigns_singletons();
        let unassigned = self.assignments.unassigned_nodes().collect::<Vec<_>>();

        for node in unassigned {
            if self.domains.is_empty(node) {
                trace!("{node} has no colour left");
                return false;
            }

            if !assigns_singletons {
                continue;
            }

            if let Some(colour) = self.domains.fixed_colour(node) {
                trace!("Auto-assigning {node} := {colour}");
                self.statistics.num_auto_assignments += 1;
                self.assignments.assign(node, colour, AssignmentKind::Propagated);
            }
        }

        true
    }

    fn backtrack(&mut self) {
        let new_decision_level = self.domains.get_decision_level() - 1;
        crayon_assert_moderate!(
            self.assignments
                .records_on_current_decision_level()
                .first()
                .is_some_and(|record| record.kind == AssignmentKind::Decision),
            "every decision level starts with a decision"
        );
        trace!(
            "Backtracking to level {new_decision_level}, undoing {} assignments and {} removals",
            self.assignments.records_on_current_decision_level().len(),
            self.domains.num_removals_on_current_decision_level()
        );

        self.statistics.num_backtracks += 1;
        self.domains.synchronise(new_decision_level);
        self.assignments.synchronise(new_decision_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagation::InferenceMode;

    fn search(graph: &Graph, num_colours: u32) -> BacktrackingSearch<'_> {
        BacktrackingSearch::new(
            graph,
            num_colours,
            InferenceMode::ArcConsistency.create_inference(),
        )
    }

    #[test]
    fn triangle_is_coloured_with_three_colours() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).expect("valid graph");

        let solution = search(&graph, 3)
            .solve()
            .expect("nodes are valid")
            .expect("triangle is 3-colourable");

        assert!(solution.is_proper_colouring(&graph));
        assert_eq!(3, solution.num_colours_used());
    }

    #[test]
    fn triangle_cannot_be_coloured_with_two_colours() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).expect("valid graph");

        let result = search(&graph, 2).solve().expect("nodes are valid");

        assert!(result.is_none());
    }

    #[test]
    fn first_selection_switches_the_phase() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("valid graph");
        let mut search = search(&graph, 2);
        assert_eq!(SearchPhase::Initial, search.phase());

        let selected = search.select_variable();

        assert_eq!(Some(NodeId::new(1)), selected);
        assert_eq!(SearchPhase::Ongoing, search.phase());
    }

    #[test]
    fn first_decision_is_on_the_node_with_the_highest_degree() {
        // a star with centre 2: colouring the centre leaves every leaf with a single colour
        let graph = Graph::from_edges(4, [(2, 0), (2, 1), (2, 3)]).expect("valid graph");
        let mut search = search(&graph, 2);

        let solution = search
            .solve()
            .expect("nodes are valid")
            .expect("a star is 2-colourable");

        let records = search.assignments().records();
        assert_eq!(NodeId::new(2), records[0].node);
        assert_eq!(AssignmentKind::Decision, records[0].kind);
        assert!(records[1..]
            .iter()
            .all(|record| record.kind == AssignmentKind::Propagated));
        assert_eq!(1, search.statistics().num_decisions);
        assert_eq!(3, search.statistics().num_auto_assignments);
        assert!(solution.is_proper_colouring(&graph));
    }

    #[test]
    fn failed_search_restores_the_initial_state() {
        let graph =
            Graph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).expect("K4");
        let mut search = search(&graph, 3);
        let before = search.domains().snapshot();

        let result = search.solve().expect("nodes are valid");

        assert!(result.is_none());
        assert_eq!(before, search.domains().snapshot());
        assert_eq!(0, search.assignments().num_assigned());
        assert_eq!(0, search.domains().get_decision_level());
        assert_eq!(
            search.statistics().num_decisions,
            search.statistics().num_backtracks
        );
    }

    #[test]
    fn backtracking_undoes_exactly_the_current_decision_level() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("valid graph");
        let mut search = search(&graph, 2);
        let before = search.domains().snapshot();
        let (node, colour) = (NodeId::new(0), Colour::new(0));

        search.domains.increase_decision_level();
        search.assignments.increase_decision_level();
        let _ = search.domains.fix(node, colour);
        search
            .assignments
            .assign(node, colour, AssignmentKind::Decision);
        assert!(search.inference.infer(
            &graph,
            &mut search.domains,
            &search.assignments,
            node,
            colour
        ));
        assert!(search.assign_singletons());

        assert_eq!(3, search.domains().num_removals_on_current_decision_level());
        assert_eq!(
            3,
            search.assignments().records_on_current_decision_level().len()
        );

        search.backtrack();

        assert_eq!(before, search.domains().snapshot());
        assert_eq!(0, search.assignments().num_assigned());
        assert_eq!(1, search.statistics().num_backtracks);
    }

    #[test]
    fn every_inference_mode_finds_a_colouring_of_an_odd_cycle() {
        let graph =
            Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).expect("5-cycle");

        for mode in [
            InferenceMode::ArcConsistency,
            InferenceMode::ForwardChecking,
            InferenceMode::None,
        ] {
            let mut search = BacktrackingSearch::new(&graph, 3, mode.create_inference());
            let solution = search
                .solve()
                .expect("nodes are valid")
                .expect("a 5-cycle is 3-colourable");
            assert!(solution.is_proper_colouring(&graph), "{mode:?}");

            let mut search = BacktrackingSearch::new(&graph, 2, mode.create_inference());
            assert!(search.solve().expect("nodes are valid").is_none(), "{mode:?}");
        }
    }
}
