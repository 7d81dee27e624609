use super::Inference;
use super::PropagationStatistics;
use crate::basic_types::Colour;
use crate::engine::Assignments;
use crate::engine::DomainStore;
use crate::graph::Graph;
use crate::graph::NodeId;

/// Performs no pruning at all; a colour is only rejected when a neighbour which has already been
/// coloured uses it. This results in plain chronological backtracking.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsistencyCheck {
    statistics: PropagationStatistics,
}

impl Inference for ConsistencyCheck {
    fn infer(
        &mut self,
        graph: &Graph,
        _domains: &mut DomainStore,
        assignments: &Assignments,
        node: NodeId,
        colour: Colour,
    ) -> bool {
        self.statistics.num_calls += 1;
        self.statistics.num_revisions += graph.degree(node) as u64;

        let consistent = graph
            .neighbours(node)
            .iter()
            .all(|neighbour| assignments.colour(*neighbour) != Some(colour));
        if !consistent {
            self.statistics.num_wipeouts += 1;
        }

        consistent
    }

    fn statistics(&self) -> PropagationStatistics {
        self.statistics
    }
}
