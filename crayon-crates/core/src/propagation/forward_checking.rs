use log::trace;

use super::Inference;
use super::PropagationStatistics;
use crate::basic_types::Colour;
use crate::engine::Assignments;
use crate::engine::DomainStore;
use crate::graph::Graph;
use crate::graph::NodeId;

/// Removes the colour of a newly coloured node from the domains of its neighbours.
///
/// In contrast to [`ArcConsistency`](super::ArcConsistency), the removals are not propagated any
/// further, so a neighbour which is left with a single colour may still clash with another such
/// neighbour; these nodes are coloured by the search itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForwardChecking {
    statistics: PropagationStatistics,
}

impl Inference for ForwardChecking {
    fn infer(
        &mut self,
        graph: &Graph,
        domains: &mut DomainStore,
        _assignments: &Assignments,
        node: NodeId,
        colour: Colour,
    ) -> bool {
        self.statistics.num_calls += 1;

        for &neighbour in graph.neighbours(node) {
            self.statistics.num_revisions += 1;
            if !domains.remove(neighbour, colour) {
                continue;
            }

            self.statistics.num_values_pruned += 1;
            if domains.is_empty(neighbour) {
                trace!("Wipeout of {neighbour} after colouring {node} with {colour}");
                self.statistics.num_wipeouts += 1;
                return false;
            }
        }

        true
    }

    fn statistics(&self) -> PropagationStatistics {
        self.statistics
    }
}
