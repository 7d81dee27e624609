use super::PropagationStatistics;
use crate::basic_types::Colour;
use crate::engine::Assignments;
use crate::engine::DomainStore;
use crate::graph::Graph;
use crate::graph::NodeId;

/// The reasoning which is performed after the search has tentatively coloured a node.
///
/// When [`Inference::infer`] is called, the domain of `node` has already been reduced to
/// `colour`. An implementation may remove further colours from the domains (which the search
/// undoes when it backtracks) and reports whether the current branch can still lead to a
/// solution. Returning `false` is not an error; it tells the search to try the next colour.
pub trait Inference {
    fn infer(
        &mut self,
        graph: &Graph,
        domains: &mut DomainStore,
        assignments: &Assignments,
        node: NodeId,
        colour: Colour,
    ) -> bool;

    /// Whether the domains after a successful [`Inference::infer`] are strong enough that every
    /// unassigned node with a single remaining colour can be given that colour without checking
    /// its neighbours.
    fn assigns_singletons(&self) -> bool {
        false
    }

    fn statistics(&self) -> PropagationStatistics;
}
