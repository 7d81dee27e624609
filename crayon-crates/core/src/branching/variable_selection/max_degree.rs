use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::crayon_assert_simple;
use crate::graph::NodeId;

/// A [`VariableSelector`] which selects the unassigned node with the largest number of neighbours
/// (also known as the degree heuristic).
///
/// Ties are broken by the [`TieBreaker`]; with the default [`InOrderTieBreaker`] the node with the
/// smallest index wins.
pub struct MaxDegree<TieBreaking> {
    tie_breaker: TieBreaking,
}

impl<TieBreaking> std::fmt::Debug for MaxDegree<TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxDegree").finish()
    }
}

impl Default for MaxDegree<InOrderTieBreaker<NodeId, usize>> {
    fn default() -> Self {
        MaxDegree::with_tie_breaker(InOrderTieBreaker::new(Direction::Maximum))
    }
}

impl<TieBreaking: TieBreaker<NodeId, usize>> MaxDegree<TieBreaking> {
    pub fn with_tie_breaker(tie_breaker: TieBreaking) -> Self {
        crayon_assert_simple!(
            tie_breaker.get_direction() == Direction::Maximum,
            "The provided tie-breaker to MaxDegree attempts to find the Minimum value
             instead of the Maximum value, please ensure that you have passed the correct tie-breaker"
        );
        MaxDegree { tie_breaker }
    }
}

impl<TieBreaking> VariableSelector for MaxDegree<TieBreaking>
where
    TieBreaking: TieBreaker<NodeId, usize>,
{
    fn select_variable(&mut self, context: &SelectionContext) -> Option<NodeId> {
        context
            .unassigned_nodes()
            .for_each(|node| self.tie_breaker.consider(node, context.degree(node)));
        self.tie_breaker.select()
    }
}
