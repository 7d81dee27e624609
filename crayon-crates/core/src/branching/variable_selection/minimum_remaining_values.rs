use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::crayon_assert_simple;
use crate::graph::NodeId;

/// A [`VariableSelector`] which selects the unassigned node with the smallest domain (also known as
/// first-fail).
///
/// The inference performed by the search guarantees that an unassigned node never has an empty
/// domain when a node is selected; meeting one is a violated invariant and panics.
pub struct MinimumRemainingValues<TieBreaking> {
    tie_breaker: TieBreaking,
}

impl<TieBreaking> std::fmt::Debug for MinimumRemainingValues<TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinimumRemainingValues").finish()
    }
}

impl Default for MinimumRemainingValues<InOrderTieBreaker<NodeId, usize>> {
    fn default() -> Self {
        MinimumRemainingValues::with_tie_breaker(InOrderTieBreaker::new(Direction::Minimum))
    }
}

impl<TieBreaking: TieBreaker<NodeId, usize>> MinimumRemainingValues<TieBreaking> {
    pub fn with_tie_breaker(tie_breaker: TieBreaking) -> Self {
        crayon_assert_simple!(
            tie_breaker.get_direction() == Direction::Minimum,
            "The provided tie-breaker to MinimumRemainingValues attempts to find the Maximum value
             instead of the Minimum value, please ensure that you have passed the correct tie-breaker"
        );
        MinimumRemainingValues { tie_breaker }
    }
}

impl<TieBreaking> VariableSelector for MinimumRemainingValues<TieBreaking>
where
    TieBreaking: TieBreaker<NodeId, usize>,
{
    fn select_variable(&mut self, context: &SelectionContext) -> Option<NodeId> {
        context.unassigned_nodes().for_each(|node| {
            let domain_size = context.domain_size(node);
            crayon_assert_simple!(
                domain_size > 0,
                "{node} is unassigned but has an empty domain"
            );
            self.tie_breaker.consider(node, domain_size)
        });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Colour;
    use crate::engine::AssignmentKind;
    use crate::engine::Assignments;
    use crate::engine::DomainStore;
    use crate::graph::Graph;

    #[test]
    fn node_with_smallest_domain_is_selected() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("valid graph");
        let mut domains = DomainStore::new(3, 3);
        let _ = domains.remove(NodeId::new(2), Colour::new(0));
        let assignments = Assignments::new(3);
        let context = SelectionContext::new(&graph, &domains, &assignments);

        let selected = MinimumRemainingValues::default().select_variable(&context);

        assert_eq!(Some(NodeId::new(2)), selected);
    }

    #[test]
    fn ties_are_broken_by_smallest_index() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("valid graph");
        let domains = DomainStore::new(3, 3);
        let assignments = Assignments::new(3);
        let context = SelectionContext::new(&graph, &domains, &assignments);

        let selected = MinimumRemainingValues::default().select_variable(&context);

        assert_eq!(Some(NodeId::new(0)), selected);
    }

    #[test]
    fn assigned_nodes_with_singleton_domains_are_skipped() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("valid graph");
        let mut domains = DomainStore::new(3, 3);
        let _ = domains.fix(NodeId::new(0), Colour::new(1));
        let _ = domains.remove(NodeId::new(2), Colour::new(2));
        let mut assignments = Assignments::new(3);
        assignments.assign(NodeId::new(0), Colour::new(1), AssignmentKind::Decision);
        let context = SelectionContext::new(&graph, &domains, &assignments);

        let selected = MinimumRemainingValues::default().select_variable(&context);

        assert_eq!(Some(NodeId::new(2)), selected);
    }

    #[test]
    #[should_panic]
    fn unassigned_node_with_empty_domain_panics() {
        let graph = Graph::from_edges(1, []).expect("valid graph");
        let mut domains = DomainStore::new(1, 1);
        let _ = domains.remove(NodeId::new(0), Colour::new(0));
        let assignments = Assignments::new(1);
        let context = SelectionContext::new(&graph, &domains, &assignments);

        let _ = MinimumRemainingValues::default().select_variable(&context);
    }

    #[test]
    #[should_panic]
    fn tie_breaker_looking_for_the_maximum_is_rejected() {
        let _ = MinimumRemainingValues::with_tie_breaker(InOrderTieBreaker::<NodeId, usize>::new(
            Direction::Maximum,
        ));
    }
}
