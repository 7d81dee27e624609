use crate::basic_types::Colour;
use crate::basic_types::InvalidNodeError;
use crate::engine::Assignments;
use crate::engine::DomainStore;
use crate::graph::Graph;
use crate::graph::NodeId;
#[cfg(doc)]
use crate::branching::ValueSelector;
#[cfg(doc)]
use crate::branching::VariableSelector;

/// The context provided to the [`VariableSelector`] and [`ValueSelector`], it allows the
/// retrieval of the graph, the current domains and which nodes have been coloured.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    graph: &'a Graph,
    domains: &'a DomainStore,
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub fn new(
        graph: &'a Graph,
        domains: &'a DomainStore,
        assignments: &'a Assignments,
    ) -> SelectionContext<'a> {
        SelectionContext {
            graph,
            domains,
            assignments,
        }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Returns the nodes which have not been given a colour yet, in ascending order.
    pub fn unassigned_nodes(&self) -> impl Iterator<Item = NodeId> + 'a {
        self.assignments.unassigned_nodes()
    }

    pub fn is_assigned(&self, node: NodeId) -> bool {
        self.assignments.is_assigned(node)
    }

    /// The number of neighbours of `node` in the graph.
    pub fn degree(&self, node: NodeId) -> usize {
        self.graph.degree(node)
    }

    /// The number of colours which are still viable for `node`.
    pub fn domain_size(&self, node: NodeId) -> usize {
        self.domains.size(node)
    }

    /// The colours which are still viable for `node`, in ascending order.
    pub fn domain(&self, node: NodeId) -> Result<&'a [Colour], InvalidNodeError> {
        self.graph.check_node(node)?;
        Ok(self.domains.domain(node))
    }

    /// The number of neighbours of `node` which still have `colour` in their domain; these are the
    /// neighbours which would lose an option if `node` were given `colour`.
    pub fn num_neighbours_with_colour(&self, node: NodeId, colour: Colour) -> usize {
        self.graph
            .neighbours(node)
            .iter()
            .filter(|neighbour| self.domains.contains(**neighbour, colour))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_of_a_node_outside_the_graph_is_an_error() {
        let graph = Graph::from_edges(2, [(0, 1)]).expect("valid graph");
        let domains = DomainStore::new(2, 2);
        let assignments = Assignments::new(2);
        let context = SelectionContext::new(&graph, &domains, &assignments);

        assert_eq!(
            Err(InvalidNodeError {
                node: 2,
                num_nodes: 2
            }),
            context.domain(NodeId::new(2))
        );
        assert_eq!(2, context.domain(NodeId::new(1)).map(|d| d.len()).unwrap());
    }

    #[test]
    fn neighbours_with_colour_only_counts_viable_colours() {
        let graph = Graph::from_edges(3, [(0, 1), (0, 2)]).expect("valid graph");
        let mut domains = DomainStore::new(3, 2);
        let _ = domains.remove(NodeId::new(2), Colour::new(0));
        let assignments = Assignments::new(3);
        let context = SelectionContext::new(&graph, &domains, &assignments);

        assert_eq!(1, context.num_neighbours_with_colour(NodeId::new(0), Colour::new(0)));
        assert_eq!(2, context.num_neighbours_with_colour(NodeId::new(0), Colour::new(1)));
    }
}
