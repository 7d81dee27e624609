use crate::basic_types::Colour;
use crate::basic_types::Solution;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::crayon_assert_simple;
use crate::graph::NodeId;

/// The colours which have been given to nodes on the current branch of the search.
///
/// Next to the colour of every node, the assignments keep an ordered record of which nodes were
/// coloured on which decision level, such that backtracking unassigns exactly the nodes coloured
/// on the levels which are undone.
#[derive(Clone, Debug)]
pub struct Assignments {
    values: KeyedVec<NodeId, Option<Colour>>,
    trail: Trail<AssignmentRecord>,
}

/// How a node received its colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentKind {
    /// The colour was chosen by the search.
    Decision,
    /// The colour was the only one left in the domain of the node after propagation.
    Propagated,
}

/// A single entry of the assignment record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignmentRecord {
    pub node: NodeId,
    pub colour: Colour,
    pub kind: AssignmentKind,
}

impl Assignments {
    pub fn new(num_nodes: usize) -> Assignments {
        let mut values = KeyedVec::default();
        values.resize(num_nodes, None);

        Assignments {
            values,
            trail: Trail::default(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.values.len()
    }

    pub fn colour(&self, node: NodeId) -> Option<Colour> {
        self.values[node]
    }

    pub fn is_assigned(&self, node: NodeId) -> bool {
        self.values[node].is_some()
    }

    pub fn num_assigned(&self) -> usize {
        self.trail.len()
    }

    /// Returns whether every node has been given a colour.
    pub fn is_complete(&self) -> bool {
        self.num_assigned() == self.num_nodes()
    }

    pub fn unassigned_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.values
            .iter_with_keys()
            .filter(|(_, value)| value.is_none())
            .map(|(node, _)| node)
    }

    /// Gives `node` the colour `colour`; the node should not have a colour yet.
    pub fn assign(&mut self, node: NodeId, colour: Colour, kind: AssignmentKind) {
        crayon_assert_simple!(
            self.values[node].is_none(),
            "{node} is assigned twice on the same branch"
        );

        self.values[node] = Some(colour);
        self.trail.push(AssignmentRecord { node, colour, kind });
    }

    /// The assignments made on the current branch, in the order in which they were made.
    pub fn records(&self) -> &[AssignmentRecord] {
        &self.trail
    }

    pub fn records_on_current_decision_level(&self) -> &[AssignmentRecord] {
        self.trail
            .values_on_decision_level(self.trail.get_decision_level())
    }

    pub fn increase_decision_level(&mut self) {
        self.trail.increase_decision_level()
    }

    pub fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    /// Unassigns every node which was assigned above `new_decision_level`.
    pub fn synchronise(&mut self, new_decision_level: usize) {
        for record in self.trail.synchronise(new_decision_level) {
            self.values[record.node] = None;
        }
    }

    /// Converts a complete assignment into a [`Solution`]; returns [`None`] if some node has not
    /// been given a colour.
    pub fn to_solution(&self) -> Option<Solution> {
        self.values
            .iter()
            .copied()
            .collect::<Option<Vec<_>>>()
            .map(Solution::new)
    }
}
