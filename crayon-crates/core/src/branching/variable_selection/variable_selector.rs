use crate::branching::SelectionContext;
use crate::graph::NodeId;

/// A trait containing the interface for [`VariableSelector`]s, specifying the method required for
/// selecting the next node to colour.
pub trait VariableSelector {
    /// Determines which node to colour next, given the current [`SelectionContext`]. Only nodes
    /// which have not been assigned a colour are eligible.
    ///
    /// Returns [`None`] if every node has been assigned a colour.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<NodeId>;
}
