use crate::basic_types::Colour;
use crate::basic_types::InvalidNodeError;
use crate::branching::SelectionContext;
use crate::graph::NodeId;

/// A trait containing the interface for [`ValueSelector`]s, specifying the method required for
/// deciding in which order the colours of a node are attempted.
pub trait ValueSelector {
    /// Returns every colour in the current domain of `node`, in the order in which the search
    /// should attempt them.
    ///
    /// Fails with an [`InvalidNodeError`] if `node` is not part of the graph.
    fn order_values(
        &mut self,
        context: &SelectionContext,
        node: NodeId,
    ) -> Result<Vec<Colour>, InvalidNodeError>;
}
