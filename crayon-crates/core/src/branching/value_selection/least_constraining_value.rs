use itertools::Itertools;

use crate::basic_types::Colour;
use crate::basic_types::InvalidNodeError;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::graph::NodeId;

/// A [`ValueSelector`] which orders the colours of a node by the number of neighbours which still
/// have that colour in their domain, such that the colour which rules out the fewest options of the
/// neighbours is attempted first.
///
/// Colours with the same count keep their order in the domain, which is ascending.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConstrainingValue;

impl ValueSelector for LeastConstrainingValue {
    fn order_values(
        &mut self,
        context: &SelectionContext,
        node: NodeId,
    ) -> Result<Vec<Colour>, InvalidNodeError> {
        let domain = context.domain(node)?;

        Ok(domain
            .iter()
            .copied()
            .sorted_by_key(|colour| context.num_neighbours_with_colour(node, *colour))
            .collect())
    }
}
