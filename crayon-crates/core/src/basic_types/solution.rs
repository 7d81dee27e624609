use crate::basic_types::Colour;
use crate::containers::KeyedVec;
use crate::graph::Graph;
use crate::graph::NodeId;

/// A colour for every node of a graph.
///
/// A solution returned by the [`Solver`](crate::Solver) is always a proper colouring of the graph
/// it was computed for; see [`Solution::is_proper_colouring`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    colours: KeyedVec<NodeId, Colour>,
}

impl Solution {
    pub fn new(colours: Vec<Colour>) -> Solution {
        Solution {
            colours: KeyedVec::from(colours),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.colours.len()
    }

    /// The colour of `node`.
    ///
    /// # Panics
    /// If `node` does not belong to the graph for which the solution was found.
    pub fn colour(&self, node: NodeId) -> Colour {
        self.colours[node]
    }

    /// Iterates over the nodes together with their colour, in ascending order of node.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Colour)> + '_ {
        self.colours
            .iter_with_keys()
            .map(|(node, colour)| (node, *colour))
    }

    /// The number of distinct colours which are used.
    pub fn num_colours_used(&self) -> usize {
        let mut used = self.colours.iter().copied().collect::<Vec<_>>();
        used.sort_unstable();
        used.dedup();
        used.len()
    }

    /// Returns the edges of `graph` whose endpoints share a colour.
    pub fn conflicting_edges<'a>(
        &'a self,
        graph: &'a Graph,
    ) -> impl Iterator<Item = (NodeId, NodeId)> + 'a {
        graph
            .edges()
            .filter(|(a, b)| self.colours[*a] == self.colours[*b])
    }

    /// Returns whether every node of `graph` has a colour and no two adjacent nodes share one.
    pub fn is_proper_colouring(&self, graph: &Graph) -> bool {
        self.num_nodes() == graph.num_nodes() && self.conflicting_edges(graph).next().is_none()
    }
}
