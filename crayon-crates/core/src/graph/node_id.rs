use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::StorageKey;
use crate::crayon_assert_simple;
use crate::graph::Graph;

/// The identifier of a node in a [`Graph`]; every node is a variable of the colouring problem.
///
/// Node identifiers are 0-based.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub id: u32,
}

impl NodeId {
    pub fn new(id: u32) -> Self {
        NodeId { id }
    }
}

impl StorageKey for NodeId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        crayon_assert_simple!(
            index < Graph::MAX_NUM_NODES,
            "index {index} does not fit in a node identifier"
        );
        NodeId::new(index as u32)
    }
}

impl Debug for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
