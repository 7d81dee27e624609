use std::collections::VecDeque;

use crate::containers::HashSet;
use crate::graph::NodeId;

/// The directed arc `(source, target)`, which asks for the domain of `source` to be revised
/// against the domain of `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectedArc {
    pub source: NodeId,
    pub target: NodeId,
}

impl DirectedArc {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        DirectedArc { source, target }
    }
}

/// A first-in-first-out queue of [`DirectedArc`]s which holds every arc at most once.
///
/// Enqueueing an arc which is already waiting in the queue has no effect; once an arc has been
/// popped it can be enqueued again.
#[derive(Debug, Default, Clone)]
pub struct ArcQueue {
    queue: VecDeque<DirectedArc>,
    is_enqueued: HashSet<DirectedArc>,
}

impl ArcQueue {
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Adds `arc` to the back of the queue; returns `false` if it was already enqueued.
    pub fn enqueue(&mut self, arc: DirectedArc) -> bool {
        if !self.is_enqueued.insert(arc) {
            return false;
        }

        self.queue.push_back(arc);
        true
    }

    pub fn pop(&mut self) -> Option<DirectedArc> {
        let arc = self.queue.pop_front()?;
        let _ = self.is_enqueued.remove(&arc);
        Some(arc)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.is_enqueued.clear();
    }
}
