use crate::basic_types::Colour;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::crayon_assert_moderate;
use crate::crayon_assert_simple;
use crate::graph::NodeId;

/// The colours which are still viable for every node.
///
/// Each domain starts out as the full palette in ascending order. Colours are only ever removed
/// while moving forward in the search; every removal is recorded on a trail together with the
/// position the colour occupied, so that [`DomainStore::synchronise`] can put each colour back
/// exactly where it was. After undoing a decision level the domains are therefore identical
/// (including the order of the colours) to what they were before that level was opened.
#[derive(Clone, Debug)]
pub struct DomainStore {
    domains: KeyedVec<NodeId, Vec<Colour>>,
    trail: Trail<DomainChange>,
}

/// The removal of `colour` from the domain of `node`, where it was stored at `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DomainChange {
    node: NodeId,
    colour: Colour,
    position: usize,
}

/// A copy of the contents of every domain at some point in time, used to verify that undoing
/// changes restores the store exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainSnapshot {
    domains: KeyedVec<NodeId, Vec<Colour>>,
}

impl DomainSnapshot {
    pub fn domain(&self, node: NodeId) -> &[Colour] {
        &self.domains[node]
    }
}

impl DomainStore {
    /// Creates a store in which each of the `num_nodes` nodes can take every colour of the palette.
    pub fn new(num_nodes: usize, num_colours: u32) -> DomainStore {
        let mut domains = KeyedVec::default();
        domains.resize(num_nodes, Colour::palette(num_colours).collect());

        DomainStore {
            domains,
            trail: Trail::default(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.domains.len()
    }

    /// The colours which are still viable for `node`, in the order in which they appear in the
    /// palette.
    pub fn domain(&self, node: NodeId) -> &[Colour] {
        &self.domains[node]
    }

    pub fn size(&self, node: NodeId) -> usize {
        self.domains[node].len()
    }

    pub fn contains(&self, node: NodeId, colour: Colour) -> bool {
        self.domains[node].contains(&colour)
    }

    pub fn is_empty(&self, node: NodeId) -> bool {
        self.domains[node].is_empty()
    }

    /// Returns the colour of `node` if its domain consists of exactly one colour.
    pub fn fixed_colour(&self, node: NodeId) -> Option<Colour> {
        match self.domains[node].as_slice() {
            [colour] => Some(*colour),
            _ => None,
        }
    }

    /// Removes `colour` from the domain of `node`.
    ///
    /// Returns whether the colour was in the domain.
    pub fn remove(&mut self, node: NodeId, colour: Colour) -> bool {
        let Some(position) = self.domains[node].iter().position(|c| *c == colour) else {
            return false;
        };

        let _ = self.domains[node].remove(position);
        self.trail.push(DomainChange {
            node,
            colour,
            position,
        });

        true
    }

    /// Reduces the domain of `node` to the single colour `colour`, which should be in the domain.
    ///
    /// Returns the number of colours which were removed.
    pub fn fix(&mut self, node: NodeId, colour: Colour) -> usize {
        crayon_assert_simple!(
            self.contains(node, colour),
            "{node} can only be fixed to a colour in its domain"
        );

        let others = self.domains[node]
            .iter()
            .copied()
            .filter(|other| *other != colour)
            .collect::<Vec<_>>();
        for other in others.iter() {
            let _ = self.remove(node, *other);
        }

        others.len()
    }

    pub fn increase_decision_level(&mut self) {
        self.trail.increase_decision_level()
    }

    pub fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    /// Undoes every removal which was made above `new_decision_level`, most recent first.
    pub fn synchronise(&mut self, new_decision_level: usize) {
        for change in self.trail.synchronise(new_decision_level) {
            crayon_assert_moderate!(!self.domains[change.node].contains(&change.colour));
            self.domains[change.node].insert(change.position, change.colour);
        }
    }

    /// The number of colours which have been removed on the current decision level.
    pub fn num_removals_on_current_decision_level(&self) -> usize {
        self.trail
            .values_on_decision_level(self.trail.get_decision_level())
            .len()
    }

    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }
}
