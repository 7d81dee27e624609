use log::trace;

use super::ArcQueue;
use super::DirectedArc;
use super::Inference;
use super::PropagationStatistics;
use crate::basic_types::Colour;
use crate::crayon_assert_advanced;
use crate::engine::Assignments;
use crate::engine::DomainStore;
use crate::graph::Graph;
use crate::graph::NodeId;

/// Maintains arc consistency (AC-3) of the constraint "adjacent nodes have different colours".
///
/// Every call starts from all directed arcs of the graph and revises them until either no domain
/// changes anymore or a domain becomes empty (a wipeout).
#[derive(Debug, Default, Clone)]
pub struct ArcConsistency {
    queue: ArcQueue,
    statistics: PropagationStatistics,
}

impl ArcConsistency {
    /// Prunes `domains` until they are arc consistent.
    ///
    /// Returns `false` if a domain was wiped out; the domains are then left in the partially
    /// pruned state and should be restored by the caller.
    pub fn propagate(&mut self, graph: &Graph, domains: &mut DomainStore) -> bool {
        self.statistics.num_calls += 1;
        self.queue.clear();

        for node in graph.nodes() {
            for &neighbour in graph.neighbours(node) {
                let _ = self.queue.enqueue(DirectedArc::new(node, neighbour));
            }
        }

        while let Some(arc) = self.queue.pop() {
            self.statistics.num_revisions += 1;

            let num_removed = revise(domains, arc.source, arc.target);
            if num_removed == 0 {
                continue;
            }
            self.statistics.num_values_pruned += num_removed as u64;

            if domains.is_empty(arc.source) {
                trace!("Wipeout of {} while revising against {}", arc.source, arc.target);
                self.statistics.num_wipeouts += 1;
                self.queue.clear();
                return false;
            }

            for &neighbour in graph.neighbours(arc.source) {
                if neighbour != arc.target {
                    let _ = self.queue.enqueue(DirectedArc::new(neighbour, arc.source));
                }
            }
        }

        crayon_assert_advanced!(is_arc_consistent(graph, domains));

        true
    }
}

impl Inference for ArcConsistency {
    fn infer(
        &mut self,
        graph: &Graph,
        domains: &mut DomainStore,
        _assignments: &Assignments,
        _node: NodeId,
        _colour: Colour,
    ) -> bool {
        self.propagate(graph, domains)
    }

    fn assigns_singletons(&self) -> bool {
        true
    }

    fn statistics(&self) -> PropagationStatistics {
        self.statistics
    }
}

/// Runs AC-3 over `domains` with a fresh [`ArcConsistency`]; returns `false` on a wipeout.
pub fn propagate(graph: &Graph, domains: &mut DomainStore) -> bool {
    ArcConsistency::default().propagate(graph, domains)
}

/// Removes every colour from the domain of `source` which has no support in the domain of
/// `target`, i.e. for which `target` has no other colour left.
///
/// For the inequality constraint this only removes `c` when the domain of `target` is exactly
/// `{c}`. Returns the number of removed colours.
pub fn revise(domains: &mut DomainStore, source: NodeId, target: NodeId) -> usize {
    let unsupported = domains
        .domain(source)
        .iter()
        .copied()
        .filter(|colour| !has_support(domains, target, *colour))
        .collect::<Vec<_>>();

    for colour in unsupported.iter() {
        let _ = domains.remove(source, *colour);
    }

    unsupported.len()
}

/// Returns whether every arc of the graph is consistent, without modifying the domains.
pub fn is_arc_consistent(graph: &Graph, domains: &DomainStore) -> bool {
    graph.nodes().all(|node| {
        graph.neighbours(node).iter().all(|neighbour| {
            domains
                .domain(node)
                .iter()
                .all(|colour| has_support(domains, *neighbour, *colour))
        })
    })
}

fn has_support(domains: &DomainStore, target: NodeId, colour: Colour) -> bool {
    domains.domain(target).iter().any(|other| *other != colour)
}
