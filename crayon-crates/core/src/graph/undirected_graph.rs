use log::debug;

use super::NodeId;
use crate::basic_types::InvalidNodeError;
use crate::basic_types::MalformedGraphError;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// An undirected graph without self-loops over the nodes `0..num_nodes`.
///
/// The adjacency relation is symmetric: `b` is a neighbour of `a` if and only if `a` is a
/// neighbour of `b`. The neighbours of every node are stored in ascending order. Once constructed,
/// a graph is never mutated; the solver only ever borrows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    neighbours: KeyedVec<NodeId, Vec<NodeId>>,
    num_edges: usize,
}

impl Graph {
    /// The largest number of nodes a graph can have, such that every node fits in a [`NodeId`].
    pub const MAX_NUM_NODES: usize = u32::MAX as usize;

    /// Creates a graph from a list of undirected edges.
    ///
    /// An edge may be given in either direction and may occur more than once; it is added to the
    /// graph a single time.
    pub fn from_edges(
        num_nodes: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Graph, MalformedGraphError> {
        check_num_nodes(num_nodes)?;

        let mut seen: HashSet<(usize, usize)> = HashSet::default();
        let mut neighbours = vec![Vec::new(); num_nodes];

        for (a, b) in edges {
            check_in_range(a, num_nodes)?;
            check_in_range(b, num_nodes)?;
            if a == b {
                return Err(MalformedGraphError::SelfLoop { node: a });
            }

            if seen.insert((a.min(b), a.max(b))) {
                neighbours[a].push(NodeId::create_from_index(b));
                neighbours[b].push(NodeId::create_from_index(a));
            }
        }

        Ok(Graph::from_symmetric_lists(neighbours, seen.len()))
    }

    /// Creates a graph from the adjacency list of every node, where the list at index `i` contains
    /// the neighbours of node `i`.
    ///
    /// The lists should already describe a symmetric relation; this is validated rather than
    /// repaired.
    pub fn from_adjacency_lists(lists: Vec<Vec<usize>>) -> Result<Graph, MalformedGraphError> {
        let num_nodes = lists.len();
        check_num_nodes(num_nodes)?;

        let mut arcs: HashSet<(usize, usize)> = HashSet::default();

        for (node, list) in lists.iter().enumerate() {
            for &neighbour in list {
                check_in_range(neighbour, num_nodes)?;
                if neighbour == node {
                    return Err(MalformedGraphError::SelfLoop { node });
                }
                if !arcs.insert((node, neighbour)) {
                    return Err(MalformedGraphError::DuplicateNeighbour { node, neighbour });
                }
            }
        }

        if let Some(&(from, to)) = arcs
            .iter()
            .filter(|(from, to)| !arcs.contains(&(*to, *from)))
            .min()
        {
            return Err(MalformedGraphError::AsymmetricAdjacency { from, to });
        }

        let num_edges = arcs.len() / 2;
        let neighbours = lists
            .into_iter()
            .map(|list| list.into_iter().map(NodeId::create_from_index).collect())
            .collect();

        Ok(Graph::from_symmetric_lists(neighbours, num_edges))
    }

    /// Creates a graph from a square adjacency matrix, where `rows[i][j]` indicates whether nodes
    /// `i` and `j` are adjacent.
    ///
    /// The matrix should be symmetric with an empty diagonal.
    pub fn from_adjacency_matrix(rows: &[Vec<bool>]) -> Result<Graph, MalformedGraphError> {
        let num_nodes = rows.len();
        check_num_nodes(num_nodes)?;

        if let Some((row, entries)) = rows
            .iter()
            .enumerate()
            .find(|(_, entries)| entries.len() != num_nodes)
        {
            return Err(MalformedGraphError::NonSquareMatrix {
                row,
                length: entries.len(),
                num_nodes,
            });
        }

        let mut lists = vec![Vec::new(); num_nodes];
        for (from, entries) in rows.iter().enumerate() {
            for (to, &adjacent) in entries.iter().enumerate() {
                if !adjacent {
                    continue;
                }
                if from == to {
                    return Err(MalformedGraphError::SelfLoop { node: from });
                }
                if !rows[to][from] {
                    return Err(MalformedGraphError::AsymmetricAdjacency { from, to });
                }
                lists[from].push(to);
            }
        }

        Graph::from_adjacency_lists(lists)
    }

    fn from_symmetric_lists(mut neighbours: Vec<Vec<NodeId>>, num_edges: usize) -> Graph {
        for list in neighbours.iter_mut() {
            list.sort_unstable();
        }

        debug!(
            "Created graph with {} nodes and {} edges",
            neighbours.len(),
            num_edges
        );

        Graph {
            neighbours: KeyedVec::from(neighbours),
            num_edges,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.neighbours.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the nodes of the graph in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbours.keys()
    }

    /// Returns the neighbours of `node` in ascending order.
    pub fn neighbours(&self, node: NodeId) -> &[NodeId] {
        &self.neighbours[node]
    }

    /// The number of neighbours of `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbours[node].len()
    }

    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbours[a].binary_search(&b).is_ok()
    }

    /// Returns every edge once, as a pair `(a, b)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.neighbours.iter_with_keys().flat_map(|(node, list)| {
            list.iter()
                .filter(move |neighbour| node < **neighbour)
                .map(move |neighbour| (node, *neighbour))
        })
    }

    /// Verifies that `node` belongs to this graph.
    pub fn check_node(&self, node: NodeId) -> Result<(), InvalidNodeError> {
        if node.index() < self.num_nodes() {
            Ok(())
        } else {
            Err(InvalidNodeError {
                node: node.id,
                num_nodes: self.num_nodes(),
            })
        }
    }
}

fn check_num_nodes(num_nodes: usize) -> Result<(), MalformedGraphError> {
    if num_nodes <= Graph::MAX_NUM_NODES {
        Ok(())
    } else {
        Err(MalformedGraphError::TooManyNodes {
            num_nodes,
            max_num_nodes: Graph::MAX_NUM_NODES,
        })
    }
}

fn check_in_range(node: usize, num_nodes: usize) -> Result<(), MalformedGraphError> {
    if node < num_nodes {
        Ok(())
    } else {
        Err(MalformedGraphError::NodeOutOfRange { node, num_nodes })
    }
}
