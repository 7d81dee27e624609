//! Parsers which read a [`Graph`](crayon_core::graph::Graph) from one of the supported text
//! formats:
//!  - the DIMACS graph colouring format ([`parse_dimacs`]),
//!  - an adjacency matrix of `0`/`1` entries ([`parse_adjacency_matrix`]),
//!  - a list of neighbours per node ([`parse_adjacency_list`]).
//!
//! Every parser validates the graph it reads; an asymmetric adjacency relation or a reference to
//! a node which does not exist results in a [`GraphParseError`] rather than being repaired.
mod adjacency_list;
mod adjacency_matrix;
mod dimacs;
mod graph_parse_error;

use std::io::BufRead;

use crayon_core::graph::Graph;
pub use adjacency_list::parse_adjacency_list;
pub use adjacency_matrix::parse_adjacency_matrix;
pub use dimacs::parse_dimacs;
pub use graph_parse_error::GraphParseError;

/// Iterates over the lines of `source` which contain anything other than whitespace, together
/// with their (1-based) line number.
fn non_blank_lines(
    source: impl BufRead,
) -> impl Iterator<Item = Result<(usize, String), GraphParseError>> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|line| (index + 1, line)).map_err(GraphParseError::from))
        .filter(|line| {
            line.as_ref()
                .map_or(true, |(_, contents)| !contents.trim().is_empty())
        })
}

/// Parses the line containing only the number of nodes.
fn parse_num_nodes(line_number: usize, line: &str) -> Result<usize, GraphParseError> {
    let mut tokens = line.split_whitespace();

    match (tokens.next().and_then(parse_node_count), tokens.next()) {
        (Some(num_nodes), None) => Ok(num_nodes),
        _ => Err(GraphParseError::InvalidHeader { line: line_number }),
    }
}

/// Parses a number of nodes; counts which no [`Graph`] can hold are rejected before anything is
/// allocated for them.
fn parse_node_count(token: &str) -> Option<usize> {
    token
        .parse::<usize>()
        .ok()
        .filter(|num_nodes| *num_nodes <= Graph::MAX_NUM_NODES)
}
