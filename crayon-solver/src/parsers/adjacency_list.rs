use std::io::BufRead;

use crayon_core::graph::Graph;

use super::non_blank_lines;
use super::parse_num_nodes;
use super::GraphParseError;

/// Parses a graph given as the list of neighbours of every node.
///
/// The first non-blank line contains the number of nodes `n`, followed by one line `i: j k ...`
/// for every node `i` in `0..n`, listing its neighbours. Nodes are numbered from 0. The lists
/// should describe a symmetric relation (if `j` is listed for `i`, then `i` is listed for `j`).
///
/// ```rust
/// # use crayon_solver::parsers::parse_adjacency_list;
/// let source = "3\n0: 1\n1: 0 2\n2: 1\n";
///
/// let graph = parse_adjacency_list(source.as_bytes()).unwrap();
///
/// assert_eq!(2, graph.num_edges());
/// ```
pub fn parse_adjacency_list(source: impl BufRead) -> Result<Graph, GraphParseError> {
    let mut lines = non_blank_lines(source);

    let (header_line, header) = lines.next().ok_or(GraphParseError::MissingHeader)??;
    let num_nodes = parse_num_nodes(header_line, &header)?;

    let mut lists = Vec::new();
    for line in lines {
        let (line_number, line) = line?;
        lists.push(parse_list(line_number, lists.len(), &line)?);
    }

    if lists.len() != num_nodes {
        return Err(GraphParseError::RowCountMismatch {
            expected: num_nodes,
            actual: lists.len(),
        });
    }

    Ok(Graph::from_adjacency_lists(lists)?)
}

/// Parses the line `node: neighbours...`; the node should be the next one in order.
fn parse_list(line_number: usize, node: usize, line: &str) -> Result<Vec<usize>, GraphParseError> {
    let Some((label, neighbours)) = line.split_once(':') else {
        return Err(GraphParseError::invalid_token(line_number, line.trim()));
    };

    if label.trim().parse::<usize>().ok() != Some(node) {
        return Err(GraphParseError::invalid_token(line_number, label.trim()));
    }

    neighbours
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| GraphParseError::invalid_token(line_number, token))
        })
        .collect()
}
