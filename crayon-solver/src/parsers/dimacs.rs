use std::io::BufRead;

use crayon_core::graph::Graph;
use log::debug;

use super::non_blank_lines;
use super::parse_node_count;
use super::GraphParseError;

/// Parses a graph in the DIMACS graph colouring format.
///
/// The file consists of comment lines (starting with `c`), a single header `p edge <nodes>
/// <edges>` and one line `e <u> <v>` per edge, where the nodes are numbered from 1. An edge may be
/// listed in both directions; it is added to the graph once. The number of edge lines should match
/// the header.
///
/// ```rust
/// # use crayon_solver::parsers::parse_dimacs;
/// let source = "c a path of three nodes\np edge 3 2\ne 1 2\ne 2 3\n";
///
/// let graph = parse_dimacs(source.as_bytes()).unwrap();
///
/// assert_eq!(3, graph.num_nodes());
/// assert_eq!(2, graph.num_edges());
/// ```
pub fn parse_dimacs(source: impl BufRead) -> Result<Graph, GraphParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut edges = Vec::new();

    for line in non_blank_lines(source) {
        let (line_number, line) = line?;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("c") => continue,
            Some("p") => {
                if header.is_some() {
                    return Err(GraphParseError::InvalidHeader { line: line_number });
                }
                header = Some(parse_header(line_number, tokens)?);
            }
            Some("e") => {
                if header.is_none() {
                    return Err(GraphParseError::MissingHeader);
                }
                edges.push(parse_edge(line_number, tokens)?);
            }
            Some(token) => return Err(GraphParseError::invalid_token(line_number, token)),
            None => unreachable!("blank lines are skipped"),
        }
    }

    let Some((num_nodes, num_edges)) = header else {
        return Err(GraphParseError::MissingHeader);
    };

    if edges.len() != num_edges {
        return Err(GraphParseError::EdgeCountMismatch {
            expected: num_edges,
            read: edges.len(),
        });
    }

    debug!("Parsed DIMACS header with {num_nodes} nodes and {num_edges} edge lines");

    Ok(Graph::from_edges(num_nodes, edges)?)
}

fn parse_header<'a>(
    line_number: usize,
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<(usize, usize), GraphParseError> {
    let invalid = || GraphParseError::InvalidHeader { line: line_number };

    if !matches!(tokens.next(), Some("edge") | Some("col")) {
        return Err(invalid());
    }

    let num_nodes = tokens
        .next()
        .and_then(parse_node_count)
        .ok_or_else(invalid)?;
    let num_edges = tokens
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or_else(invalid)?;

    if tokens.next().is_some() {
        return Err(invalid());
    }

    Ok((num_nodes, num_edges))
}

fn parse_edge<'a>(
    line_number: usize,
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<(usize, usize), GraphParseError> {
    let mut parse_node = || -> Result<usize, GraphParseError> {
        let token = tokens
            .next()
            .ok_or_else(|| GraphParseError::invalid_token(line_number, "<end of line>"))?;

        match token.parse::<usize>() {
            Ok(node) if node > 0 => Ok(node - 1),
            _ => Err(GraphParseError::invalid_token(line_number, token)),
        }
    };

    let from = parse_node()?;
    let to = parse_node()?;

    if let Some(token) = tokens.next() {
        return Err(GraphParseError::invalid_token(line_number, token));
    }

    Ok((from, to))
}
