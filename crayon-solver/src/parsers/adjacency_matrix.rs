use std::io::BufRead;

use crayon_core::graph::Graph;

use super::non_blank_lines;
use super::parse_num_nodes;
use super::GraphParseError;

/// Parses a graph given as an adjacency matrix.
///
/// The first non-blank line contains the number of nodes `n`, followed by `n` rows of `n`
/// whitespace-separated entries which are either `0` or `1`. The entry in row `i` and column `j`
/// indicates whether nodes `i` and `j` are adjacent; the matrix should therefore be symmetric and
/// have zeroes on its diagonal.
///
/// ```rust
/// # use crayon_solver::parsers::parse_adjacency_matrix;
/// let source = "3\n0 1 0\n1 0 1\n0 1 0\n";
///
/// let graph = parse_adjacency_matrix(source.as_bytes()).unwrap();
///
/// assert_eq!(2, graph.num_edges());
/// ```
pub fn parse_adjacency_matrix(source: impl BufRead) -> Result<Graph, GraphParseError> {
    let mut lines = non_blank_lines(source);

    let (header_line, header) = lines.next().ok_or(GraphParseError::MissingHeader)??;
    let num_nodes = parse_num_nodes(header_line, &header)?;

    let mut rows = Vec::new();
    for line in lines {
        let (line_number, line) = line?;
        rows.push(parse_row(line_number, &line)?);
    }

    if rows.len() != num_nodes {
        return Err(GraphParseError::RowCountMismatch {
            expected: num_nodes,
            actual: rows.len(),
        });
    }

    if let Some((index, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != num_nodes)
    {
        return Err(GraphParseError::RowLengthMismatch {
            row: index + 1,
            expected: num_nodes,
            actual: row.len(),
        });
    }

    Ok(Graph::from_adjacency_matrix(&rows)?)
}

fn parse_row(line_number: usize, line: &str) -> Result<Vec<bool>, GraphParseError> {
    line.split_whitespace()
        .map(|token| match token {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(GraphParseError::invalid_token(line_number, token)),
        })
        .collect()
}
