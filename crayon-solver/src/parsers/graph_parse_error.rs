use crayon_core::MalformedGraphError;
use thiserror::Error;

/// The errors which can occur while reading a graph from a file.
///
/// Line and row numbers are 1-based, such that they match what an editor shows.
#[derive(Debug, Error)]
pub enum GraphParseError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("the file does not describe the number of nodes")]
    MissingHeader,

    #[error("line {line} is an invalid header")]
    InvalidHeader { line: usize },

    #[error("unexpected token '{token}' on line {line}")]
    InvalidToken { line: usize, token: String },

    #[error("expected to parse {expected} edges, but parsed {read}")]
    EdgeCountMismatch { expected: usize, read: usize },

    #[error("row {row} has {actual} entries, but the matrix has {expected} columns")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} rows, but parsed {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("the graph is malformed: {0}")]
    Malformed(#[from] MalformedGraphError),
}

impl GraphParseError {
    pub(crate) fn invalid_token(line: usize, token: impl Into<String>) -> Self {
        GraphParseError::InvalidToken {
            line,
            token: token.into(),
        }
    }
}
