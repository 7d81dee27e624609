use std::path::Path;

use clap::ValueEnum;

/// The format in which the graph is given, as requested on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArgument {
    /// Determine the format from the extension of the instance file.
    #[default]
    Auto,
    /// The DIMACS graph colouring format.
    Dimacs,
    /// An adjacency matrix of 0/1 entries.
    Matrix,
    /// A list of neighbours per node.
    Adjacency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileFormat {
    Dimacs,
    AdjacencyMatrix,
    AdjacencyList,
}

impl FileFormat {
    /// Resolves the format of `path`; returns [`None`] if the format is to be determined from an
    /// extension which is not recognised.
    pub(crate) fn resolve(argument: FormatArgument, path: &Path) -> Option<FileFormat> {
        match argument {
            FormatArgument::Auto => FileFormat::from_extension(path),
            FormatArgument::Dimacs => Some(FileFormat::Dimacs),
            FormatArgument::Matrix => Some(FileFormat::AdjacencyMatrix),
            FormatArgument::Adjacency => Some(FileFormat::AdjacencyList),
        }
    }

    fn from_extension(path: &Path) -> Option<FileFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("col") | Some("dimacs") => Some(FileFormat::Dimacs),
            Some("mat") | Some("txt") => Some(FileFormat::AdjacencyMatrix),
            Some("adj") => Some(FileFormat::AdjacencyList),
            _ => None,
        }
    }
}
