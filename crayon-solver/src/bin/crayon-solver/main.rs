mod file_format;
mod result;

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use crayon_solver::convert_case::Case;
use crayon_solver::graph::Graph;
use crayon_solver::parsers::parse_adjacency_list;
use crayon_solver::parsers::parse_adjacency_matrix;
use crayon_solver::parsers::parse_dimacs;
use crayon_solver::results::SatisfactionResult;
use crayon_solver::statistics::configure_statistic_logging;
use crayon_solver::InferenceMode;
use crayon_solver::Solution;
use crayon_solver::Solver;
use crayon_solver::SolverOptions;
use file_format::FileFormat;
use file_format::FormatArgument;
use log::error;
use log::info;
use log::warn;
use log::Level;
use log::LevelFilter;
use result::CrayonError;
use result::CrayonResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The graph to colour. Unless '--format' is given, the file should have one of the following
    /// extensions:
    ///  - '*.col' or '*.dimacs' for graphs in the DIMACS graph colouring format,
    ///  - '*.mat' or '*.txt' for adjacency matrices,
    ///  - '*.adj' for adjacency lists.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The number of colours which may be used.
    ///
    /// Possible values: u32, at least 1
    #[arg(short = 'k', long = "colours", default_value_t = 3, verbatim_doc_comment)]
    num_colours: u32,

    /// The inference which is performed after every tentative colouring.
    #[arg(long, value_enum, default_value_t)]
    inference: InferenceMode,

    /// The format of the instance file.
    #[arg(long, value_enum, default_value_t)]
    format: FormatArgument,

    /// Enables logging of debug messages.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    #[arg(short = 's', long = "log-statistics")]
    log_statistics: bool,

    /// Omits the timestamp from log messages.
    #[arg(long = "omit-timestamp")]
    omit_timestamp: bool,

    /// Omits the call site from log messages.
    #[arg(long = "omit-call-site")]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("c stat", Case::Camel);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> CrayonResult<()> {
    let args = Args::parse();

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    )?;

    if crayon_solver::asserts::CRAYON_ASSERT_LEVEL_DEFINITION
        >= crayon_solver::asserts::CRAYON_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the Crayon assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            crayon_solver::asserts::CRAYON_ASSERT_LEVEL_DEFINITION
        );
    };

    let file_format = FileFormat::resolve(args.format, &args.instance_path)
        .ok_or_else(|| CrayonError::invalid_instance(args.instance_path.display()))?;
    let graph = read_graph(&args.instance_path, file_format)?;
    info!(
        "Read a graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );

    let options = SolverOptions {
        inference: args.inference,
    };
    let mut solver = Solver::with_options(graph, args.num_colours, options)?;

    let start = Instant::now();
    let result = solver.satisfy()?;
    let elapsed = start.elapsed();

    match result {
        SatisfactionResult::Satisfiable(solution) => print_solution(&solution),
        SatisfactionResult::Unsatisfiable => println!("Solution does not exist."),
    }
    println!("\nExecution time: {} ms.", elapsed.as_millis());

    solver.log_statistics(args.verbose);

    Ok(())
}

fn read_graph(path: &Path, file_format: FileFormat) -> CrayonResult<Graph> {
    let source = BufReader::new(File::open(path)?);

    let graph = match file_format {
        FileFormat::Dimacs => parse_dimacs(source)?,
        FileFormat::AdjacencyMatrix => parse_adjacency_matrix(source)?,
        FileFormat::AdjacencyList => parse_adjacency_list(source)?,
    };

    Ok(graph)
}

/// Prints the colour of every node, numbering the nodes from 1.
fn print_solution(solution: &Solution) {
    println!("Node\t->\tColour");
    println!("---------------------");
    for (node, colour) in solution.iter() {
        println!("{}\t->\t{colour}", node.id + 1);
    }
}
