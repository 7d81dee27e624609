#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::run_solver_on;
use regex::Regex;

const TRIANGLE_DIMACS: &str = "c triangle\np edge 3 3\ne 1 2\ne 2 3\ne 1 3\n";

/// Extracts the colour of every node from the output table, in the order in which they are
/// printed.
fn parse_table(stdout: &str) -> Vec<(u32, u32)> {
    let row = Regex::new(r"^(\d+)\t->\t(\d+)$").unwrap();

    stdout
        .lines()
        .filter_map(|line| row.captures(line))
        .map(|captures| (captures[1].parse().unwrap(), captures[2].parse().unwrap()))
        .collect()
}

fn has_timing_line(stdout: &str) -> bool {
    Regex::new(r"(?m)^Execution time: \d+ ms\.$")
        .unwrap()
        .is_match(stdout)
}

#[test]
fn triangle_is_printed_as_a_table() {
    let run = run_solver_on("triangle.col", TRIANGLE_DIMACS, &["-k", "3"]);

    assert!(run.status.success(), "{}", run.stderr);
    assert!(run.stdout.contains("Node\t->\tColour\n---------------------\n"));

    let table = parse_table(&run.stdout);
    assert_eq!(vec![1, 2, 3], table.iter().map(|(node, _)| *node).collect::<Vec<_>>());
    let mut colours = table.iter().map(|(_, colour)| *colour).collect::<Vec<_>>();
    colours.sort();
    assert_eq!(vec![0, 1, 2], colours);
    assert!(has_timing_line(&run.stdout));
}

#[test]
fn missing_colouring_is_reported() {
    let run = run_solver_on("triangle_two.col", TRIANGLE_DIMACS, &["--colours", "2"]);

    assert!(run.status.success(), "{}", run.stderr);
    assert!(run.stdout.contains("Solution does not exist."));
    assert!(parse_table(&run.stdout).is_empty());
    assert!(has_timing_line(&run.stdout));
}

#[test]
fn adjacency_matrix_is_read_by_extension() {
    let matrix = "4\n0 1 0 0\n1 0 0 0\n0 0 0 1\n0 0 1 0\n";
    let run = run_solver_on("two_edges.txt", matrix, &["-k", "2"]);

    assert!(run.status.success(), "{}", run.stderr);
    let table = parse_table(&run.stdout);
    assert_eq!(4, table.len());
    assert_ne!(table[0].1, table[1].1);
    assert_ne!(table[2].1, table[3].1);
}

#[test]
fn format_can_be_given_explicitly() {
    let lists = "3\n0: 1 2\n1: 0 2\n2: 0 1\n";
    let run = run_solver_on(
        "triangle.graph",
        lists,
        &["--format", "adjacency", "--inference", "forward-checking"],
    );

    assert!(run.status.success(), "{}", run.stderr);
    assert_eq!(3, parse_table(&run.stdout).len());
}

#[test]
fn statistics_are_logged_on_request() {
    let run = run_solver_on("triangle_stats.col", TRIANGLE_DIMACS, &["-s", "-v"]);

    assert!(run.status.success(), "{}", run.stderr);
    let statistic = Regex::new(r"(?m)^c stat engineNumDecisions=\d+$").unwrap();
    assert!(statistic.is_match(&run.stdout), "{}", run.stdout);
}

#[test]
fn unsupported_extension_fails() {
    let run = run_solver_on("triangle.cnf", TRIANGLE_DIMACS, &[]);

    assert_eq!(Some(1), run.status.code());
    assert!(run.stdout.contains("is not supported"));
}

#[test]
fn asymmetric_matrix_fails() {
    let run = run_solver_on("asymmetric.mat", "2\n0 1\n0 0\n", &[]);

    assert_eq!(Some(1), run.status.code());
    assert!(run.stdout.contains("Execution failed"));
}

#[test]
fn oversized_node_count_fails() {
    let run = run_solver_on("oversized.col", "p edge 1000000000000000000 0\n", &[]);

    assert_eq!(Some(1), run.status.code());
    assert!(run.stdout.contains("line 1 is an invalid header"));
}

#[test]
fn empty_palette_fails() {
    let run = run_solver_on("triangle_empty.col", TRIANGLE_DIMACS, &["-k", "0"]);

    assert_eq!(Some(1), run.status.code());
    assert!(run.stdout.contains("number of colours should be positive"));
}
