#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use crayon_solver::graph::Graph;
use crayon_solver::graph::NodeId;
use crayon_solver::results::SatisfactionResult;
use crayon_solver::Colour;
use crayon_solver::InferenceMode;
use crayon_solver::Solution;
use crayon_solver::Solver;
use crayon_solver::SolverOptions;

const INFERENCE_MODES: [InferenceMode; 3] = [
    InferenceMode::ArcConsistency,
    InferenceMode::ForwardChecking,
    InferenceMode::None,
];

fn solve_with(graph: &Graph, num_colours: u32, inference: InferenceMode) -> Option<Solution> {
    let mut solver = Solver::with_options(graph.clone(), num_colours, SolverOptions { inference })
        .expect("non-empty palette");

    match solver.satisfy().expect("nodes are valid") {
        SatisfactionResult::Satisfiable(solution) => {
            assert!(
                solution.is_proper_colouring(graph),
                "{inference:?} returned an improper colouring"
            );
            Some(solution)
        }
        SatisfactionResult::Unsatisfiable => None,
    }
}

fn solve(graph: &Graph, num_colours: u32) -> Option<Solution> {
    solve_with(graph, num_colours, InferenceMode::default())
}

fn cycle(num_nodes: usize) -> Graph {
    Graph::from_edges(num_nodes, (0..num_nodes).map(|i| (i, (i + 1) % num_nodes)))
        .expect("valid graph")
}

fn complete(num_nodes: usize) -> Graph {
    let edges = (0..num_nodes).flat_map(|a| (a + 1..num_nodes).map(move |b| (a, b)));
    Graph::from_edges(num_nodes, edges).expect("valid graph")
}

/// Decides by enumerating every assignment whether `graph` can be coloured with `num_colours`.
fn brute_force_colourable(graph: &Graph, num_colours: u32) -> bool {
    let num_nodes = graph.num_nodes();
    let mut colours = vec![0_u32; num_nodes];

    loop {
        let proper = graph
            .edges()
            .all(|(a, b)| colours[a.id as usize] != colours[b.id as usize]);
        if proper {
            return true;
        }

        // advance to the next assignment, as a counter in base `num_colours`
        let mut position = 0;
        loop {
            if position == num_nodes {
                return false;
            }
            colours[position] += 1;
            if colours[position] < num_colours {
                break;
            }
            colours[position] = 0;
            position += 1;
        }
    }
}

/// Every graph over `num_nodes` nodes, where bit `i` of the mask decides whether the `i`-th pair
/// of nodes is an edge.
fn all_graphs(num_nodes: usize) -> impl Iterator<Item = Graph> {
    let pairs = (0..num_nodes)
        .flat_map(|a| (a + 1..num_nodes).map(move |b| (a, b)))
        .collect::<Vec<_>>();

    (0..1_u32 << pairs.len()).map(move |mask| {
        let edges = pairs
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, pair)| *pair);
        Graph::from_edges(num_nodes, edges).expect("valid graph")
    })
}

/// A fixed sequence of graphs with `num_nodes` nodes in which every pair is an edge with
/// probability of roughly one half.
fn pseudo_random_graphs(num_nodes: usize, count: usize) -> Vec<Graph> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next_bit = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state & 1 == 1
    };

    (0..count)
        .map(|_| {
            let mut edges = Vec::new();
            for a in 0..num_nodes {
                for b in a + 1..num_nodes {
                    if next_bit() {
                        edges.push((a, b));
                    }
                }
            }
            Graph::from_edges(num_nodes, edges).expect("valid graph")
        })
        .collect()
}

#[test]
fn triangle_needs_three_colours() {
    let triangle = complete(3);

    let solution = solve(&triangle, 3).expect("3-colourable");
    assert_eq!(3, solution.num_colours_used());

    assert!(solve(&triangle, 2).is_none());
}

#[test]
fn isolated_node_gets_the_first_colour() {
    let graph = Graph::from_edges(1, []).expect("valid graph");

    let solution = solve(&graph, 1).expect("a single node can always be coloured");

    assert_eq!(Colour::new(0), solution.colour(NodeId::new(0)));
}

#[test]
fn disconnected_edges_are_coloured_independently() {
    let graph = Graph::from_edges(4, [(0, 1), (2, 3)]).expect("valid graph");

    let solution = solve(&graph, 2).expect("2-colourable");

    assert_ne!(solution.colour(NodeId::new(0)), solution.colour(NodeId::new(1)));
    assert_ne!(solution.colour(NodeId::new(2)), solution.colour(NodeId::new(3)));
}

#[test]
fn odd_cycle_needs_three_colours() {
    let five_cycle = cycle(5);

    for mode in INFERENCE_MODES {
        assert!(solve_with(&five_cycle, 2, mode).is_none(), "{mode:?}");
        assert!(solve_with(&five_cycle, 3, mode).is_some(), "{mode:?}");
    }
}

#[test]
fn even_cycle_needs_two_colours() {
    let six_cycle = cycle(6);

    let solution = solve(&six_cycle, 2).expect("2-colourable");

    assert_eq!(2, solution.num_colours_used());
}

#[test]
fn complete_graph_needs_as_many_colours_as_nodes() {
    for k in 2..=6 {
        let graph = complete(k);

        let solution = solve(&graph, k as u32).expect("K_k is k-colourable");
        assert_eq!(k, solution.num_colours_used());

        assert!(solve(&graph, k as u32 - 1).is_none(), "K_{k}");
    }
}

#[test]
fn graph_without_nodes_is_trivially_coloured() {
    let graph = Graph::from_edges(0, []).expect("valid graph");

    let solution = solve(&graph, 1).expect("nothing to colour");

    assert_eq!(0, solution.num_nodes());
}

#[test]
fn search_is_deterministic() {
    for graph in pseudo_random_graphs(8, 10) {
        for mode in INFERENCE_MODES {
            let first = solve_with(&graph, 4, mode);
            let second = solve_with(&graph, 4, mode);
            assert_eq!(first, second, "{mode:?}");
        }
    }
}

#[test]
fn repeated_satisfy_calls_start_from_scratch() {
    let mut solver = Solver::new(cycle(7), 3).expect("non-empty palette");

    let first = solver.satisfy().expect("nodes are valid");
    let second = solver.satisfy().expect("nodes are valid");

    assert!(first.is_satisfiable());
    assert_eq!(first, second);
}

#[test]
fn arc_consistency_decides_easy_graphs_without_backtracking() {
    // a wheel with an even rim: the hub and the rim are forced after two decisions
    let graph = Graph::from_edges(
        7,
        [
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (0, 6),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 1),
        ],
    )
    .expect("valid graph");
    let mut solver = Solver::new(graph, 3).expect("non-empty palette");

    let result = solver.satisfy().expect("nodes are valid");

    assert!(result.is_satisfiable());
    assert_eq!(0, solver.statistics().engine_statistics.num_backtracks);
}

#[test]
fn every_small_graph_agrees_with_brute_force() {
    for num_nodes in 1..=5 {
        for graph in all_graphs(num_nodes) {
            for num_colours in 1..=3 {
                let expected = brute_force_colourable(&graph, num_colours);

                for mode in INFERENCE_MODES {
                    assert_eq!(
                        expected,
                        solve_with(&graph, num_colours, mode).is_some(),
                        "{mode:?} with {num_colours} colours on {:?}",
                        graph.edges().collect::<Vec<_>>()
                    );
                }
            }
        }
    }
}

#[test]
fn larger_graphs_agree_with_brute_force() {
    for graph in pseudo_random_graphs(8, 20) {
        for num_colours in 2..=4 {
            let expected = brute_force_colourable(&graph, num_colours);

            for mode in INFERENCE_MODES {
                assert_eq!(
                    expected,
                    solve_with(&graph, num_colours, mode).is_some(),
                    "{mode:?} with {num_colours} colours on {:?}",
                    graph.edges().collect::<Vec<_>>()
                );
            }
        }
    }
}
