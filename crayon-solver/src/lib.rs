//! # Crayon
//! Crayon decides whether the nodes of a graph can be coloured with a fixed number of colours
//! such that no two adjacent nodes share a colour, and finds such a colouring if it exists.
//!
//! The search is a backtracking search which maintains arc consistency after every tentative
//! colouring. The first node to colour is the one with the most neighbours; after that, the node
//! with the fewest remaining colours is chosen, and its colours are attempted in the order of how
//! few options they take away from its neighbours.
//!
//! # Using Crayon
//! A [`Graph`](graph::Graph) can be created directly from its edges, or read from a file with one
//! of the [`parsers`]. It is then passed to the [`Solver`] together with the number of colours:
//! ```rust
//! # use crayon_solver::graph::Graph;
//! # use crayon_solver::graph::NodeId;
//! # use crayon_solver::results::SatisfactionResult;
//! # use crayon_solver::Solver;
//! // A triangle
//! let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
//!
//! // Two colours are not enough to colour a triangle
//! let mut solver = Solver::new(graph.clone(), 2).unwrap();
//! assert_eq!(solver.satisfy().unwrap(), SatisfactionResult::Unsatisfiable);
//!
//! // But three colours are
//! let mut solver = Solver::new(graph, 3).unwrap();
//! let SatisfactionResult::Satisfiable(solution) = solver.satisfy().unwrap() else {
//!     panic!("a triangle can be coloured with three colours");
//! };
//! assert_ne!(solution.colour(NodeId::new(0)), solution.colour(NodeId::new(1)));
//! assert!(solution.is_proper_colouring(solver.graph()));
//! ```
//!
//! # Choosing the inference
//! By default the solver maintains arc consistency. The [`SolverOptions`] allow using forward
//! checking or no inference at all instead; every option finds a colouring whenever one exists.
//! ```rust
//! # use crayon_solver::graph::Graph;
//! # use crayon_solver::InferenceMode;
//! # use crayon_solver::Solver;
//! # use crayon_solver::SolverOptions;
//! let graph = Graph::from_edges(2, [(0, 1)]).unwrap();
//! let options = SolverOptions {
//!     inference: InferenceMode::ForwardChecking,
//! };
//!
//! let mut solver = Solver::with_options(graph, 2, options).unwrap();
//! assert!(solver.satisfy().unwrap().is_satisfiable());
//! ```
pub mod parsers;

pub use crayon_core::*;
