//! Contains structures for tie-breaking; these structures decide between two nodes when there is
//! a tie between them (for example, during variable selection two nodes can have the same number
//! of remaining colours).
//!
//! The following example shows how the [`InOrderTieBreaker`] selects the first node with the
//! lowest value that it has been given.
//!
//! ```rust
//! # use crayon_core::branching::InOrderTieBreaker;
//! # use crayon_core::branching::Direction;
//! # use crayon_core::branching::TieBreaker;
//! # use crayon_core::graph::NodeId;
//! let mut breaker = InOrderTieBreaker::new(Direction::Minimum);
//!
//! breaker.consider(NodeId::new(0), 10);
//! breaker.consider(NodeId::new(1), 5);
//! breaker.consider(NodeId::new(2), 5);
//!
//! assert_eq!(breaker.select(), Some(NodeId::new(1)));
//! ```

mod in_order_tie_breaker;
mod tie_breaker;

pub use in_order_tie_breaker::*;
pub use tie_breaker::*;
