//! Contains the heuristics which guide the search.
//!
//! A heuristic consists of two parts:
//! - A [`VariableSelector`] which decides which node is coloured next; the search starts with
//!   [`MaxDegree`] and then switches to [`MinimumRemainingValues`].
//! - A [`ValueSelector`] which decides in which order the colours of that node are attempted; the
//!   search uses [`LeastConstrainingValue`].
//!
//! Both are given a [`SelectionContext`] which provides read-only access to the graph, the
//! domains and the assignments. Ties are decided by a [`TieBreaker`], by default the
//! [`InOrderTieBreaker`], which makes the selection deterministic.
mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use selection_context::SelectionContext;
pub use tie_breaking::*;
pub use value_selection::*;
pub use variable_selection::*;
