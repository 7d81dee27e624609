//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait is the [`VariableSelector::select_variable`] method.
//!
//! The search uses [`MaxDegree`] for its very first selection and [`MinimumRemainingValues`] for
//! every selection after that.
mod max_degree;
mod minimum_remaining_values;
mod variable_selector;

pub use max_degree::*;
pub use minimum_remaining_values::*;
pub use variable_selector::VariableSelector;
