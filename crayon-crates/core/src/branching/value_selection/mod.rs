//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait is the [`ValueSelector::order_values`] method.
mod least_constraining_value;
mod value_selector;

pub use least_constraining_value::*;
pub use value_selector::ValueSelector;
