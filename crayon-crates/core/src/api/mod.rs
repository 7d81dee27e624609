pub mod results;
pub(crate) mod solver;
