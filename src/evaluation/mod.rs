//! Route expansion and distance evaluation.

mod expander;

pub use expander::{path_distance, PathExpander};
