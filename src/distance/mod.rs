//! Shortest-path distances.
//!
//! Provides the Dijkstra distance oracle over the road graph and the dense
//! per-query waypoint distance matrix built from it.

mod matrix;
mod oracle;

pub use matrix::DistanceMatrix;
pub use oracle::{DistanceOracle, ShortestPath};
