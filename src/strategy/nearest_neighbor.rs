//! Nearest-neighbor ordering heuristic.
//!
//! Builds the tour greedily: from the current waypoint, always move to the
//! nearest unvisited one. For a fixed-endpoint trip the end city is held back
//! and appended as the final leg; a round trip closes with the leg back to
//! the start.
//!
//! # Complexity
//!
//! O(n²) over the distance matrix.
//!
//! # Reference
//!
//! This is the simplest TSP construction heuristic. It is not optimal but
//! provides a fast baseline for the exact and best-first strategies.

use super::TspStrategy;
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::models::{Tour, TripQuery};

/// Greedy nearest-neighbor strategy.
///
/// Ties are broken in waypoint-index order.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{CityId, RoadGraph, TripQuery};
/// use roadtrip_routing::distance::DistanceOracle;
/// use roadtrip_routing::strategy::{NearestNeighbor, TspStrategy};
///
/// let city = |n: &str| CityId::new(n, "XX");
/// let graph = RoadGraph::from_roads([
///     (city("A"), city("B"), 10),
///     (city("B"), city("C"), 5),
///     (city("C"), city("D"), 5),
///     (city("A"), city("D"), 30),
/// ]);
/// let query = TripQuery::new(&graph, city("A"), city("D"), [city("B"), city("C")]).unwrap();
///
/// let result = NearestNeighbor::new().run(&DistanceOracle::new(&graph), &query);
/// assert_eq!(result.distance, 20);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl NearestNeighbor {
    /// Strategy name reported in results.
    pub const NAME: &'static str = "Greedy Nearest Neighbor";

    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl TspStrategy for NearestNeighbor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn order(&self, query: &TripQuery, distances: &DistanceMatrix) -> Result<Tour, RoutingError> {
        let waypoints = query.waypoints();
        let n = distances.size();
        let start = waypoints.start_index();
        let end = waypoints.end_index();

        let mut visited = vec![false; n];
        visited[start] = true;
        // The end city is never a greedy candidate: it is the forced last leg.
        visited[end] = true;

        let mut order = vec![start];
        let mut current = start;
        let mut total = 0u64;

        loop {
            let candidates = (0..n).filter(|&i| !visited[i]);
            let next = match distances.nearest_neighbor(current, candidates) {
                Some(next) => next,
                None if visited.iter().all(|&v| v) => break,
                None => {
                    let stranded = (0..n).find(|&i| !visited[i]).unwrap_or(end);
                    return Err(RoutingError::no_path(
                        waypoints.city(current),
                        waypoints.city(stranded),
                    ));
                }
            };
            total += distances
                .get(current, next)
                .ok_or_else(|| RoutingError::no_path(waypoints.city(current), waypoints.city(next)))?;
            visited[next] = true;
            order.push(next);
            current = next;
        }

        total += distances
            .get(current, end)
            .ok_or_else(|| RoutingError::no_path(waypoints.city(current), waypoints.city(end)))?;
        order.push(end);

        Ok(Tour {
            order,
            distance: total,
        })
    }
}
