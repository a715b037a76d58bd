//! Held–Karp exact ordering.
//!
//! # Algorithm
//!
//! `dp[mask][i]` is the cheapest way to start at the start waypoint, visit
//! exactly the waypoints in `mask`, and stop at `i`. The start bit is always
//! set. Base case `dp[{start}][start] = 0`; every other cell starts at +∞.
//!
//! ```text
//! dp[mask][i] = min over j in mask\{i} of dp[mask\{i}][j] + d(j, i)
//! ```
//!
//! A fixed-endpoint trip reads `dp[full][end]`. A round trip adds the closing
//! leg: `min over i != start of dp[full][i] + d(i, start)`. Parent pointers
//! record the minimizing `j` for reconstruction.
//!
//! # Complexity
//!
//! O(n²·2ⁿ) time and O(n·2ⁿ) space. Exact, but only tractable for small n;
//! the waypoint ceiling is a hard scalability boundary.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of the SIAM* 10(1), 196-210.

use super::{unreachable_leg, TspStrategy};
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::models::{Tour, TripQuery};

const INF: u64 = u64::MAX;
const NO_PARENT: u8 = u8::MAX;

/// Exact bitmask dynamic-programming strategy.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{CityId, RoadGraph, TripQuery};
/// use roadtrip_routing::distance::DistanceOracle;
/// use roadtrip_routing::strategy::{HeldKarp, TspStrategy};
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
/// let result = HeldKarp::default().run(&DistanceOracle::new(&graph), &query);
/// assert_eq!(result.distance, 20);
/// assert_eq!(result.path, vec![city("A"), city("B"), city("C"), city("D")]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeldKarp {
    max_waypoints: usize,
}

impl HeldKarp {
    /// Strategy name reported in results.
    pub const NAME: &'static str = "Held-Karp Dynamic Programming";

    /// Hard cap on the configurable ceiling. The tables hold n·2ⁿ cells, so
    /// this keeps the cell count addressable on the target.
    pub const MASK_CEILING: usize = usize::BITS as usize / 2;

    /// Creates the strategy, refusing queries with more than `max_waypoints`
    /// distinct waypoints.
    pub fn new(max_waypoints: usize) -> Self {
        Self {
            max_waypoints: max_waypoints.min(Self::MASK_CEILING),
        }
    }

    /// Largest accepted waypoint count.
    pub fn max_waypoints(&self) -> usize {
        self.max_waypoints
    }
}

impl Default for HeldKarp {
    fn default() -> Self {
        Self::new(crate::config::PlannerConfig::DEFAULT_MAX_EXACT_WAYPOINTS)
    }
}

impl TspStrategy for HeldKarp {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn order(&self, query: &TripQuery, distances: &DistanceMatrix) -> Result<Tour, RoutingError> {
        let n = distances.size();
        if n > self.max_waypoints {
            return Err(RoutingError::TooManyWaypoints {
                count: n,
                limit: self.max_waypoints,
            });
        }

        let waypoints = query.waypoints();
        let start = waypoints.start_index();
        let end = waypoints.end_index();
        let full = (1usize << n) - 1;
        let cell = |mask: usize, i: usize| mask * n + i;

        let mut dp = vec![INF; (full + 1) * n];
        let mut parent = vec![NO_PARENT; (full + 1) * n];
        dp[cell(1 << start, start)] = 0;

        for mask in 1..=full {
            if mask & (1 << start) == 0 {
                continue;
            }
            for i in 0..n {
                if mask & (1 << i) == 0 || mask == 1 << i {
                    continue;
                }
                let prev_mask = mask ^ (1 << i);
                let mut best = INF;
                let mut best_j = NO_PARENT;
                for j in 0..n {
                    if prev_mask & (1 << j) == 0 {
                        continue;
                    }
                    let base = dp[cell(prev_mask, j)];
                    if base == INF {
                        continue;
                    }
                    let Some(leg) = distances.get(j, i) else {
                        continue;
                    };
                    let cost = base + leg;
                    if cost < best {
                        best = cost;
                        best_j = j as u8;
                    }
                }
                dp[cell(mask, i)] = best;
                parent[cell(mask, i)] = best_j;
            }
        }

        // Pick the final waypoint and the total cost.
        let (last, distance) = if query.is_round_trip() {
            (0..n)
                .filter(|&i| i != start && dp[cell(full, i)] != INF)
                .filter_map(|i| Some((i, dp[cell(full, i)] + distances.get(i, start)?)))
                .min_by_key(|&(i, cost)| (cost, i))
                .ok_or_else(|| unreachable_leg(query, distances))?
        } else {
            match dp[cell(full, end)] {
                INF => return Err(unreachable_leg(query, distances)),
                cost => (end, cost),
            }
        };

        let mut order = Vec::with_capacity(n + 1);
        let mut mask = full;
        let mut current = last;
        while current != start {
            order.push(current);
            let p = parent[cell(mask, current)];
            mask ^= 1 << current;
            current = usize::from(p);
        }
        order.push(start);
        order.reverse();
        if query.is_round_trip() {
            order.push(start);
        }

        Ok(Tour { order, distance })
    }
}
