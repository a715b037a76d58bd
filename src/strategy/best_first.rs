//! A* best-first search over waypoint orderings.
//!
//! # Algorithm
//!
//! A search state is `(visited mask, current waypoint)`. `g` is the distance
//! travelled so far and the frontier is ordered by `f = g + h`. A map from
//! state to its best node stops a state from being re-expanded at a worse
//! cost; an entry is replaced only by a strictly smaller `g`, and superseded
//! heap entries are skipped when popped.
//!
//! The heuristic estimates the remaining distance from the distance matrix:
//!
//! ```text
//! all visited:  h = d(current, end)
//! otherwise:    h = min d(current, u)                      nearest unvisited
//!                 + min d(u, v) * (|unvisited| - 1)        spanning estimate
//!                 + min d(u, end)                          reaching the end
//! ```
//!
//! with `u, v` ranging over unvisited waypoints. The last term is zero while
//! the end itself is unvisited. The sum is then scaled by a damping factor
//! (0.95 by default). The damping is a safety margin against
//! overestimation, not a proof of admissibility.
//!
//! For a fixed-endpoint trip the end waypoint is held back: it is offered only
//! as a direct goal edge once it is the last unvisited waypoint. A round trip
//! closes with a goal edge back to the start once every waypoint is visited.
//!
//! # Reference
//!
//! Hart, P.E., Nilsson, N.J. & Raphael, B. (1968). "A formal basis for the
//! heuristic determination of minimum cost paths", *IEEE Transactions on
//! Systems Science and Cybernetics* 4(2), 100-107.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::{unreachable_leg, TspStrategy};
use crate::config::PlannerConfig;
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::models::{Tour, TripQuery};

/// A* search strategy.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{CityId, RoadGraph, TripQuery};
/// use roadtrip_routing::distance::DistanceOracle;
/// use roadtrip_routing::strategy::{BestFirstSearch, TspStrategy};
///
/// let city = |n: &str| CityId::new(n, "XX");
/// let graph = RoadGraph::from_roads([
///     (city("A"), city("B"), 10),
///     (city("B"), city("C"), 5),
///     (city("C"), city("D"), 5),
///     (city("A"), city("D"), 30),
/// ]);
/// let query = TripQuery::new(&graph, city("A"), city("A"), [city("B"), city("C")]).unwrap();
///
/// let result = BestFirstSearch::default().run(&DistanceOracle::new(&graph), &query);
/// assert_eq!(result.distance, 30);
/// assert_eq!(result.path.first(), result.path.last());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BestFirstSearch {
    damping: f64,
}

impl BestFirstSearch {
    /// Strategy name reported in results.
    pub const NAME: &'static str = "A* Best-First Search";

    /// Largest waypoint count a `u64` visited mask can hold.
    pub const MASK_CEILING: usize = u64::BITS as usize;

    /// Creates the strategy with the given heuristic damping factor.
    pub fn new(damping: f64) -> Self {
        Self { damping }
    }

    /// The heuristic damping factor.
    pub fn damping(&self) -> f64 {
        self.damping
    }
}

impl Default for BestFirstSearch {
    fn default() -> Self {
        Self::new(PlannerConfig::DEFAULT_DAMPING)
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchNode {
    mask: u64,
    city: usize,
    g: u64,
    parent: Option<usize>,
}

/// Per-call search state.
struct Search<'a> {
    distances: &'a DistanceMatrix,
    damping: f64,
    n: usize,
    end: usize,
    nodes: Vec<SearchNode>,
    open: BinaryHeap<Reverse<(u64, usize)>>,
    best: HashMap<(u64, usize), (u64, usize)>,
}

impl<'a> Search<'a> {
    fn new(distances: &'a DistanceMatrix, damping: f64, end: usize) -> Self {
        Self {
            distances,
            damping,
            n: distances.size(),
            end,
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            best: HashMap::new(),
        }
    }

    fn unvisited(&self, mask: u64) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&i| mask & (1 << i) == 0)
    }

    /// Damped remaining-distance estimate, or `None` for a dead state that
    /// cannot reach some unvisited waypoint.
    fn heuristic(&self, mask: u64, current: usize) -> Option<u64> {
        let d = |a: usize, b: usize| self.distances.get(a, b);
        let unvisited: Vec<usize> = self.unvisited(mask).collect();

        let raw = if unvisited.is_empty() {
            d(current, self.end)?
        } else {
            let from_current = unvisited.iter().filter_map(|&u| d(current, u)).min()?;
            let to_end = unvisited.iter().filter_map(|&u| d(u, self.end)).min()?;
            let between = if unvisited.len() > 1 {
                let mut min = None;
                for (k, &u) in unvisited.iter().enumerate() {
                    for &v in &unvisited[k + 1..] {
                        if let Some(duv) = d(u, v) {
                            min = Some(min.map_or(duv, |m: u64| m.min(duv)));
                        }
                    }
                }
                min? * (unvisited.len() as u64 - 1)
            } else {
                0
            };
            from_current + between + to_end
        };

        Some((raw as f64 * self.damping) as u64)
    }

    /// Records a node for `(mask, city)` unless that state already has one
    /// with an equal or smaller `g`.
    fn offer(&mut self, mask: u64, city: usize, g: u64, h: u64, parent: Option<usize>) {
        if let Some(&(known, _)) = self.best.get(&(mask, city)) {
            if g >= known {
                return;
            }
        }
        let id = self.nodes.len();
        self.nodes.push(SearchNode {
            mask,
            city,
            g,
            parent,
        });
        self.best.insert((mask, city), (g, id));
        self.open.push(Reverse((g.saturating_add(h), id)));
    }

    fn is_current(&self, id: usize) -> bool {
        let node = self.nodes[id];
        self.best
            .get(&(node.mask, node.city))
            .is_some_and(|&(_, best_id)| best_id == id)
    }

    fn reconstruct(&self, goal: usize) -> Tour {
        let mut order = Vec::new();
        let mut cursor = Some(goal);
        while let Some(id) = cursor {
            let node = self.nodes[id];
            order.push(node.city);
            cursor = node.parent;
        }
        order.reverse();
        Tour {
            order,
            distance: self.nodes[goal].g,
        }
    }
}

impl TspStrategy for BestFirstSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn order(&self, query: &TripQuery, distances: &DistanceMatrix) -> Result<Tour, RoutingError> {
        let n = distances.size();
        if n > Self::MASK_CEILING {
            return Err(RoutingError::TooManyWaypoints {
                count: n,
                limit: Self::MASK_CEILING,
            });
        }

        let waypoints = query.waypoints();
        let start = waypoints.start_index();
        let end = waypoints.end_index();
        let round_trip = query.is_round_trip();
        let full = if n == 64 { u64::MAX } else { (1u64 << n) - 1 };

        let mut search = Search::new(distances, self.damping, end);
        let start_mask = 1u64 << start;
        let h0 = search
            .heuristic(start_mask, start)
            .ok_or_else(|| unreachable_leg(query, distances))?;
        search.offer(start_mask, start, 0, h0, None);

        while let Some(Reverse((_, id))) = search.open.pop() {
            if !search.is_current(id) {
                continue;
            }
            let node = search.nodes[id];

            if node.mask == full && node.city == end {
                return Ok(search.reconstruct(id));
            }

            if node.mask == full {
                // Round trip: every waypoint seen, close the loop.
                if let Some(leg) = distances.get(node.city, start) {
                    search.offer(full, start, node.g + leg, 0, Some(id));
                }
                continue;
            }

            let remaining = full & !node.mask;
            if !round_trip && remaining == 1 << end {
                // Only the end is left: always offer the direct goal edge.
                if let Some(leg) = distances.get(node.city, end) {
                    search.offer(full, end, node.g + leg, 0, Some(id));
                }
                continue;
            }

            for next in 0..n {
                if node.mask & (1 << next) != 0 || (!round_trip && next == end) {
                    continue;
                }
                let Some(leg) = distances.get(node.city, next) else {
                    continue;
                };
                let mask = node.mask | (1 << next);
                let Some(h) = search.heuristic(mask, next) else {
                    continue;
                };
                search.offer(mask, next, node.g + leg, h, Some(id));
            }
        }

        Err(unreachable_leg(query, distances))
    }
}
