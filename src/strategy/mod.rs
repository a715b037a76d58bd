//! Waypoint-ordering strategies.
//!
//! - [`NearestNeighbor`] — Greedy nearest-neighbor baseline, O(n²)
//! - [`HeldKarp`] — Exact bitmask dynamic programming, O(n²·2ⁿ)
//! - [`BestFirstSearch`] — A* over (visited set, current waypoint) states
//!
//! Every strategy shares the same protocol: build a [`DistanceMatrix`] for the
//! query's waypoints, order them into a [`Tour`], then expand that tour into a
//! road path with [`PathExpander`]. Only the ordering step differs, so
//! "distance" and "path" mean the same thing for every strategy.

mod best_first;
mod held_karp;
mod nearest_neighbor;

use std::time::Instant;

use serde::{Deserialize, Serialize};

pub use best_first::BestFirstSearch;
pub use held_karp::HeldKarp;
pub use nearest_neighbor::NearestNeighbor;

use crate::config::PlannerConfig;
use crate::distance::{DistanceMatrix, DistanceOracle};
use crate::error::RoutingError;
use crate::evaluation::PathExpander;
use crate::models::{Route, RouteResult, Tour, TripQuery};

/// A solver for the fixed-endpoint / round-trip waypoint ordering problem.
///
/// Implementors supply [`TspStrategy::order`]; the provided methods handle
/// trivial queries, matrix construction, expansion, timing and failure
/// reporting. Implementations hold only configuration, and all search state
/// is allocated per call, so one instance may serve concurrent queries.
pub trait TspStrategy: Send + Sync {
    /// Human-readable strategy name, used in results and logs.
    fn name(&self) -> &'static str;

    /// Orders the query's waypoints.
    ///
    /// Called only for non-trivial queries: a round trip with at least one
    /// other waypoint, or a fixed-endpoint trip with at least three.
    fn order(&self, query: &TripQuery, distances: &DistanceMatrix) -> Result<Tour, RoutingError>;

    /// Solves `query` and expands the result into a full road path.
    fn solve(&self, oracle: &DistanceOracle<'_>, query: &TripQuery) -> Result<Route, RoutingError> {
        if let Some(route) = trivial_route(oracle, query) {
            return route;
        }

        let distances = DistanceMatrix::from_waypoints(oracle, query.waypoints());
        let tour = self.order(query, &distances)?;
        let path = PathExpander::new(*oracle).expand_tour(query.waypoints(), &tour)?;
        Ok(Route {
            path,
            distance: tour.distance,
        })
    }

    /// Solves `query`, timing the call and folding failures into the
    /// sentinel [`RouteResult`].
    fn run(&self, oracle: &DistanceOracle<'_>, query: &TripQuery) -> RouteResult {
        let started = Instant::now();
        let outcome = self.solve(oracle, query);
        let elapsed = started.elapsed();

        match outcome {
            Ok(route) => {
                log::debug!(
                    "{}: {} waypoints, distance {} in {:?}",
                    self.name(),
                    query.waypoints().len(),
                    route.distance,
                    elapsed
                );
                RouteResult::found(self.name(), route.path, route.distance, elapsed)
            }
            Err(err) => {
                log::warn!("{} found no route: {}", self.name(), err);
                RouteResult::failed(self.name(), err, elapsed)
            }
        }
    }
}

/// Answers queries that need no ordering at all.
///
/// A round trip with no other waypoint stays put. A fixed-endpoint trip with
/// no intermediate waypoint is a single oracle path.
fn trivial_route(
    oracle: &DistanceOracle<'_>,
    query: &TripQuery,
) -> Option<Result<Route, RoutingError>> {
    let n = query.waypoints().len();
    if query.is_round_trip() && n == 1 {
        return Some(Ok(Route {
            path: vec![query.start().clone()],
            distance: 0,
        }));
    }
    if !query.is_round_trip() && n == 2 {
        let route = oracle
            .shortest_path(query.start(), query.end())
            .map(|sp| Route {
                path: sp.path,
                distance: sp.distance,
            })
            .ok_or_else(|| RoutingError::no_path(query.start(), query.end()));
        return Some(route);
    }
    None
}

/// Names the leg that makes a query unsolvable.
///
/// Picks the first waypoint the start cannot reach. On an undirected graph a
/// tour exists whenever every waypoint is reachable from the start, so the
/// fallback leg only matters for hand-built matrices.
pub(crate) fn unreachable_leg(query: &TripQuery, distances: &DistanceMatrix) -> RoutingError {
    let waypoints = query.waypoints();
    let start = waypoints.start_index();
    let stranded = (0..distances.size())
        .find(|&i| distances.get(start, i).is_none())
        .unwrap_or(waypoints.end_index());
    RoutingError::no_path(waypoints.city(start), waypoints.city(stranded))
}

/// Identifies a built-in strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// [`NearestNeighbor`].
    NearestNeighbor,
    /// [`HeldKarp`].
    HeldKarp,
    /// [`BestFirstSearch`].
    BestFirst,
}

impl StrategyKind {
    /// Every built-in strategy, in registration order.
    pub const ALL: [Self; 3] = [Self::NearestNeighbor, Self::HeldKarp, Self::BestFirst];

    /// Instantiates the strategy with the given configuration.
    pub fn build(self, config: &PlannerConfig) -> Box<dyn TspStrategy> {
        match self {
            Self::NearestNeighbor => Box::new(NearestNeighbor::new()),
            Self::HeldKarp => Box::new(HeldKarp::new(config.max_exact_waypoints)),
            Self::BestFirst => Box::new(BestFirstSearch::new(config.heuristic_damping)),
        }
    }
}

/// Builds every built-in strategy in registration order.
pub fn default_strategies(config: &PlannerConfig) -> Vec<Box<dyn TspStrategy>> {
    StrategyKind::ALL
        .iter()
        .map(|kind| kind.build(config))
        .collect()
}
