//! Tours and route results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::CityId;
use crate::error::RoutingError;

/// A waypoint-level ordering produced by a strategy.
///
/// `order` holds waypoint indices from the start to the end city. For a round
/// trip it ends with the start index again. `distance` is the sum of the
/// distance-matrix legs along `order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// Waypoint indices in visiting order.
    pub order: Vec<usize>,
    /// Total oracle distance along the tour.
    pub distance: u64,
}

/// A fully expanded road path with its total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Cities from start to end, every consecutive pair a direct road.
    pub path: Vec<CityId>,
    /// Total road distance along `path`.
    pub distance: u64,
}

/// Outcome of one strategy on one query.
///
/// These fields are the whole presentation contract: a report or CLI reads
/// the expanded path, the distance, the elapsed time and the strategy name.
/// A failed strategy yields an empty path with distance [`RouteResult::UNREACHABLE`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use roadtrip_routing::models::{CityId, RouteResult};
///
/// let path = vec![CityId::new("A", "XX"), CityId::new("B", "XX")];
/// let ok = RouteResult::found("demo", path, 10, Duration::from_micros(3));
/// assert!(ok.is_found());
/// assert_eq!(ok.found_distance(), Some(10));
/// assert_eq!(ok.stops(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Fully expanded city-by-city route.
    pub path: Vec<CityId>,
    /// Total distance, or [`RouteResult::UNREACHABLE`].
    pub distance: i64,
    /// Name of the strategy that produced this result.
    pub strategy: String,
    /// Wall-clock time spent inside the strategy.
    pub elapsed: Duration,
    /// Why the strategy failed, if it did.
    pub failure: Option<RoutingError>,
}

impl RouteResult {
    /// Sentinel distance for "no valid route".
    pub const UNREACHABLE: i64 = -1;

    /// A successful result.
    pub fn found(
        strategy: impl Into<String>,
        path: Vec<CityId>,
        distance: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            path,
            distance: i64::try_from(distance).unwrap_or(i64::MAX),
            strategy: strategy.into(),
            elapsed,
            failure: None,
        }
    }

    /// The sentinel result for a failed strategy.
    pub fn failed(strategy: impl Into<String>, error: RoutingError, elapsed: Duration) -> Self {
        Self {
            path: Vec::new(),
            distance: Self::UNREACHABLE,
            strategy: strategy.into(),
            elapsed,
            failure: Some(error),
        }
    }

    /// Returns `true` if a route was found.
    pub fn is_found(&self) -> bool {
        self.distance != Self::UNREACHABLE
    }

    /// The distance if a route was found.
    pub fn found_distance(&self) -> Option<u64> {
        u64::try_from(self.distance).ok()
    }

    /// Number of cities along the expanded path.
    pub fn stops(&self) -> usize {
        self.path.len()
    }
}
