//! Waypoint sets and trip queries.

use super::{CityId, RoadGraph};
use crate::error::RoutingError;

/// The distinct cities a route must visit, start and end included.
///
/// Index 0 is always the start city. Remaining cities keep their first-seen
/// order, duplicates are dropped, and the end city is appended if the input
/// did not already contain it. Indices are fixed for the lifetime of one
/// query and are what the strategies' bitmasks refer to.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{CityId, WaypointSet};
///
/// let a = CityId::new("A", "XX");
/// let b = CityId::new("B", "XX");
/// let c = CityId::new("C", "XX");
///
/// let set = WaypointSet::new(a.clone(), c.clone(), [b.clone(), a.clone(), b.clone()]);
/// assert_eq!(set.cities(), &[a, b, c.clone()]);
/// assert_eq!(set.start_index(), 0);
/// assert_eq!(set.index_of(&c), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointSet {
    cities: Vec<CityId>,
    end_index: usize,
}

impl WaypointSet {
    /// Builds the waypoint set for a trip from `start` to `end`.
    pub fn new<I>(start: CityId, end: CityId, waypoints: I) -> Self
    where
        I: IntoIterator<Item = CityId>,
    {
        let mut cities = vec![start];
        for city in waypoints {
            if !cities.contains(&city) {
                cities.push(city);
            }
        }
        let end_index = match cities.iter().position(|c| *c == end) {
            Some(i) => i,
            None => {
                cities.push(end);
                cities.len() - 1
            }
        };
        Self { cities, end_index }
    }

    /// All waypoints, indexed.
    pub fn cities(&self) -> &[CityId] {
        &self.cities
    }

    /// Waypoint at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn city(&self, index: usize) -> &CityId {
        &self.cities[index]
    }

    /// Index of a city in this set.
    pub fn index_of(&self, city: &CityId) -> Option<usize> {
        self.cities.iter().position(|c| c == city)
    }

    /// Index of the start city (always 0).
    pub fn start_index(&self) -> usize {
        0
    }

    /// Index of the end city. Equal to the start index for a round trip.
    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// Number of distinct waypoints.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`: a set holds at least its start city.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// A validated routing request.
///
/// Construction fails with [`RoutingError::InvalidQuery`] when the start or
/// end city is missing from the graph, so strategies never see an endpoint
/// they cannot route from. Intermediate waypoints are not checked here: an
/// unknown one simply makes every strategy report no path.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{CityId, RoadGraph, TripQuery};
///
/// let a = CityId::new("A", "XX");
/// let b = CityId::new("B", "XX");
/// let graph = RoadGraph::from_roads([(a.clone(), b.clone(), 10)]);
///
/// let q = TripQuery::new(&graph, a.clone(), a.clone(), [b.clone()]).unwrap();
/// assert!(q.is_round_trip());
/// assert_eq!(q.waypoints().len(), 2);
///
/// let missing = CityId::new("Z", "XX");
/// assert!(TripQuery::new(&graph, a, missing, []).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    waypoints: WaypointSet,
}

impl TripQuery {
    /// Validates endpoints against `graph` and assembles the waypoint set.
    pub fn new<I>(
        graph: &RoadGraph,
        start: CityId,
        end: CityId,
        waypoints: I,
    ) -> Result<Self, RoutingError>
    where
        I: IntoIterator<Item = CityId>,
    {
        for city in [&start, &end] {
            if !graph.contains(city) {
                return Err(RoutingError::InvalidQuery { city: city.clone() });
            }
        }
        Ok(Self {
            waypoints: WaypointSet::new(start, end, waypoints),
        })
    }

    /// Start city.
    pub fn start(&self) -> &CityId {
        self.waypoints.city(self.waypoints.start_index())
    }

    /// End city.
    pub fn end(&self) -> &CityId {
        self.waypoints.city(self.waypoints.end_index())
    }

    /// Returns `true` when the trip ends where it started.
    pub fn is_round_trip(&self) -> bool {
        self.waypoints.end_index() == self.waypoints.start_index()
    }

    /// The query's waypoint set.
    pub fn waypoints(&self) -> &WaypointSet {
        &self.waypoints
    }
}
