//! Waypoint-to-road path expansion.

use crate::distance::DistanceOracle;
use crate::error::RoutingError;
use crate::models::{CityId, RoadGraph, Tour, WaypointSet};

/// Turns an ordered list of must-visit cities into a city-by-city route.
///
/// Each consecutive pair is joined by the oracle's shortest path. The first
/// city of every segment after the first is dropped, since it repeats the
/// previous segment's last city. In the output every consecutive pair is a
/// direct road.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{CityId, RoadGraph};
/// use roadtrip_routing::distance::DistanceOracle;
/// use roadtrip_routing::evaluation::PathExpander;
///
/// let a = CityId::new("A", "XX");
/// let b = CityId::new("B", "XX");
/// let c = CityId::new("C", "XX");
/// let graph = RoadGraph::from_roads([(a.clone(), b.clone(), 1), (b.clone(), c.clone(), 1)]);
///
/// let expander = PathExpander::new(DistanceOracle::new(&graph));
/// let full = expander.expand(&[a.clone(), c.clone(), a.clone()]).unwrap();
/// assert_eq!(full, vec![a.clone(), b.clone(), c, b, a]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathExpander<'g> {
    oracle: DistanceOracle<'g>,
}

impl<'g> PathExpander<'g> {
    /// Creates an expander backed by `oracle`.
    pub fn new(oracle: DistanceOracle<'g>) -> Self {
        Self { oracle }
    }

    /// Expands `waypoints` into a full road path.
    ///
    /// An empty input expands to an empty path. Fails with
    /// [`RoutingError::NoPathFound`] naming the first leg the oracle cannot
    /// connect.
    pub fn expand(&self, waypoints: &[CityId]) -> Result<Vec<CityId>, RoutingError> {
        let Some(first) = waypoints.first() else {
            return Ok(Vec::new());
        };
        if waypoints.len() == 1 && !self.oracle.graph().contains(first) {
            return Err(RoutingError::no_path(first, first));
        }

        let mut full = vec![first.clone()];
        for leg in waypoints.windows(2) {
            let segment = self
                .oracle
                .shortest_path(&leg[0], &leg[1])
                .ok_or_else(|| RoutingError::no_path(&leg[0], &leg[1]))?;
            full.extend(segment.path.into_iter().skip(1));
        }
        Ok(full)
    }

    /// Expands a strategy's tour over the query's waypoint indices.
    pub fn expand_tour(&self, waypoints: &WaypointSet, tour: &Tour) -> Result<Vec<CityId>, RoutingError> {
        let cities: Vec<CityId> = tour
            .order
            .iter()
            .map(|&i| waypoints.city(i).clone())
            .collect();
        self.expand(&cities)
    }
}

/// Sums direct road distances along `path`.
///
/// Returns `None` if any consecutive pair is not a direct road. A path of
/// zero or one city has distance 0.
pub fn path_distance(graph: &RoadGraph, path: &[CityId]) -> Option<u64> {
    path.windows(2)
        .try_fold(0u64, |acc, leg| Some(acc + u64::from(graph.road(&leg[0], &leg[1])?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str) -> CityId {
        CityId::new(name, "XX")
    }

    fn diamond() -> RoadGraph {
        RoadGraph::from_roads([
            (city("A"), city("B"), 10),
            (city("B"), city("C"), 5),
            (city("C"), city("D"), 5),
            (city("A"), city("D"), 30),
        ])
    }

    #[test]
    fn test_expand_inserts_intermediates() {
        let g = diamond();
        let expander = PathExpander::new(DistanceOracle::new(&g));
        let full = expander.expand(&[city("A"), city("D")]).expect("reachable");
        assert_eq!(full, vec![city("A"), city("B"), city("C"), city("D")]);
        assert_eq!(path_distance(&g, &full), Some(20));
    }

    #[test]
    fn test_expand_idempotent() {
        let g = diamond();
        let expander = PathExpander::new(DistanceOracle::new(&g));
        let once = expander
            .expand(&[city("A"), city("C"), city("A")])
            .expect("reachable");
        let twice = expander.expand(&once).expect("reachable");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_expand_repeated_city_collapses() {
        let g = diamond();
        let expander = PathExpander::new(DistanceOracle::new(&g));
        let full = expander
            .expand(&[city("A"), city("A"), city("B")])
            .expect("reachable");
        assert_eq!(full, vec![city("A"), city("B")]);
    }

    #[test]
    fn test_expand_single_and_empty() {
        let g = diamond();
        let expander = PathExpander::new(DistanceOracle::new(&g));
        assert_eq!(expander.expand(&[]).expect("empty"), Vec::<CityId>::new());
        assert_eq!(expander.expand(&[city("B")]).expect("single"), vec![city("B")]);
        assert!(expander.expand(&[city("Z")]).is_err());
    }

    #[test]
    fn test_expand_reports_broken_leg() {
        let mut g = diamond();
        g.add_city(city("I"));
        let expander = PathExpander::new(DistanceOracle::new(&g));
        let err = expander
            .expand(&[city("A"), city("B"), city("I")])
            .unwrap_err();
        assert_eq!(err, RoutingError::no_path(&city("B"), &city("I")));
    }

    #[test]
    fn test_expand_tour() {
        let g = diamond();
        let expander = PathExpander::new(DistanceOracle::new(&g));
        let set = WaypointSet::new(city("A"), city("A"), [city("C")]);
        let tour = Tour {
            order: vec![0, 1, 0],
            distance: 30,
        };
        let full = expander.expand_tour(&set, &tour).expect("reachable");
        assert_eq!(
            full,
            vec![city("A"), city("B"), city("C"), city("B"), city("A")]
        );
    }

    #[test]
    fn test_path_distance_rejects_non_edges() {
        let g = diamond();
        assert_eq!(path_distance(&g, &[city("A"), city("C")]), None);
        assert_eq!(path_distance(&g, &[city("A")]), Some(0));
        assert_eq!(path_distance(&g, &[]), Some(0));
    }
}
