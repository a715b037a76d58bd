//! Route planner: the entry point tying the road graph, the attraction
//! lookup and the strategies together.

use crate::config::PlannerConfig;
use crate::distance::DistanceOracle;
use crate::error::RoutingError;
use crate::evaluation::path_distance;
use crate::harness::{Comparison, ComparisonHarness};
use crate::models::{AttractionIndex, CityId, RoadGraph, RouteResult, TripQuery};
use crate::strategy::TspStrategy;

/// Plans road trips over a fixed road graph.
///
/// Attraction names are resolved to their host cities, which become the
/// waypoints of the trip. [`RoutePlanner::route`] answers with the configured
/// default strategy and [`RoutePlanner::compare`] runs every registered one.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{AttractionIndex, CityId, RoadGraph};
/// use roadtrip_routing::planner::RoutePlanner;
///
/// let city = |n: &str| CityId::new(n, "XX");
/// let graph = RoadGraph::from_roads([
///     (city("A"), city("B"), 10),
///     (city("B"), city("C"), 5),
///     (city("C"), city("D"), 5),
///     (city("A"), city("D"), 30),
/// ]);
/// let attractions: AttractionIndex =
///     [("Big Tower", city("B")), ("Old Mill", city("C"))].into_iter().collect();
///
/// let planner = RoutePlanner::new(graph, attractions);
/// let result = planner.route(&city("A"), &city("D"), &["Big Tower", "Old Mill"]).unwrap();
/// assert_eq!(result.distance, 20);
///
/// let comparison = planner.compare(&city("A"), &city("D"), &["Old Mill"]).unwrap();
/// assert!(comparison.results().iter().all(|r| r.distance == 20));
/// ```
#[derive(Debug)]
pub struct RoutePlanner {
    graph: RoadGraph,
    attractions: AttractionIndex,
    config: PlannerConfig,
    harness: ComparisonHarness,
}

impl RoutePlanner {
    /// Creates a planner with the default configuration.
    pub fn new(graph: RoadGraph, attractions: AttractionIndex) -> Self {
        Self::with_config(graph, attractions, PlannerConfig::default())
    }

    /// Creates a planner with an explicit configuration.
    pub fn with_config(graph: RoadGraph, attractions: AttractionIndex, config: PlannerConfig) -> Self {
        let harness = ComparisonHarness::new(&config);
        Self {
            graph,
            attractions,
            config,
            harness,
        }
    }

    /// Adds a strategy to the comparison registry.
    pub fn register(&mut self, strategy: Box<dyn TspStrategy>) {
        self.harness.register(strategy);
    }

    /// The road graph.
    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    /// The attraction lookup.
    pub fn attractions(&self) -> &AttractionIndex {
        &self.attractions
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The comparison harness.
    pub fn harness(&self) -> &ComparisonHarness {
        &self.harness
    }

    /// A shortest-path oracle over the planner's graph.
    pub fn oracle(&self) -> DistanceOracle<'_> {
        DistanceOracle::new(&self.graph)
    }

    /// Returns `true` if the city is in the road graph.
    pub fn city_exists(&self, city: &CityId) -> bool {
        self.graph.contains(city)
    }

    /// Returns `true` if the attraction is known.
    pub fn attraction_exists(&self, name: &str) -> bool {
        self.attractions.contains(name)
    }

    /// Resolves attraction names to their host cities.
    ///
    /// Unknown names are logged and skipped. The output keeps first-seen
    /// order and holds each city once.
    pub fn resolve_attractions<S: AsRef<str>>(&self, names: &[S]) -> Vec<CityId> {
        let mut cities: Vec<CityId> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            match self.attractions.resolve(name) {
                Some(city) if !cities.contains(city) => cities.push(city.clone()),
                Some(_) => {}
                None => log::warn!("attraction {name:?} not found, skipping"),
            }
        }
        cities
    }

    /// Validates the endpoints and assembles the waypoint set.
    pub fn query<S: AsRef<str>>(
        &self,
        start: &CityId,
        end: &CityId,
        attractions: &[S],
    ) -> Result<TripQuery, RoutingError> {
        TripQuery::new(
            &self.graph,
            start.clone(),
            end.clone(),
            self.resolve_attractions(attractions),
        )
    }

    /// Plans the trip with the default strategy.
    ///
    /// An invalid endpoint is an error. An unreachable waypoint is not: it
    /// yields the sentinel result with its `failure` set.
    pub fn route<S: AsRef<str>>(
        &self,
        start: &CityId,
        end: &CityId,
        attractions: &[S],
    ) -> Result<RouteResult, RoutingError> {
        let query = self.query(start, end, attractions)?;
        let strategy = self.config.default_strategy.build(&self.config);
        Ok(strategy.run(&self.oracle(), &query))
    }

    /// Plans the trip with every registered strategy.
    pub fn compare<S: AsRef<str>>(
        &self,
        start: &CityId,
        end: &CityId,
        attractions: &[S],
    ) -> Result<Comparison, RoutingError> {
        let query = self.query(start, end, attractions)?;
        Ok(self.harness.compare(&self.oracle(), &query))
    }

    /// Sums the direct roads along `path`.
    ///
    /// Returns `None` if two consecutive cities are not joined by a road.
    pub fn path_distance(&self, path: &[CityId]) -> Option<u64> {
        path_distance(&self.graph, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{HeldKarp, NearestNeighbor, StrategyKind};

    fn city(name: &str) -> CityId {
        CityId::new(name, "XX")
    }

    fn planner_with(config: PlannerConfig) -> RoutePlanner {
        let graph = RoadGraph::from_roads([
            (city("A"), city("B"), 10),
            (city("B"), city("C"), 5),
            (city("C"), city("D"), 5),
            (city("A"), city("D"), 30),
        ]);
        let attractions: AttractionIndex = [
            ("Big Tower", city("B")),
            ("Old Mill", city("C")),
            ("Clock Museum", city("C")),
            ("Lighthouse", city("D")),
        ]
        .into_iter()
        .collect();
        RoutePlanner::with_config(graph, attractions, config)
    }

    fn planner() -> RoutePlanner {
        planner_with(PlannerConfig::default())
    }

    #[test]
    fn test_existence_checks() {
        let p = planner();
        assert!(p.city_exists(&city("A")));
        assert!(!p.city_exists(&city("Z")));
        assert!(p.attraction_exists("Old Mill"));
        assert!(!p.attraction_exists("Atlantis"));
    }

    #[test]
    fn test_resolve_skips_unknown_and_duplicates() {
        let p = planner();
        let cities = p.resolve_attractions(&["Old Mill", "Atlantis", "Big Tower", "Clock Museum"]);
        assert_eq!(cities, vec![city("C"), city("B")]);
    }

    #[test]
    fn test_query_rejects_unknown_endpoint() {
        let p = planner();
        let err = p.query(&city("A"), &city("Z"), &["Old Mill"]).unwrap_err();
        assert_eq!(err, RoutingError::InvalidQuery { city: city("Z") });
        assert!(p.route(&city("Z"), &city("A"), &[] as &[&str]).is_err());
        assert!(p.compare(&city("Z"), &city("A"), &[] as &[&str]).is_err());
    }

    #[test]
    fn test_route_default_strategy() {
        let p = planner();
        let r = p
            .route(&city("A"), &city("D"), &["Big Tower", "Old Mill"])
            .expect("valid query");
        assert_eq!(r.strategy, NearestNeighbor::NAME);
        assert_eq!(r.distance, 20);
        assert_eq!(p.path_distance(&r.path), r.found_distance());
    }

    #[test]
    fn test_configured_default_strategy() {
        let p = planner_with(PlannerConfig::default().with_default_strategy(StrategyKind::HeldKarp));
        let r = p
            .route(&city("A"), &city("A"), &["Big Tower", "Old Mill"])
            .expect("valid query");
        assert_eq!(r.strategy, HeldKarp::NAME);
        assert_eq!(r.distance, 30);
        assert_eq!(r.path.first(), r.path.last());
    }

    #[test]
    fn test_compare_all_strategies() {
        let p = planner();
        let c = p
            .compare(&city("A"), &city("A"), &["Lighthouse", "Big Tower"])
            .expect("valid query");
        assert_eq!(c.results().len(), p.harness().len());
        let best = c.cheapest().expect("some route");
        // A→B→(C)→D→(C→B)→A: 10 + 10 + 20.
        assert_eq!(best.distance, 40);
        for r in c.succeeded() {
            assert_eq!(r.path.first(), Some(&city("A")));
            assert_eq!(r.path.last(), Some(&city("A")));
        }
    }

    #[test]
    fn test_unknown_attraction_only() {
        let p = planner();
        let r = p
            .route(&city("A"), &city("D"), &["Atlantis"])
            .expect("valid query");
        assert_eq!(r.distance, 20);
    }

    #[test]
    fn test_path_distance() {
        let p = planner();
        assert_eq!(p.path_distance(&[city("A"), city("B"), city("C")]), Some(15));
        assert_eq!(p.path_distance(&[city("A"), city("C")]), None);
    }
}
