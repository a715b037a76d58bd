//! Comparison harness and its result views.

use std::fmt;

use crate::config::PlannerConfig;
use crate::distance::DistanceOracle;
use crate::models::{RouteResult, TripQuery};
use crate::strategy::{default_strategies, TspStrategy};

/// Runs a registry of strategies over one query.
///
/// Each strategy is timed on its own and a failing strategy never affects
/// the others: its slot holds the sentinel result. The graph is only read.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::distance::DistanceOracle;
/// use roadtrip_routing::harness::ComparisonHarness;
/// use roadtrip_routing::models::{CityId, RoadGraph, TripQuery};
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
/// let comparison = ComparisonHarness::default().compare(&DistanceOracle::new(&graph), &query);
/// assert_eq!(comparison.results().len(), 3);
/// assert_eq!(comparison.cheapest().map(|r| r.distance), Some(20));
/// ```
pub struct ComparisonHarness {
    strategies: Vec<Box<dyn TspStrategy>>,
}

impl ComparisonHarness {
    /// Creates a harness with every built-in strategy.
    pub fn new(config: &PlannerConfig) -> Self {
        Self::with_strategies(default_strategies(config))
    }

    /// Creates a harness with an explicit registry.
    pub fn with_strategies(strategies: Vec<Box<dyn TspStrategy>>) -> Self {
        Self { strategies }
    }

    /// Appends a strategy to the registry.
    pub fn register(&mut self, strategy: Box<dyn TspStrategy>) {
        self.strategies.push(strategy);
    }

    /// Names of the registered strategies, in run order.
    pub fn strategy_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|s| s.name())
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns `true` if no strategy is registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Runs every strategy on `query`, in registration order.
    pub fn compare(&self, oracle: &DistanceOracle<'_>, query: &TripQuery) -> Comparison {
        let results: Vec<RouteResult> = self
            .strategies
            .iter()
            .map(|strategy| strategy.run(oracle, query))
            .collect();

        let found = results.iter().filter(|r| r.is_found()).count();
        log::debug!(
            "compared {} strategies from {} to {}: {} found a route",
            results.len(),
            query.start(),
            query.end(),
            found
        );

        Comparison { results }
    }
}

impl Default for ComparisonHarness {
    fn default() -> Self {
        Self::new(&PlannerConfig::default())
    }
}

impl fmt::Debug for ComparisonHarness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonHarness")
            .field("strategies", &self.strategy_names().collect::<Vec<_>>())
            .finish()
    }
}

/// One result per registered strategy, in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    results: Vec<RouteResult>,
}

impl Comparison {
    /// Every result, in registration order.
    pub fn results(&self) -> &[RouteResult] {
        &self.results
    }

    /// Consumes the comparison, returning its results.
    pub fn into_results(self) -> Vec<RouteResult> {
        self.results
    }

    /// The result for a strategy name.
    pub fn get(&self, strategy: &str) -> Option<&RouteResult> {
        self.results.iter().find(|r| r.strategy == strategy)
    }

    /// Results that found a route.
    pub fn succeeded(&self) -> impl Iterator<Item = &RouteResult> {
        self.results.iter().filter(|r| r.is_found())
    }

    /// The shortest found route. Earlier registrations win ties.
    pub fn cheapest(&self) -> Option<&RouteResult> {
        self.succeeded().min_by_key(|r| r.distance)
    }

    /// The quickest strategy among those that found a route.
    pub fn fastest(&self) -> Option<&RouteResult> {
        self.succeeded().min_by_key(|r| r.elapsed)
    }

    /// Results sorted by distance, failures last. The sort is stable.
    pub fn ranked(&self) -> Vec<&RouteResult> {
        let mut ranked: Vec<&RouteResult> = self.results.iter().collect();
        ranked.sort_by_key(|r| (!r.is_found(), r.distance));
        ranked
    }
}

impl IntoIterator for Comparison {
    type Item = RouteResult;
    type IntoIter = std::vec::IntoIter<RouteResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}
