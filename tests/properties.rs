//! Property-based tests for the routing engine.
//!
//! Graphs are small, undirected and connected: a random-weight chain through
//! every city plus random extra roads.
//!
//! # Invariants tested
//!
//! - **Oracle symmetry:** `d(a, b) == d(b, a)`.
//! - **Exact never loses:** Held-Karp is never longer than greedy.
//! - **Best-first agreement:** A* matches Held-Karp on cost.
//! - **Round trips close:** the path starts and ends at the start city.
//! - **Expansion is stable:** expanding an expanded path changes nothing.
//! - **Reported distance is real:** it equals the sum of the path's roads.

use proptest::prelude::*;
use roadtrip_routing::distance::DistanceOracle;
use roadtrip_routing::evaluation::{path_distance, PathExpander};
use roadtrip_routing::harness::ComparisonHarness;
use roadtrip_routing::models::{CityId, RoadGraph, TripQuery};
use roadtrip_routing::strategy::{BestFirstSearch, HeldKarp, NearestNeighbor, TspStrategy};

const MAX_CITIES: usize = 7;

fn city(i: usize) -> CityId {
    CityId::new(format!("C{i}"), "PT")
}

/// A connected graph and its city count.
fn connected_graph() -> impl Strategy<Value = (RoadGraph, usize)> {
    (3usize..=MAX_CITIES)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(1u32..=50, n - 1),
                prop::collection::vec((0..n, 0..n, 1u32..=50), 0..=2 * n),
            )
        })
        .prop_map(|(n, chain, extra)| {
            let mut graph = RoadGraph::new();
            for (i, w) in chain.into_iter().enumerate() {
                graph.add_road(city(i), city(i + 1), w);
            }
            for (a, b, w) in extra {
                if a != b {
                    graph.add_road(city(a), city(b), w);
                }
            }
            (graph, n)
        })
}

/// Raw indices folded into `0..n`.
fn pick(n: usize, start: usize, end: usize, stops: &[usize]) -> (CityId, CityId, Vec<CityId>) {
    (
        city(start % n),
        city(end % n),
        stops.iter().map(|&s| city(s % n)).collect(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: shortest-path distance is symmetric on an undirected graph.
    #[test]
    fn oracle_symmetric((graph, n) in connected_graph()) {
        let oracle = DistanceOracle::new(&graph);
        for a in 0..n {
            for b in 0..n {
                let ab = oracle.distance(&city(a), &city(b));
                prop_assert!(ab.is_some());
                prop_assert_eq!(ab, oracle.distance(&city(b), &city(a)));
            }
        }
    }

    /// Property: every shortest path is a chain of real roads.
    #[test]
    fn oracle_path_matches_distance(
        (graph, n) in connected_graph(),
        a in 0..MAX_CITIES,
        b in 0..MAX_CITIES,
    ) {
        let oracle = DistanceOracle::new(&graph);
        let sp = oracle.shortest_path(&city(a % n), &city(b % n)).expect("connected");
        prop_assert_eq!(path_distance(&graph, &sp.path), Some(sp.distance));
        prop_assert_eq!(sp.path.first(), Some(&city(a % n)));
        prop_assert_eq!(sp.path.last(), Some(&city(b % n)));
    }

    /// Property: the exact strategy is never beaten by the greedy one.
    #[test]
    fn exact_not_worse_than_greedy(
        (graph, n) in connected_graph(),
        start in 0..MAX_CITIES,
        end in 0..MAX_CITIES,
        stops in prop::collection::vec(0..MAX_CITIES, 0..MAX_CITIES),
    ) {
        let (s, e, w) = pick(n, start, end, &stops);
        let query = TripQuery::new(&graph, s, e, w).expect("endpoints exist");
        let oracle = DistanceOracle::new(&graph);

        let exact = HeldKarp::default().run(&oracle, &query);
        let greedy = NearestNeighbor::new().run(&oracle, &query);
        prop_assert!(exact.is_found());
        prop_assert!(greedy.is_found());
        prop_assert!(exact.distance <= greedy.distance);
    }

    /// Property: best-first search reaches the exact optimum.
    #[test]
    fn best_first_matches_exact(
        (graph, n) in connected_graph(),
        start in 0..MAX_CITIES,
        end in 0..MAX_CITIES,
        stops in prop::collection::vec(0..MAX_CITIES, 0..MAX_CITIES),
    ) {
        let (s, e, w) = pick(n, start, end, &stops);
        let query = TripQuery::new(&graph, s, e, w).expect("endpoints exist");
        let oracle = DistanceOracle::new(&graph);

        let exact = HeldKarp::default().run(&oracle, &query);
        let astar = BestFirstSearch::default().run(&oracle, &query);
        prop_assert_eq!(exact.distance, astar.distance);
    }

    /// Property: round trips start and end at the start city.
    #[test]
    fn round_trip_closes(
        (graph, n) in connected_graph(),
        start in 0..MAX_CITIES,
        stops in prop::collection::vec(0..MAX_CITIES, 0..MAX_CITIES),
    ) {
        let (s, _, w) = pick(n, start, start, &stops);
        let query = TripQuery::new(&graph, s.clone(), s.clone(), w).expect("endpoints exist");
        let comparison = ComparisonHarness::default().compare(&DistanceOracle::new(&graph), &query);

        for result in comparison.results() {
            prop_assert!(result.is_found(), "{}", result.strategy);
            prop_assert_eq!(result.path.first(), Some(&s));
            prop_assert_eq!(result.path.last(), Some(&s));
        }
    }

    /// Property: every result visits each waypoint, walks real roads, and
    /// reports the length of what it walked.
    #[test]
    fn results_are_consistent(
        (graph, n) in connected_graph(),
        start in 0..MAX_CITIES,
        end in 0..MAX_CITIES,
        stops in prop::collection::vec(0..MAX_CITIES, 0..MAX_CITIES),
    ) {
        let (s, e, w) = pick(n, start, end, &stops);
        let query = TripQuery::new(&graph, s.clone(), e.clone(), w).expect("endpoints exist");
        let comparison = ComparisonHarness::default().compare(&DistanceOracle::new(&graph), &query);

        for result in comparison.results() {
            prop_assert_eq!(path_distance(&graph, &result.path), result.found_distance());
            prop_assert_eq!(result.path.first(), Some(&s));
            prop_assert_eq!(result.path.last(), Some(&e));
            for waypoint in query.waypoints().cities() {
                prop_assert!(result.path.contains(waypoint), "{} skipped {}", result.strategy, waypoint);
            }
        }
    }

    /// Property: with only start and end, every strategy returns d(start, end).
    #[test]
    fn two_points_short_circuit(
        (graph, n) in connected_graph(),
        start in 0..MAX_CITIES,
        end in 0..MAX_CITIES,
    ) {
        let (s, e, _) = pick(n, start, end, &[]);
        prop_assume!(s != e);
        let oracle = DistanceOracle::new(&graph);
        let expected = oracle.distance(&s, &e);
        let query = TripQuery::new(&graph, s, e, []).expect("endpoints exist");

        for result in ComparisonHarness::default().compare(&oracle, &query) {
            prop_assert_eq!(result.found_distance(), expected);
        }
    }

    /// Property: expanding an already expanded path is a no-op.
    #[test]
    fn expansion_idempotent(
        (graph, n) in connected_graph(),
        stops in prop::collection::vec(0..MAX_CITIES, 1..MAX_CITIES),
    ) {
        let cities: Vec<CityId> = stops.iter().map(|&s| city(s % n)).collect();
        let expander = PathExpander::new(DistanceOracle::new(&graph));
        let once = expander.expand(&cities).expect("connected");
        let twice = expander.expand(&once).expect("connected");
        prop_assert_eq!(once, twice);
    }
}
