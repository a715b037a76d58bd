//! Dijkstra shortest-path oracle.
//!
//! # Algorithm
//!
//! Single-source Dijkstra from `source` over a binary min-heap keyed by
//! tentative distance. The search stops the moment `target` is popped, since
//! only one target matters per call. Equal distances pop in insertion order.
//!
//! # Complexity
//!
//! O((V + E) log V) per call in the worst case.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::models::{CityId, RoadGraph};

/// A city-by-city shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Cities from source to target, both included.
    pub path: Vec<CityId>,
    /// Sum of road distances along `path`.
    pub distance: u64,
}

/// Answers shortest-path queries over a borrowed, immutable road graph.
///
/// The oracle keeps no state between calls, so one instance can serve every
/// strategy, including strategies running on other threads.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{CityId, RoadGraph};
/// use roadtrip_routing::distance::DistanceOracle;
///
/// let a = CityId::new("A", "XX");
/// let b = CityId::new("B", "XX");
/// let c = CityId::new("C", "XX");
/// let graph = RoadGraph::from_roads([
///     (a.clone(), b.clone(), 4),
///     (b.clone(), c.clone(), 3),
///     (a.clone(), c.clone(), 10),
/// ]);
///
/// let oracle = DistanceOracle::new(&graph);
/// let sp = oracle.shortest_path(&a, &c).unwrap();
/// assert_eq!(sp.distance, 7);
/// assert_eq!(sp.path, vec![a, b, c]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DistanceOracle<'g> {
    graph: &'g RoadGraph,
}

impl<'g> DistanceOracle<'g> {
    /// Creates an oracle over `graph`.
    pub fn new(graph: &'g RoadGraph) -> Self {
        Self { graph }
    }

    /// The graph this oracle answers for.
    pub fn graph(&self) -> &'g RoadGraph {
        self.graph
    }

    /// Shortest path from `source` to `target`.
    ///
    /// Returns `None` if either city is absent from the graph or no path
    /// connects them. A city is always reachable from itself at distance 0.
    pub fn shortest_path(&self, source: &CityId, target: &CityId) -> Option<ShortestPath> {
        if !self.graph.contains(source) || !self.graph.contains(target) {
            return None;
        }

        let mut dist: HashMap<&CityId, u64> = HashMap::new();
        let mut prev: HashMap<&CityId, &CityId> = HashMap::new();
        let mut heap: BinaryHeap<Reverse<(u64, usize, &CityId)>> = BinaryHeap::new();
        let mut seq = 0usize;

        dist.insert(source, 0);
        heap.push(Reverse((0, seq, source)));

        let mut settled_target = None;
        while let Some(Reverse((d, _, city))) = heap.pop() {
            if city == target {
                settled_target = Some(d);
                break;
            }
            if dist.get(city).is_some_and(|&best| d > best) {
                continue;
            }
            for (next, w) in self.graph.neighbors(city) {
                let candidate = d + u64::from(w);
                let improves = dist.get(next).map_or(true, |&best| candidate < best);
                if improves {
                    dist.insert(next, candidate);
                    prev.insert(next, city);
                    seq += 1;
                    heap.push(Reverse((candidate, seq, next)));
                }
            }
        }

        let distance = settled_target?;
        let mut path = vec![target.clone()];
        let mut cursor = target;
        while let Some(&p) = prev.get(cursor) {
            path.push(p.clone());
            cursor = p;
        }
        path.reverse();

        if path.first() != Some(source) {
            return None;
        }
        Some(ShortestPath { path, distance })
    }

    /// Shortest distance from `source` to `target`, if reachable.
    pub fn distance(&self, source: &CityId, target: &CityId) -> Option<u64> {
        self.shortest_path(source, target).map(|sp| sp.distance)
    }
}
