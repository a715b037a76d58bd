//! Undirected weighted road graph.

use std::collections::HashMap;

use super::CityId;

/// An undirected road network: city → (neighbor → distance).
///
/// Every road is stored in both directions. The graph is assembled once and
/// then shared read-only by every strategy; nothing in the routing engine
/// mutates it.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{CityId, RoadGraph};
///
/// let a = CityId::new("Austin", "TX");
/// let b = CityId::new("Dallas", "TX");
///
/// let mut graph = RoadGraph::new();
/// graph.add_road(a.clone(), b.clone(), 195);
///
/// assert_eq!(graph.road(&a, &b), Some(195));
/// assert_eq!(graph.road(&b, &a), Some(195));
/// assert_eq!(graph.num_cities(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    adjacency: HashMap<CityId, HashMap<CityId, u32>>,
}

impl RoadGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(a, b, distance)` road triples.
    pub fn from_roads<I>(roads: I) -> Self
    where
        I: IntoIterator<Item = (CityId, CityId, u32)>,
    {
        let mut graph = Self::new();
        for (a, b, d) in roads {
            graph.add_road(a, b, d);
        }
        graph
    }

    /// Adds an undirected road between `a` and `b`.
    ///
    /// A repeated road overwrites the earlier distance.
    pub fn add_road(&mut self, a: CityId, b: CityId, distance: u32) {
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), distance);
        self.adjacency.entry(b).or_default().insert(a, distance);
    }

    /// Adds a city with no roads.
    pub fn add_city(&mut self, city: CityId) {
        self.adjacency.entry(city).or_default();
    }

    /// Returns `true` if the city is part of the network.
    pub fn contains(&self, city: &CityId) -> bool {
        self.adjacency.contains_key(city)
    }

    /// Direct road distance between two cities, if they are adjacent.
    pub fn road(&self, from: &CityId, to: &CityId) -> Option<u32> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Iterates over the direct neighbors of `city` with their distances.
    ///
    /// Empty for unknown cities.
    pub fn neighbors<'a>(&'a self, city: &CityId) -> impl Iterator<Item = (&'a CityId, u32)> + 'a {
        self.adjacency
            .get(city)
            .into_iter()
            .flat_map(|n| n.iter().map(|(c, &d)| (c, d)))
    }

    /// Iterates over every city in the network.
    pub fn cities(&self) -> impl Iterator<Item = &CityId> {
        self.adjacency.keys()
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected roads. A self-loop counts once.
    pub fn num_roads(&self) -> usize {
        let mut halves = 0;
        let mut loops = 0;
        for (city, neighbors) in &self.adjacency {
            for other in neighbors.keys() {
                if other == city {
                    loops += 1;
                } else {
                    halves += 1;
                }
            }
        }
        halves / 2 + loops
    }
}
