//! # roadtrip-routing
//!
//! Road-trip route optimization over a weighted, undirected city graph. A
//! trip starts and ends at given cities (the same city for a round trip) and
//! must pass through every waypoint city derived from named attractions.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (CityId, RoadGraph, TripQuery, RouteResult)
//! - [`distance`] — Dijkstra distance oracle and per-query distance matrix
//! - [`evaluation`] — Path expansion and road-distance evaluation
//! - [`strategy`] — Waypoint ordering (Greedy, Held-Karp, A*)
//! - [`harness`] — Runs every strategy on one query and compares results
//! - [`planner`] — Attraction resolution and the planning entry points
//! - [`config`] — Planner tunables
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use roadtrip_routing::models::{AttractionIndex, CityId, RoadGraph};
//! use roadtrip_routing::planner::RoutePlanner;
//!
//! let city = |n: &str| CityId::new(n, "XX");
//! let graph = RoadGraph::from_roads([
//!     (city("A"), city("B"), 10),
//!     (city("B"), city("C"), 5),
//!     (city("C"), city("D"), 5),
//!     (city("A"), city("D"), 30),
//! ]);
//! let attractions: AttractionIndex = [("Old Mill", city("C"))].into_iter().collect();
//!
//! let planner = RoutePlanner::new(graph, attractions);
//! let comparison = planner.compare(&city("A"), &city("A"), &["Old Mill"]).unwrap();
//! let best = comparison.cheapest().unwrap();
//! assert_eq!(best.distance, 30);
//! assert_eq!(best.path.first(), best.path.last());
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod harness;
pub mod models;
pub mod planner;
pub mod strategy;
