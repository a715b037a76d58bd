//! Domain model types for road-trip routing.
//!
//! Provides the core abstractions: city identifiers, the undirected road
//! graph, the attraction lookup, per-query waypoint sets, and the tour,
//! route and result types that strategies produce.

mod attraction;
mod city;
mod graph;
mod query;
mod result;

pub use attraction::AttractionIndex;
pub use city::{CityId, ParseCityError};
pub use graph::RoadGraph;
pub use query::{TripQuery, WaypointSet};
pub use result::{Route, RouteResult, Tour};
