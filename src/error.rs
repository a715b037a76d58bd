//! Routing error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CityId;

/// Errors raised while answering a trip query.
///
/// Strategies never surface these as panics: [`crate::strategy::TspStrategy::run`]
/// folds them into a sentinel [`crate::models::RouteResult`] so a comparison
/// can skip the failed strategy and keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RoutingError {
    /// A required connection does not exist in the road graph.
    #[error("no route from {from} to {to}")]
    NoPathFound {
        /// City the failed leg departs from.
        from: CityId,
        /// City the failed leg should reach.
        to: CityId,
    },

    /// The query names a start or end city that is not in the road graph.
    ///
    /// Rejected before any strategy runs.
    #[error("city {city} is not in the road network")]
    InvalidQuery {
        /// The unknown city.
        city: CityId,
    },

    /// The waypoint set exceeds what a strategy can represent.
    #[error("{count} waypoints exceed the limit of {limit}")]
    TooManyWaypoints {
        /// Distinct waypoints in the query, start and end included.
        count: usize,
        /// Largest waypoint count the strategy accepts.
        limit: usize,
    },
}

impl RoutingError {
    pub(crate) fn no_path(from: &CityId, to: &CityId) -> Self {
        Self::NoPathFound {
            from: from.clone(),
            to: to.clone(),
        }
    }

    /// Returns `true` for [`RoutingError::NoPathFound`].
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}
