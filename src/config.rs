//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::strategy::StrategyKind;

/// Tunables for the planner and its strategies.
///
/// Every field has a default, so a partial document deserializes cleanly.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::config::PlannerConfig;
/// use roadtrip_routing::strategy::StrategyKind;
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.default_strategy, StrategyKind::NearestNeighbor);
/// assert!((config.heuristic_damping - 0.95).abs() < 1e-12);
/// assert_eq!(config.max_exact_waypoints, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Strategy used by [`crate::planner::RoutePlanner::route`].
    pub default_strategy: StrategyKind,
    /// Factor applied to the best-first heuristic estimate.
    ///
    /// Values below 1.0 shrink the estimate to reduce the risk of
    /// overestimating. It is a safety margin, not an admissibility proof.
    pub heuristic_damping: f64,
    /// Largest waypoint count (start and end included) the exact solver
    /// accepts before refusing the query.
    pub max_exact_waypoints: usize,
}

impl PlannerConfig {
    /// Default best-first damping factor.
    pub const DEFAULT_DAMPING: f64 = 0.95;

    /// Default exact-solver waypoint ceiling.
    pub const DEFAULT_MAX_EXACT_WAYPOINTS: usize = 20;

    /// Sets the default strategy.
    pub fn with_default_strategy(mut self, kind: StrategyKind) -> Self {
        self.default_strategy = kind;
        self
    }

    /// Sets the best-first damping factor.
    pub fn with_heuristic_damping(mut self, damping: f64) -> Self {
        self.heuristic_damping = damping;
        self
    }

    /// Sets the exact-solver waypoint ceiling.
    pub fn with_max_exact_waypoints(mut self, limit: usize) -> Self {
        self.max_exact_waypoints = limit;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_strategy: StrategyKind::NearestNeighbor,
            heuristic_damping: Self::DEFAULT_DAMPING,
            max_exact_waypoints: Self::DEFAULT_MAX_EXACT_WAYPOINTS,
        }
    }
}
