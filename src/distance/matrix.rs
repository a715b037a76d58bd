//! Dense per-query distance matrix.

use super::DistanceOracle;
use crate::models::WaypointSet;

/// A dense n×n matrix of shortest distances between waypoints, stored in
/// row-major order.
///
/// `None` marks a pair the oracle could not connect. The matrix is built
/// fresh for every query and covers only that query's waypoints, not the
/// whole graph.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(2, vec![Some(0), Some(5), Some(5), Some(0)]).unwrap();
/// assert_eq!(dm.get(0, 1), Some(5));
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<Option<u64>>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with a zero diagonal and every
    /// other pair unreachable.
    pub fn new(size: usize) -> Self {
        let mut dm = Self {
            data: vec![None; size * size],
            size,
        };
        for i in 0..size {
            dm.set(i, i, Some(0));
        }
        dm
    }

    /// Builds the matrix for `waypoints` with one oracle call per ordered pair.
    pub fn from_waypoints(oracle: &DistanceOracle<'_>, waypoints: &WaypointSet) -> Self {
        let cities = waypoints.cities();
        let n = cities.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    dm.set(i, j, oracle.distance(&cities[i], &cities[j]));
                }
            }
        }
        dm
    }

    /// Creates a matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<Option<u64>>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Distance from waypoint `from` to waypoint `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<u64> {
        self.data[from * self.size + to]
    }

    /// Sets the distance from waypoint `from` to waypoint `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: Option<u64>) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of waypoints in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `d(i, j) == d(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Sum of the legs along `order`, or `None` if any leg is unreachable.
    pub fn tour_distance(&self, order: &[usize]) -> Option<u64> {
        order
            .windows(2)
            .try_fold(0u64, |acc, leg| Some(acc + self.get(leg[0], leg[1])?))
    }

    /// Returns the reachable candidate nearest to `from`.
    ///
    /// Ties go to the earliest candidate. Returns `None` if no candidate is
    /// reachable.
    pub fn nearest_neighbor(
        &self,
        from: usize,
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for c in candidates {
            if let Some(d) = self.get(from, c) {
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((c, d));
                }
            }
        }
        best.map(|(c, _)| c)
    }
}
