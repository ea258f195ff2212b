//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::{try_filled, NetworkError, NetworkResult};
use crate::graph::Graph;

/// Sentinel for "no edge" / "no path". Distinct from NaN: test with
/// [`f64::is_finite`].
pub const INFINITY: f64 = f64::INFINITY;

/// A dense n×n travel-time matrix stored in row-major order.
///
/// Entries are either finite times or [`INFINITY`] for unreachable pairs.
///
/// # Examples
///
/// ```
/// use u_logistics::distance::{DistanceMatrix, INFINITY};
/// use u_logistics::graph::Graph;
/// use u_logistics::models::EdgeAttr;
///
/// let mut g = Graph::new(3);
/// g.upsert_edge(0, 1, EdgeAttr::new(2.0, 5.0)).unwrap();
/// let dm = DistanceMatrix::from_graph(&g).unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.get(1, 0), INFINITY);
/// assert_eq!(dm.get(2, 2), 0.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix with zeros on the diagonal and [`INFINITY`] elsewhere.
    pub fn unconnected(size: usize) -> NetworkResult<Self> {
        let cells = size
            .checked_mul(size)
            .ok_or(NetworkError::AllocationFailure { elements: usize::MAX })?;
        let mut data = try_filled(cells, INFINITY)?;
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Ok(Self { data, size })
    }

    /// Materializes the one-hop base-time matrix of a graph.
    ///
    /// `d[i][i] = 0`, `d[i][j] = base_time(i, j)` when an edge exists, and
    /// [`INFINITY`] otherwise. Self-loops are ignored.
    pub fn from_graph(graph: &Graph) -> NetworkResult<Self> {
        let mut dm = Self::unconnected(graph.node_count())?;
        for u in 0..graph.node_count() {
            for e in graph.out_edges(u) {
                if e.to != u {
                    dm.set(u, e.to, e.attr.base_time);
                }
            }
        }
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if size.checked_mul(size) != Some(data.len()) {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `from` (distances to every location), or `None` if out of
    /// range.
    pub fn row(&self, from: usize) -> Option<&[f64]> {
        if from >= self.size {
            return None;
        }
        Some(&self.data[from * self.size..(from + 1) * self.size])
    }

    /// Returns `true` if `to` is reachable from `from` (finite entry).
    ///
    /// Out-of-range indices are unreachable.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        from < self.size && to < self.size && self.get(from, to).is_finite()
    }

    /// Ordered pairs `(i, j)` with no path between them.
    pub fn unreachable_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.size {
            for j in 0..self.size {
                if !self.get(i, j).is_finite() {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}
