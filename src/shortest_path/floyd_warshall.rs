//! All-pairs shortest travel times.
//!
//! # Algorithm
//!
//! Starting from the one-hop base-time matrix, every node `k` in turn is
//! offered as an intermediate stop:
//!
//! ```text
//! d[i][j] = min(d[i][j], d[i][k] + d[k][j])
//! ```
//!
//! A relaxation is attempted only when both legs are finite, and the
//! diagonal is never relaxed, so `d[i][i] == 0` holds for every graph.
//!
//! # Complexity
//!
//! O(V³) time, O(V²) memory.
//!
//! # Reference
//!
//! Floyd, R.W. (1962). "Algorithm 97: Shortest path", *Communications of
//! the ACM* 5(6), 345.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::NetworkResult;
use crate::graph::Graph;

/// Computes the all-pairs shortest base-time matrix of a graph.
///
/// Unreachable pairs hold [`INFINITY`](crate::distance::INFINITY).
/// Fails only if the V×V matrix cannot be allocated.
///
/// # Examples
///
/// ```
/// use u_logistics::graph::Graph;
/// use u_logistics::models::EdgeAttr;
/// use u_logistics::shortest_path::floyd_warshall;
///
/// let mut g = Graph::new(3);
/// g.upsert_edge(0, 1, EdgeAttr::new(1.0, 4.0)).unwrap();
/// g.upsert_edge(1, 2, EdgeAttr::new(1.0, 3.0)).unwrap();
/// g.upsert_edge(0, 2, EdgeAttr::new(1.0, 10.0)).unwrap();
///
/// let dm = floyd_warshall(&g).unwrap();
/// assert_eq!(dm.get(0, 2), 7.0);
/// assert!(!dm.is_reachable(2, 0));
/// ```
pub fn floyd_warshall(graph: &Graph) -> NetworkResult<DistanceMatrix> {
    let mut dm = DistanceMatrix::from_graph(graph)?;
    relax_all_pairs(&mut dm);
    debug!(nodes = dm.size(), "all-pairs travel times computed");
    Ok(dm)
}

/// Runs the Floyd–Warshall relaxation in place on an explicit matrix.
pub fn relax_all_pairs(dm: &mut DistanceMatrix) {
    let n = dm.size();
    for k in 0..n {
        for i in 0..n {
            let d_ik = dm.get(i, k);
            if !d_ik.is_finite() {
                continue;
            }
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d_kj = dm.get(k, j);
                if !d_kj.is_finite() {
                    continue;
                }
                let candidate = d_ik + d_kj;
                if candidate < dm.get(i, j) {
                    dm.set(i, j, candidate);
                }
            }
        }
    }
}
