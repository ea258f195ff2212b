//! Single-source shortest travel times with negative-cycle detection.
//!
//! # Algorithm
//!
//! Every edge is relaxed up to V−1 times (stopping early once a full pass
//! changes nothing). One more full scan follows: if any edge can still be
//! relaxed, a negative cycle is reachable from the source and the distances
//! are flagged as unreliable.
//!
//! Edges are weighed by `base_time`, not distance: downstream scheduling is
//! deadline-driven. Self-loops are skipped.
//!
//! # Complexity
//!
//! O(V·E).
//!
//! # Reference
//!
//! Bellman, R. (1958). "On a routing problem", *Quarterly of Applied
//! Mathematics* 16(1), 87-90.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::distance::INFINITY;
use crate::error::{try_filled, NetworkResult};
use crate::graph::Graph;

/// Whether single-source distances can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStatus {
    /// Distances and predecessors are valid shortest paths.
    Ok,
    /// A negative-weight cycle is reachable from the source.
    NegativeCycle,
}

/// Result of a single-source search: distance and predecessor per node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    source: usize,
    dist: Vec<f64>,
    pred: Vec<Option<usize>>,
    status: PathStatus,
}

impl ShortestPathTree {
    /// Node the search started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance per node; [`INFINITY`] where unreachable.
    pub fn distances(&self) -> &[f64] {
        &self.dist
    }

    /// Distance to `node`, [`INFINITY`] if unreachable or out of range.
    pub fn distance(&self, node: usize) -> f64 {
        self.dist.get(node).copied().unwrap_or(INFINITY)
    }

    /// Predecessor per node on its shortest path.
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.pred
    }

    /// Predecessor of `node`, if any.
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.pred.get(node).copied().flatten()
    }

    /// Search outcome.
    pub fn status(&self) -> PathStatus {
        self.status
    }

    /// `true` when no negative cycle was detected.
    pub fn is_reliable(&self) -> bool {
        self.status == PathStatus::Ok
    }

    /// Node sequence from the source to `target`, both included.
    ///
    /// `None` when `target` is unreachable, out of range, or the distances
    /// are unreliable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reliable() || !self.distance(target).is_finite() {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.dist.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Computes shortest base-time distances from `source` to every node.
///
/// Fails with [`InvalidIndex`](crate::error::NetworkError::InvalidIndex) when
/// `source` is out of range, or when the per-node buffers cannot be
/// allocated. A negative cycle is not an error: it is reported through
/// [`ShortestPathTree::status`].
///
/// # Examples
///
/// ```
/// use u_logistics::graph::Graph;
/// use u_logistics::models::EdgeAttr;
/// use u_logistics::shortest_path::{bellman_ford, PathStatus};
///
/// let mut g = Graph::new(3);
/// g.upsert_edge(0, 1, EdgeAttr::new(1.0, 4.0)).unwrap();
/// g.upsert_edge(1, 2, EdgeAttr::new(1.0, -2.0)).unwrap();
///
/// let tree = bellman_ford(&g, 0).unwrap();
/// assert_eq!(tree.status(), PathStatus::Ok);
/// assert_eq!(tree.distance(2), 2.0);
/// assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
/// ```
pub fn bellman_ford(graph: &Graph, source: usize) -> NetworkResult<ShortestPathTree> {
    graph.check_index(source)?;
    let n = graph.node_count();
    let mut dist = try_filled(n, INFINITY)?;
    let mut pred = try_filled(n, None)?;
    dist[source] = 0.0;

    for _ in 1..n {
        if !relax_pass(graph, &mut dist, &mut pred) {
            break;
        }
    }

    let status = if relax_pass(graph, &mut dist, &mut pred) {
        warn!(source, "negative cycle reachable from source");
        PathStatus::NegativeCycle
    } else {
        PathStatus::Ok
    };
    debug!(source, nodes = n, ?status, "single-source travel times computed");

    Ok(ShortestPathTree {
        source,
        dist,
        pred,
        status,
    })
}

/// Relaxes every non-loop edge once; returns `true` if any distance dropped.
fn relax_pass(graph: &Graph, dist: &mut [f64], pred: &mut [Option<usize>]) -> bool {
    let mut changed = false;
    for u in 0..graph.node_count() {
        let d_u = dist[u];
        if !d_u.is_finite() {
            continue;
        }
        for e in graph.out_edges(u) {
            if e.to == u {
                continue;
            }
            let candidate = d_u + e.attr.base_time;
            if candidate < dist[e.to] {
                dist[e.to] = candidate;
                pred[e.to] = Some(u);
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use crate::models::EdgeAttr;
    use crate::shortest_path::floyd_warshall;
    use proptest::prelude::*;

    fn graph_with(n: usize, edges: &[(usize, usize, f64)]) -> Graph {
        let mut g = Graph::new(n);
        for &(u, v, t) in edges {
            g.upsert_edge(u, v, EdgeAttr::new(1.0, t)).expect("in range");
        }
        g
    }

    #[test]
    fn test_simple_distances() {
        let g = graph_with(4, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)]);
        let tree = bellman_ford(&g, 0).expect("valid source");
        assert_eq!(tree.status(), PathStatus::Ok);
        assert_eq!(tree.distance(0), 0.0);
        assert!((tree.distance(2) - 3.0).abs() < 1e-10);
        assert_eq!(tree.predecessor(2), Some(1));
        assert_eq!(tree.distance(3), INFINITY);
        assert_eq!(tree.predecessor(3), None);
        assert_eq!(tree.path_to(3), None);
    }

    #[test]
    fn test_negative_cycle_detected() {
        let g = graph_with(3, &[(0, 1, 1.0), (1, 2, -2.0), (2, 1, 1.0)]);
        let tree = bellman_ford(&g, 0).expect("valid source");
        assert_eq!(tree.status(), PathStatus::NegativeCycle);
        assert!(!tree.is_reliable());
        assert_eq!(tree.path_to(2), None);
    }

    #[test]
    fn test_unreachable_negative_cycle_is_ok() {
        let g = graph_with(4, &[(0, 1, 1.0), (2, 3, -2.0), (3, 2, 1.0)]);
        let tree = bellman_ford(&g, 0).expect("valid source");
        assert_eq!(tree.status(), PathStatus::Ok);
    }

    #[test]
    fn test_negative_self_loop_ignored() {
        let g = graph_with(2, &[(0, 0, -1.0), (0, 1, 3.0)]);
        let tree = bellman_ford(&g, 0).expect("valid source");
        assert_eq!(tree.status(), PathStatus::Ok);
        assert_eq!(tree.distance(1), 3.0);
    }

    #[test]
    fn test_invalid_source() {
        let g = Graph::new(2);
        assert_eq!(
            bellman_ford(&g, 2),
            Err(NetworkError::InvalidIndex {
                index: 2,
                node_count: 2
            })
        );
    }

    #[test]
    fn test_path_to_source() {
        let g = graph_with(2, &[(0, 1, 1.0)]);
        let tree = bellman_ford(&g, 1).expect("valid source");
        assert_eq!(tree.path_to(1), Some(vec![1]));
        assert_eq!(tree.path_to(0), None);
    }

    #[test]
    fn test_single_node() {
        let tree = bellman_ford(&Graph::new(1), 0).expect("valid source");
        assert_eq!(tree.distances(), &[0.0]);
        assert_eq!(tree.status(), PathStatus::Ok);
    }

    proptest! {
        #[test]
        fn prop_matches_floyd_warshall_row(
            (n, edges, src) in (1usize..8).prop_flat_map(|n| (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0.0f64..100.0), 0..24),
                0..n,
            ))
        ) {
            let g = graph_with(n, &edges);
            let tree = bellman_ford(&g, src).expect("valid source");
            prop_assert_eq!(tree.status(), PathStatus::Ok);
            let dm = floyd_warshall(&g).expect("small graph");
            for v in 0..n {
                let (bf, fw) = (tree.distance(v), dm.get(src, v));
                if fw.is_finite() {
                    prop_assert!((bf - fw).abs() < 1e-9);
                } else {
                    prop_assert!(!bf.is_finite());
                }
            }
        }
    }
}
