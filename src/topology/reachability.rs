//! Directed reachability.

use std::collections::VecDeque;

use tracing::warn;

use crate::error::{try_filled, NetworkError, NetworkResult};
use crate::graph::Graph;

/// Returns `true` if `target` can be reached from `source` following edge
/// directions.
///
/// Breadth-first search with a FIFO queue, stopping as soon as `target` is
/// dequeued. Out-of-range or tombstoned endpoints are unreachable, as is
/// everything when working memory cannot be reserved.
///
/// # Examples
///
/// ```
/// use u_logistics::graph::Graph;
/// use u_logistics::models::EdgeAttr;
/// use u_logistics::topology::is_reachable;
///
/// let mut g = Graph::new(3);
/// g.upsert_edge(0, 1, EdgeAttr::new(1.0, 1.0)).unwrap();
/// g.upsert_edge(1, 2, EdgeAttr::new(1.0, 1.0)).unwrap();
/// assert!(is_reachable(&g, 0, 2));
/// assert!(!is_reachable(&g, 2, 0));
/// ```
pub fn is_reachable(graph: &Graph, source: usize, target: usize) -> bool {
    if !graph.is_active(source) || !graph.is_active(target) {
        return false;
    }
    match bfs(graph, source, target) {
        Ok(found) => found,
        Err(err) => {
            warn!(%err, source, target, "reachability query skipped");
            false
        }
    }
}

fn bfs(graph: &Graph, source: usize, target: usize) -> NetworkResult<bool> {
    let n = graph.node_count();
    let mut visited = try_filled(n, false)?;
    let mut queue = VecDeque::new();
    queue
        .try_reserve(n)
        .map_err(|_| NetworkError::AllocationFailure { elements: n })?;

    visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return Ok(true);
        }
        for e in graph.out_edges(current) {
            if !visited[e.to] {
                visited[e.to] = true;
                queue.push_back(e.to);
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EdgeAttr;

    fn chain() -> Graph {
        let mut g = Graph::new(3);
        g.upsert_edge(0, 1, EdgeAttr::new(1.0, 1.0)).expect("in range");
        g.upsert_edge(1, 2, EdgeAttr::new(1.0, 1.0)).expect("in range");
        g
    }

    #[test]
    fn test_chain_reachable() {
        assert!(is_reachable(&chain(), 0, 2));
    }

    #[test]
    fn test_removed_edge_breaks_reachability() {
        let mut g = chain();
        g.remove_edge(1, 2).expect("in range");
        assert!(!is_reachable(&g, 0, 2));
        assert!(is_reachable(&g, 0, 1));
    }

    #[test]
    fn test_direction_matters() {
        assert!(!is_reachable(&chain(), 2, 0));
    }

    #[test]
    fn test_self_reachable() {
        assert!(is_reachable(&chain(), 1, 1));
    }

    #[test]
    fn test_out_of_range_is_unreachable() {
        let g = chain();
        assert!(!is_reachable(&g, 0, 3));
        assert!(!is_reachable(&g, 9, 0));
    }

    #[test]
    fn test_tombstoned_endpoint_is_unreachable() {
        let mut g = chain();
        g.remove_node(2).expect("in range");
        assert!(!is_reachable(&g, 0, 2));
        assert!(!is_reachable(&g, 2, 2));
    }

    #[test]
    fn test_removed_node_stays_a_barrier() {
        let mut g = chain();
        g.remove_node(1).expect("in range");
        assert!(g.upsert_edge(0, 1, EdgeAttr::new(1.0, 1.0)).is_err());
        assert!(g.upsert_edge(1, 2, EdgeAttr::new(1.0, 1.0)).is_err());

        assert!(!is_reachable(&g, 0, 2));
        let dm = crate::shortest_path::floyd_warshall(&g).expect("small graph");
        assert!(!dm.is_reachable(0, 2));
        let cc = crate::topology::connected_components(&g);
        assert_ne!(cc.label(0), cc.label(2));
    }

    #[test]
    fn test_reachable_through_cycle() {
        let mut g = Graph::new(4);
        for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3)] {
            g.upsert_edge(u, v, EdgeAttr::new(1.0, 1.0)).expect("in range");
        }
        assert!(is_reachable(&g, 1, 3));
        assert!(!is_reachable(&g, 3, 1));
    }
}
