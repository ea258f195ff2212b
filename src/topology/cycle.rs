//! Undirected cycle detection.

use tracing::warn;

use super::{Frame, UndirectedView};
use crate::error::{try_filled, try_with_capacity, NetworkResult};
use crate::graph::Graph;

/// Returns `true` if the network, viewed as undirected, contains a cycle.
///
/// Walks each unvisited active node depth-first; reaching an already visited
/// vertex other than the immediate parent is a cycle. Stops at the first one
/// found. A two-way pair `u → v`, `v → u` is a single undirected edge and
/// does not count. O(V + E).
///
/// Returns `false` when working memory cannot be reserved.
///
/// # Examples
///
/// ```
/// use u_logistics::graph::Graph;
/// use u_logistics::models::EdgeAttr;
/// use u_logistics::topology::detect_cycle;
///
/// let mut g = Graph::new(3);
/// g.upsert_edge(0, 1, EdgeAttr::new(1.0, 1.0)).unwrap();
/// g.upsert_edge(1, 2, EdgeAttr::new(1.0, 1.0)).unwrap();
/// assert!(!detect_cycle(&g));
///
/// g.upsert_edge(2, 0, EdgeAttr::new(1.0, 1.0)).unwrap();
/// assert!(detect_cycle(&g));
/// ```
pub fn detect_cycle(graph: &Graph) -> bool {
    match find_cycle(graph) {
        Ok(found) => found,
        Err(err) => {
            warn!(%err, "cycle detection skipped");
            false
        }
    }
}

fn find_cycle(graph: &Graph) -> NetworkResult<bool> {
    let n = graph.node_count();
    let view = UndirectedView::build(graph)?;
    let mut visited = try_filled(n, false)?;
    let mut stack: Vec<Frame> = try_with_capacity(n)?;

    for root in 0..n {
        if visited[root] || !graph.is_active(root) {
            continue;
        }
        visited[root] = true;
        stack.push(Frame::root(root));

        while let Some(frame) = stack.last_mut() {
            let neighbors = view.neighbors(frame.node);
            if frame.cursor == neighbors.len() {
                stack.pop();
                continue;
            }
            let w = neighbors[frame.cursor];
            frame.cursor += 1;

            if !visited[w] {
                visited[w] = true;
                let parent = frame.node;
                stack.push(Frame::child(w, parent));
            } else if frame.parent != Some(w) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EdgeAttr;

    fn graph_with(n: usize, edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::new(n);
        for &(u, v) in edges {
            g.upsert_edge(u, v, EdgeAttr::new(1.0, 1.0)).expect("in range");
        }
        g
    }

    #[test]
    fn test_directed_triangle_is_cycle() {
        assert!(detect_cycle(&graph_with(3, &[(0, 1), (1, 2), (2, 0)])));
    }

    #[test]
    fn test_chain_is_acyclic() {
        assert!(!detect_cycle(&graph_with(3, &[(0, 1), (1, 2)])));
    }

    #[test]
    fn test_two_way_pair_is_not_cycle() {
        assert!(!detect_cycle(&graph_with(2, &[(0, 1), (1, 0)])));
    }

    #[test]
    fn test_converging_edges_are_not_cycle() {
        assert!(!detect_cycle(&graph_with(3, &[(0, 1), (2, 1)])));
    }

    #[test]
    fn test_diamond_is_undirected_cycle() {
        assert!(detect_cycle(&graph_with(
            4,
            &[(0, 1), (0, 2), (1, 3), (2, 3)]
        )));
    }

    #[test]
    fn test_self_loop_ignored() {
        assert!(!detect_cycle(&graph_with(2, &[(0, 0), (0, 1)])));
    }

    #[test]
    fn test_cycle_broken_by_node_removal() {
        let mut g = graph_with(3, &[(0, 1), (1, 2), (2, 0)]);
        g.remove_node(2).expect("in range");
        assert!(!detect_cycle(&g));
    }

    #[test]
    fn test_cycle_in_second_component() {
        let g = graph_with(5, &[(0, 1), (2, 3), (3, 4), (4, 2)]);
        assert!(detect_cycle(&g));
    }

    #[test]
    fn test_empty_graph() {
        assert!(!detect_cycle(&Graph::new(0)));
    }

    #[test]
    fn test_long_path_does_not_overflow() {
        let n = 200_000;
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        assert!(!detect_cycle(&graph_with(n, &edges)));
    }
}
