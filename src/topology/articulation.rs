//! Articulation points (cut vertices) via Tarjan's low-link algorithm.
//!
//! # Algorithm
//!
//! One depth-first pass assigns each node a discovery time `disc[u]` and a
//! low-link `low[u]`: the earliest discovery time reachable from the subtree
//! of `u` using at most one back edge. Then:
//!
//! - a DFS root is a cut vertex iff it has more than one DFS child;
//! - a non-root `u` is a cut vertex iff some child `v` has `low[v] >= disc[u]`.
//!
//! The discovery clock lives in a per-call [`LowLink`] value, so concurrent
//! calls on different graphs never interfere.
//!
//! # Reference
//!
//! Tarjan, R.E. (1972). "Depth-first search and linear graph algorithms",
//! *SIAM Journal on Computing* 1(2), 146-160.

use tracing::warn;

use super::{Frame, UndirectedView};
use crate::error::{try_filled, try_with_capacity, NetworkResult};
use crate::graph::Graph;

/// Per-call DFS bookkeeping. A discovery time of 0 means "unvisited".
struct LowLink {
    disc: Vec<usize>,
    low: Vec<usize>,
    clock: usize,
}

impl LowLink {
    fn new(n: usize) -> NetworkResult<Self> {
        Ok(Self {
            disc: try_filled(n, 0)?,
            low: try_filled(n, 0)?,
            clock: 0,
        })
    }

    fn visited(&self, u: usize) -> bool {
        self.disc[u] != 0
    }

    fn discover(&mut self, u: usize) {
        self.clock += 1;
        self.disc[u] = self.clock;
        self.low[u] = self.clock;
    }
}

/// Flags every articulation point of the network, viewed as undirected.
///
/// The result has one entry per node slot; tombstoned nodes are never
/// flagged. The result is empty when working memory cannot be reserved.
///
/// # Examples
///
/// ```
/// use u_logistics::graph::Graph;
/// use u_logistics::models::EdgeAttr;
/// use u_logistics::topology::articulation_points;
///
/// let mut g = Graph::new(3);
/// g.upsert_edge(0, 1, EdgeAttr::new(1.0, 1.0)).unwrap();
/// g.upsert_edge(1, 2, EdgeAttr::new(1.0, 1.0)).unwrap();
/// assert_eq!(articulation_points(&g), vec![false, true, false]);
/// ```
pub fn articulation_points(graph: &Graph) -> Vec<bool> {
    match find_articulation_points(graph) {
        Ok(flags) => flags,
        Err(err) => {
            warn!(%err, "articulation point search skipped");
            Vec::new()
        }
    }
}

fn find_articulation_points(graph: &Graph) -> NetworkResult<Vec<bool>> {
    let n = graph.node_count();
    let view = UndirectedView::build(graph)?;
    let mut flags = try_filled(n, false)?;
    let mut ll = LowLink::new(n)?;
    let mut stack: Vec<Frame> = try_with_capacity(n)?;

    for root in 0..n {
        if ll.visited(root) || !graph.is_active(root) {
            continue;
        }
        ll.discover(root);
        stack.push(Frame::root(root));
        let mut root_children = 0;

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;
            let neighbors = view.neighbors(u);

            if frame.cursor < neighbors.len() {
                let v = neighbors[frame.cursor];
                frame.cursor += 1;
                if !ll.visited(v) {
                    if u == root {
                        root_children += 1;
                    }
                    ll.discover(v);
                    stack.push(Frame::child(v, u));
                } else if frame.parent != Some(v) {
                    ll.low[u] = ll.low[u].min(ll.disc[v]);
                }
                continue;
            }

            // Subtree of u finished: propagate its low-link to the parent.
            let parent = frame.parent;
            stack.pop();
            if let Some(p) = parent {
                ll.low[p] = ll.low[p].min(ll.low[u]);
                if p != root && ll.low[u] >= ll.disc[p] {
                    flags[p] = true;
                }
            }
        }

        if root_children > 1 {
            flags[root] = true;
        }
    }

    Ok(flags)
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

    fn flagged(flags: &[bool]) -> Vec<usize> {
        flags
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_path_marks_middle() {
        let g = graph_with(3, &[(0, 1), (1, 2)]);
        assert_eq!(flagged(&articulation_points(&g)), vec![1]);
    }

    #[test]
    fn test_path_rooted_at_middle() {
        // Hub of 1-0-2 is the DFS root with two children.
        let g = graph_with(3, &[(0, 1), (0, 2)]);
        assert_eq!(flagged(&articulation_points(&g)), vec![0]);
    }

    #[test]
    fn test_triangle_has_none() {
        let g = graph_with(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(flagged(&articulation_points(&g)).is_empty());
    }

    #[test]
    fn test_bowtie_center() {
        // Two triangles sharing node 2.
        let g = graph_with(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        assert_eq!(flagged(&articulation_points(&g)), vec![2]);
    }

    #[test]
    fn test_bridge_between_cycles() {
        // Square 0-1-2-3 bridged by 3-4 to triangle 4-5-6.
        let g = graph_with(
            7,
            &[(0, 1), (1, 2), (2, 3), (3, 0), (3, 4), (4, 5), (5, 6), (6, 4)],
        );
        assert_eq!(flagged(&articulation_points(&g)), vec![3, 4]);
    }

    #[test]
    fn test_star() {
        let g = graph_with(4, &[(1, 0), (2, 0), (3, 0)]);
        assert_eq!(flagged(&articulation_points(&g)), vec![0]);
    }

    #[test]
    fn test_disconnected_paths() {
        let g = graph_with(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]);
        assert_eq!(flagged(&articulation_points(&g)), vec![1, 4]);
    }

    #[test]
    fn test_tombstoned_node_not_flagged() {
        let mut g = graph_with(3, &[(0, 1), (1, 2)]);
        g.remove_node(1).expect("in range");
        let flags = articulation_points(&g);
        assert_eq!(flags.len(), 3);
        assert!(flagged(&flags).is_empty());
    }

    #[test]
    fn test_repeated_calls_agree() {
        let g = graph_with(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let first = articulation_points(&g);
        let second = articulation_points(&g);
        assert_eq!(first, second);
        assert_eq!(flagged(&first), vec![1, 2, 3]);
    }
}
