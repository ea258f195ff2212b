//! Connected-component labeling.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::UndirectedView;
use crate::error::{try_filled, try_with_capacity, NetworkResult};
use crate::graph::Graph;

/// Component labeling of a network, viewed as undirected.
///
/// Labels start at 1 in root-discovery order (lowest node index first).
/// Tombstoned nodes carry label 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    /// Component id per node (0 for tombstoned nodes).
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component id of `node`, `None` if out of range or tombstoned.
    pub fn label(&self, node: usize) -> Option<usize> {
        self.labels.get(node).copied().filter(|&l| l > 0)
    }

    /// Node count per component; entry `c - 1` belongs to label `c`.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &label in &self.labels {
            if label > 0 {
                sizes[label - 1] += 1;
            }
        }
        sizes
    }

    /// `(label, size)` of the largest component, lowest label on ties.
    pub fn largest(&self) -> Option<(usize, usize)> {
        self.sizes()
            .into_iter()
            .enumerate()
            .fold(None, |best, (i, size)| match best {
                Some((_, best_size)) if best_size >= size => best,
                _ => Some((i + 1, size)),
            })
    }
}

/// Labels the connected components of the network, treating edges as
/// undirected.
///
/// Each unvisited active node starts a new component and an explicit-stack
/// walk labels everything reachable from it. Returns an empty labeling
/// (count 0) when working memory cannot be reserved.
///
/// # Examples
///
/// ```
/// use u_logistics::graph::Graph;
/// use u_logistics::models::EdgeAttr;
/// use u_logistics::topology::connected_components;
///
/// let mut g = Graph::new(4);
/// g.upsert_edge(0, 1, EdgeAttr::new(1.0, 1.0)).unwrap();
/// g.upsert_edge(3, 2, EdgeAttr::new(1.0, 1.0)).unwrap();
/// let cc = connected_components(&g);
/// assert_eq!(cc.count(), 2);
/// assert_eq!(cc.labels(), &[1, 1, 2, 2]);
/// assert_eq!(cc.sizes(), vec![2, 2]);
/// ```
pub fn connected_components(graph: &Graph) -> Components {
    match label_components(graph) {
        Ok(components) => components,
        Err(err) => {
            warn!(%err, "component labeling skipped");
            Components::default()
        }
    }
}

fn label_components(graph: &Graph) -> NetworkResult<Components> {
    let n = graph.node_count();
    let view = UndirectedView::build(graph)?;
    let mut labels = try_filled(n, 0usize)?;
    let mut stack: Vec<usize> = try_with_capacity(n)?;
    let mut count = 0;

    for root in 0..n {
        if labels[root] != 0 || !graph.is_active(root) {
            continue;
        }
        count += 1;
        labels[root] = count;
        stack.push(root);

        while let Some(v) = stack.pop() {
            for &w in view.neighbors(v) {
                if labels[w] == 0 {
                    labels[w] = count;
                    stack.push(w);
                }
            }
        }
    }

    Ok(Components { labels, count })
}
