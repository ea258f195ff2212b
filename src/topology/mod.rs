//! Structural analysis of the transport network.
//!
//! - [`detect_cycle`] — undirected cycle detection
//! - [`is_reachable`] — directed BFS reachability
//! - [`connected_components`] — undirected component labeling
//! - [`articulation_points`] — Tarjan cut vertices
//!
//! The undirected analyses share an undirected view built once per call
//! (out-edges ∪ in-edges, de-duplicated, self-loops and tombstones dropped)
//! and walk it with an explicit frame stack, so deep networks cannot
//! overflow the call stack. Every analyzer answers with a neutral value
//! (`false`, no labels, no flags) when its working memory cannot be reserved.

mod articulation;
mod components;
mod cycle;
mod reachability;

pub use articulation::articulation_points;
pub use components::{connected_components, Components};
pub use cycle::detect_cycle;
pub use reachability::is_reachable;

use crate::error::{try_with_capacity, NetworkResult};
use crate::graph::Graph;

/// Undirected adjacency of the active part of a graph.
pub(crate) struct UndirectedView {
    neighbors: Vec<Vec<usize>>,
}

impl UndirectedView {
    pub(crate) fn build(graph: &Graph) -> NetworkResult<Self> {
        let n = graph.node_count();
        let mut neighbors: Vec<Vec<usize>> = try_with_capacity(n)?;
        neighbors.resize_with(n, Vec::new);

        for u in 0..n {
            if !graph.is_active(u) {
                continue;
            }
            for e in graph.out_edges(u) {
                let v = e.to;
                if v == u || !graph.is_active(v) {
                    continue;
                }
                neighbors[u].push(v);
                neighbors[v].push(u);
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }
        Ok(Self { neighbors })
    }

    pub(crate) fn neighbors(&self, u: usize) -> &[usize] {
        &self.neighbors[u]
    }
}

/// One level of an explicit depth-first walk.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) node: usize,
    pub(crate) parent: Option<usize>,
    /// Index of the next neighbor to examine.
    pub(crate) cursor: usize,
}

impl Frame {
    pub(crate) fn root(node: usize) -> Self {
        Self {
            node,
            parent: None,
            cursor: 0,
        }
    }

    pub(crate) fn child(node: usize, parent: usize) -> Self {
        Self {
            node,
            parent: Some(parent),
            cursor: 0,
        }
    }
}
