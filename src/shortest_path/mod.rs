//! Shortest travel-time computations over the graph store.
//!
//! - [`floyd_warshall`] — all-pairs matrix, materialized on demand
//! - [`bellman_ford`] — single source, with negative-cycle status
//!
//! Both weigh edges by `base_time` and skip self-loops.

mod bellman_ford;
mod floyd_warshall;

pub use bellman_ford::{bellman_ford, PathStatus, ShortestPathTree};
pub use floyd_warshall::{floyd_warshall, relax_all_pairs};
