//! Time-of-day dependent travel times.
//!
//! - [`TimeBand`] — morning / afternoon / night window of a departure clock
//! - [`effective_time`] — base time scaled by the origin's band multiplier
//!
//! Congestion belongs to the place being left, not to the edge or the
//! destination: `effective_time(u, v, t)` reads node `u`'s multiplier.

mod band;

pub use band::{TimeBand, MINUTES_PER_DAY};

use crate::distance::INFINITY;
use crate::graph::Graph;

/// Travel time of the edge `origin → dest` when departing at `departure`
/// (minutes since midnight).
///
/// Returns `base_time × multiplier`, where the multiplier is the origin
/// node's value for the departure's [`TimeBand`]. Returns [`INFINITY`] when
/// there is no such edge (including out-of-range indices).
///
/// # Examples
///
/// ```
/// use u_logistics::congestion::effective_time;
/// use u_logistics::graph::Graph;
/// use u_logistics::models::{Congestion, EdgeAttr, Node};
///
/// let mut g = Graph::from_nodes(vec![
///     Node::new(0, "Hub").with_congestion(Congestion::new(1.5, 1.2, 0.8)),
///     Node::new(1, "Relay"),
/// ]);
/// g.upsert_edge(0, 1, EdgeAttr::new(10.0, 20.0)).unwrap();
///
/// assert_eq!(effective_time(&g, 0, 1, 480.0), 30.0);   // morning
/// assert_eq!(effective_time(&g, 0, 1, 900.0), 24.0);   // afternoon
/// assert_eq!(effective_time(&g, 0, 1, 1200.0), 16.0);  // night
/// assert!(!effective_time(&g, 1, 0, 480.0).is_finite());
/// ```
pub fn effective_time(graph: &Graph, origin: usize, dest: usize, departure: f64) -> f64 {
    let Some(edge) = graph.edge(origin, dest) else {
        return INFINITY;
    };
    let Some(node) = graph.node(origin) else {
        return INFINITY;
    };
    edge.base_time * TimeBand::of(departure).multiplier(node.congestion())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Congestion, EdgeAttr, Node};

    fn network() -> Graph {
        let mut g = Graph::from_nodes(vec![
            Node::new(0, "A").with_congestion(Congestion::new(1.3, 1.7, 0.9)),
            Node::new(1, "B").with_congestion(Congestion::new(2.0, 2.0, 2.0)),
        ]);
        g.upsert_edge(0, 1, EdgeAttr::new(5.0, 12.5)).expect("in range");
        g.upsert_edge(1, 0, EdgeAttr::new(5.0, 12.5)).expect("in range");
        g
    }

    #[test]
    fn test_morning_exact_product() {
        let g = network();
        for t in [0.0, 1.0, 359.5, 719.0] {
            assert_eq!(effective_time(&g, 0, 1, t), 12.5 * 1.3);
        }
    }

    #[test]
    fn test_band_boundaries() {
        let g = network();
        assert_eq!(effective_time(&g, 0, 1, 720.0), 12.5 * 1.7);
        assert_eq!(effective_time(&g, 0, 1, 1079.9), 12.5 * 1.7);
        assert_eq!(effective_time(&g, 0, 1, 1080.0), 12.5 * 0.9);
        assert_eq!(effective_time(&g, 0, 1, 1439.0), 12.5 * 0.9);
    }

    #[test]
    fn test_uses_origin_not_destination() {
        let g = network();
        assert_eq!(effective_time(&g, 0, 1, 100.0), 12.5 * 1.3);
        assert_eq!(effective_time(&g, 1, 0, 100.0), 12.5 * 2.0);
    }

    #[test]
    fn test_missing_edge_is_infinite() {
        let mut g = network();
        g.remove_edge(0, 1).expect("in range");
        assert_eq!(effective_time(&g, 0, 1, 100.0), INFINITY);
        assert_eq!(effective_time(&g, 0, 7, 100.0), INFINITY);
        assert_eq!(effective_time(&g, 7, 0, 100.0), INFINITY);
    }

    #[test]
    fn test_next_day_wraps() {
        let g = network();
        assert_eq!(effective_time(&g, 0, 1, 1440.0 + 60.0), 12.5 * 1.3);
    }
}
