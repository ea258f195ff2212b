//! Error type shared by the graph store, the shortest-path engine, and the
//! optimizers.
//!
//! Topology queries never surface these: they fall back to a neutral value
//! (`false`, empty labels) instead.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by fallible operations on a logistics network.
///
/// # Examples
///
/// ```
/// use u_logistics::error::NetworkError;
/// use u_logistics::graph::Graph;
/// use u_logistics::models::EdgeAttr;
///
/// let mut g = Graph::new(2);
/// let err = g.upsert_edge(0, 5, EdgeAttr::new(1.0, 1.0)).unwrap_err();
/// assert_eq!(err, NetworkError::InvalidIndex { index: 5, node_count: 2 });
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// A node index fell outside `0..node_count`.
    #[error("node index {index} out of range for a graph of {node_count} nodes")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Number of node slots in the graph at the time of the call.
        node_count: usize,
    },
    /// A node index refers to a removed (tombstoned) node.
    #[error("node {index} has been removed")]
    InactiveNode {
        /// The tombstoned index.
        index: usize,
    },
    /// A working buffer could not be reserved.
    #[error("could not reserve working memory for {elements} elements")]
    AllocationFailure {
        /// Number of elements requested.
        elements: usize,
    },
    /// An optimizer configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which constraint was violated.
        reason: String,
    },
}

/// Result alias for network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Allocates a vector of `len` copies of `value`, reporting allocation
/// failure instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> NetworkResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_: TryReserveError| NetworkError::AllocationFailure { elements: len })?;
    buf.resize(len, value);
    Ok(buf)
}

/// Allocates an empty vector with room for `capacity` elements.
pub(crate) fn try_with_capacity<T>(capacity: usize) -> NetworkResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_: TryReserveError| NetworkError::AllocationFailure { elements: capacity })?;
    Ok(buf)
}
