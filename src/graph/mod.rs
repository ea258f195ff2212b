//! Graph store for the transport network.
//!
//! - [`Graph`] — nodes plus per-node outgoing adjacency lists
//! - [`Edge`] — an adjacency entry (`to`, attributes)

mod store;

pub use store::{Edge, Graph};
