//! Domain model types for logistics networks.
//!
//! Provides the value types exchanged with the ingestion and reporting
//! layers: nodes with congestion profiles, directed edge attributes,
//! delivery requests, and vehicles.

mod delivery;
mod edge;
mod node;
mod vehicle;

pub use delivery::Delivery;
pub use edge::EdgeAttr;
pub use node::{Congestion, Node};
pub use vehicle::Vehicle;
