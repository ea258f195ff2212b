//! # u-logistics
//!
//! Logistics-network analytics and route optimization: a directed graph
//! store with congestion-aware travel times, topology analysis,
//! shortest-path engines, and delivery schedulers.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, EdgeAttr, Delivery, Vehicle)
//! - [`graph`] — Adjacency-list graph store with tombstoned nodes
//! - [`topology`] — Cycle detection, reachability, components, articulation points
//! - [`distance`] — Dense travel-time matrix with an explicit infinity sentinel
//! - [`shortest_path`] — Floyd–Warshall and Bellman–Ford
//! - [`congestion`] — Time-of-day bands and effective travel times
//! - [`scheduling`] — Greedy daily scheduler and multi-day planner
//! - [`ga`] — Genetic algorithm for closed TSP tours
//! - [`error`] — Shared error type
//!
//! The library emits [`tracing`] events and never installs a subscriber.

pub mod congestion;
pub mod distance;
pub mod error;
pub mod ga;
pub mod graph;
pub mod models;
pub mod scheduling;
pub mod shortest_path;
pub mod topology;
