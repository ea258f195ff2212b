//! Distance and travel time matrices.
//!
//! Provides a dense matrix for all-pairs results and the [`INFINITY`]
//! sentinel used crate-wide for "no edge" and "no path".

mod matrix;

pub use matrix::{DistanceMatrix, INFINITY};
