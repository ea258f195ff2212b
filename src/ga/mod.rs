//! Genetic algorithm for closed travelling-salesman tours.
//!
//! - [`GaConfig`] — population size, generations, mutation rate, elitism, seed
//! - [`Tour`] — permutation chromosome with cached closed-tour cost
//! - [`single_point_crossover`], [`invert_segment`], [`tournament`] — operators
//! - [`GeneticTsp`] — generational runner over a [`DistanceMatrix`](crate::distance::DistanceMatrix)

mod chromosome;
mod config;
mod operators;
mod solver;

pub use chromosome::{tour_cost, Tour};
pub use config::GaConfig;
pub use operators::{invert_segment, random_order, single_point_crossover, tournament};
pub use solver::{GeneticTsp, TspSolution};
