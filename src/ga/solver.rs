//! Generational GA for the closed travelling-salesman tour.
//!
//! # Algorithm
//!
//! 1. Build `population_size` random permutations of all node indices and
//!    price each as a closed tour.
//! 2. For each generation, build a whole new population: copy the
//!    `elitism_count` cheapest tours, then fill the rest with children of
//!    two binary-tournament parents via single-point order-preserving
//!    crossover, each inverted with probability `mutation_rate`.
//! 3. Return the cheapest tour of the final population.
//!
//! With the default `elitism_count = 0` the previous generation is
//! discarded entirely, so the result is not guaranteed to be the best tour
//! ever seen.
//!
//! # Complexity
//!
//! O(G · P · V) for G generations, P tours of V nodes.
//!
//! # Reference
//!
//! Goldberg, D.E. (1989). *Genetic Algorithms in Search, Optimization and
//! Machine Learning*, Addison-Wesley.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::{try_with_capacity, NetworkResult};

use super::chromosome::Tour;
use super::config::GaConfig;
use super::operators::{invert_segment, random_order, single_point_crossover, tournament};

/// Best tour returned by [`GeneticTsp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspSolution {
    /// Visiting order, a permutation of every node index.
    pub tour: Vec<usize>,
    /// Closed-tour cost; infinite if some leg is unreachable.
    pub cost: f64,
    /// Generations evolved after the initial population.
    pub generations: usize,
}

/// Genetic solver over an all-pairs cost matrix.
///
/// # Examples
///
/// ```
/// use u_logistics::distance::DistanceMatrix;
/// use u_logistics::ga::{GaConfig, GeneticTsp};
///
/// // Four corners of a unit square.
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 1.5, 1.0,
///     1.0, 0.0, 1.0, 1.5,
///     1.5, 1.0, 0.0, 1.0,
///     1.0, 1.5, 1.0, 0.0,
/// ]).unwrap();
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(50)
///     .with_elitism_count(1)
///     .with_seed(42);
/// let best = GeneticTsp::new(&dm, config).run().unwrap();
/// assert_eq!(best.tour.len(), 4);
/// assert!((best.cost - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticTsp<'a> {
    matrix: &'a DistanceMatrix,
    config: GaConfig,
}

impl<'a> GeneticTsp<'a> {
    /// Creates a solver over `matrix`.
    pub fn new(matrix: &'a DistanceMatrix, config: GaConfig) -> Self {
        Self { matrix, config }
    }

    /// The solver's parameters.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the search with a generator seeded from the config, or from
    /// the operating system when no seed is set.
    ///
    /// Fails on an invalid config or when the population cannot be
    /// allocated.
    pub fn run(&self) -> NetworkResult<TspSolution> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs the search with a caller-supplied generator.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> NetworkResult<TspSolution> {
        self.config.validate()?;
        let n = self.matrix.size();
        let size = self.config.population_size;
        debug!(
            nodes = n,
            population = size,
            generations = self.config.generations,
            "genetic search started"
        );

        let mut population = try_with_capacity(size)?;
        for _ in 0..size {
            population.push(self.evaluated(random_order(n, rng)));
        }

        for generation in 0..self.config.generations {
            population = self.next_generation(&population, rng)?;
            if generation % 100 == 0 {
                trace!(
                    generation,
                    best = ?best_of(&population).map(Tour::cost),
                    "generation evolved"
                );
            }
        }

        let best = best_of(&population)
            .cloned()
            .unwrap_or_else(|| self.evaluated(Vec::new()));
        debug!(cost = best.cost(), "genetic search finished");
        Ok(TspSolution {
            cost: best.cost(),
            tour: best.into_order(),
            generations: self.config.generations,
        })
    }

    fn next_generation<R: Rng>(&self, parents: &[Tour], rng: &mut R) -> NetworkResult<Vec<Tour>> {
        let size = parents.len();
        let mut next = try_with_capacity(size)?;

        if self.config.elitism_count > 0 {
            let mut ranked: Vec<&Tour> = parents.iter().collect();
            ranked.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
            next.extend(ranked.into_iter().take(self.config.elitism_count).cloned());
        }

        while next.len() < size {
            let first = tournament(parents, rng);
            let second = tournament(parents, rng);
            let mut child = Tour::new(single_point_crossover(first.order(), second.order(), rng));
            invert_segment(&mut child, self.config.mutation_rate, rng);
            child.evaluate(self.matrix);
            next.push(child);
        }
        Ok(next)
    }

    fn evaluated(&self, order: Vec<usize>) -> Tour {
        let mut tour = Tour::new(order);
        tour.evaluate(self.matrix);
        tour
    }
}

/// Cheapest tour, first on ties.
fn best_of(population: &[Tour]) -> Option<&Tour> {
    population
        .iter()
        .reduce(|best, t| if t.cost() < best.cost() { t } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::INFINITY;
    use crate::error::NetworkError;
    use crate::ga::tour_cost;
    use proptest::prelude::*;

    /// Nodes on a circle; the optimal tour visits them in angular order.
    fn ring(n: usize) -> DistanceMatrix {
        let pts: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let a = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                (a.cos(), a.sin())
            })
            .collect();
        let mut data = Vec::with_capacity(n * n);
        for &(xi, yi) in &pts {
            for &(xj, yj) in &pts {
                data.push(((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt());
            }
        }
        DistanceMatrix::from_data(n, data).expect("square data")
    }

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_seeded_run_is_deterministic() {
        let dm = ring(10);
        let config = GaConfig::default()
            .with_population_size(40)
            .with_generations(100)
            .with_seed(42);
        let a = GeneticTsp::new(&dm, config.clone()).run().expect("valid config");
        let b = GeneticTsp::new(&dm, config).run().expect("valid config");
        assert_eq!(a, b);
    }

    #[test]
    fn test_cost_matches_tour() {
        let dm = ring(8);
        let mut rng = StdRng::seed_from_u64(42);
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(60);
        let sol = GeneticTsp::new(&dm, config)
            .run_with_rng(&mut rng)
            .expect("valid config");
        assert!(is_permutation(&sol.tour, 8));
        assert!((sol.cost - tour_cost(&dm, &sol.tour)).abs() < 1e-10);
        assert_eq!(sol.generations, 60);
    }

    #[test]
    fn test_elitism_finds_ring_optimum() {
        let n = 8;
        let dm = ring(n);
        let optimum = tour_cost(&dm, &(0..n).collect::<Vec<_>>());
        let config = GaConfig::default()
            .with_population_size(100)
            .with_generations(300)
            .with_mutation_rate(0.2)
            .with_elitism_count(2)
            .with_seed(42);
        let sol = GeneticTsp::new(&dm, config).run().expect("valid config");
        assert!(sol.cost <= optimum * 1.25, "cost {} vs optimum {}", sol.cost, optimum);
    }

    #[test]
    fn test_elitism_never_worsens() {
        let dm = ring(9);
        let base = GaConfig::default()
            .with_population_size(20)
            .with_elitism_count(1)
            .with_seed(7);
        let start = GeneticTsp::new(&dm, base.clone().with_generations(0))
            .run()
            .expect("valid config");
        let evolved = GeneticTsp::new(&dm, base.with_generations(50))
            .run()
            .expect("valid config");
        assert!(evolved.cost <= start.cost + 1e-10);
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let dm = ring(6);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_generations(0)
            .with_seed(1);
        let sol = GeneticTsp::new(&dm, config).run().expect("valid config");
        assert!(is_permutation(&sol.tour, 6));
        assert_eq!(sol.generations, 0);
    }

    #[test]
    fn test_tiny_matrices() {
        let config = GaConfig::default()
            .with_population_size(5)
            .with_generations(3)
            .with_seed(0);

        let empty = DistanceMatrix::unconnected(0).expect("empty");
        let sol = GeneticTsp::new(&empty, config.clone()).run().expect("valid config");
        assert!(sol.tour.is_empty());
        assert_eq!(sol.cost, 0.0);

        let single = DistanceMatrix::unconnected(1).expect("one node");
        let sol = GeneticTsp::new(&single, config).run().expect("valid config");
        assert_eq!(sol.tour, vec![0]);
        assert_eq!(sol.cost, 0.0);
    }

    #[test]
    fn test_unreachable_legs_are_infinite() {
        let dm = DistanceMatrix::unconnected(3).expect("small");
        let config = GaConfig::default()
            .with_population_size(4)
            .with_generations(2)
            .with_seed(9);
        let sol = GeneticTsp::new(&dm, config).run().expect("valid config");
        assert_eq!(sol.cost, INFINITY);
        assert!(is_permutation(&sol.tour, 3));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dm = ring(4);
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(
            GeneticTsp::new(&dm, config).run(),
            Err(NetworkError::InvalidConfig { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_result_is_permutation(
            n in 0usize..12,
            generations in 0usize..20,
            population in 1usize..16,
            seed in any::<u64>(),
        ) {
            let dm = ring(n);
            let config = GaConfig::default()
                .with_population_size(population)
                .with_generations(generations)
                .with_mutation_rate(0.3)
                .with_seed(seed);
            let sol = GeneticTsp::new(&dm, config).run().expect("valid config");
            prop_assert!(is_permutation(&sol.tour, n));
        }
    }
}
