//! Genetic algorithm parameters.

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, NetworkResult};

/// Parameters of [`GeneticTsp`](super::GeneticTsp).
///
/// The default reproduces the reference run: 200 tours, 1000 generations,
/// 5% inversion probability, full generational replacement (no elites), and
/// an OS-seeded random generator.
///
/// # Examples
///
/// ```
/// use u_logistics::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(200)
///     .with_elitism_count(2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.mutation_rate, 0.05);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of tours per generation.
    pub population_size: usize,
    /// Number of generations after the initial population.
    pub generations: usize,
    /// Probability that a child receives a segment inversion.
    pub mutation_rate: f64,
    /// Best tours copied unchanged into the next generation.
    pub elitism_count: usize,
    /// Random seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            generations: 1000,
            mutation_rate: 0.05,
            elitism_count: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of elites carried over each generation.
    pub fn with_elitism_count(mut self, count: usize) -> Self {
        self.elitism_count = count;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the parameters describe a runnable search.
    pub fn validate(&self) -> NetworkResult<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must lie in [0, 1]"));
        }
        if self.elitism_count > self.population_size {
            return Err(invalid("elitism_count must not exceed population_size"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> NetworkError {
    NetworkError::InvalidConfig {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let c = GaConfig::default();
        assert_eq!(c.population_size, 200);
        assert_eq!(c.generations, 1000);
        assert!((c.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(c.elitism_count, 0);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_population() {
        let c = GaConfig::default().with_population_size(0);
        assert!(matches!(
            c.validate(),
            Err(NetworkError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_rate() {
        assert!(GaConfig::default().with_mutation_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(-0.1).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(f64::NAN).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let c: GaConfig =
            serde_json::from_str(r#"{"generations": 50, "seed": 7}"#).expect("valid json");
        assert_eq!(c.generations, 50);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.population_size, 200);
        assert_eq!(c.elitism_count, 0);
    }

    #[test]
    fn test_rejects_too_many_elites() {
        let c = GaConfig::default()
            .with_population_size(4)
            .with_elitism_count(5);
        assert!(c.validate().is_err());
        assert!(c.with_elitism_count(4).validate().is_ok());
    }
}
