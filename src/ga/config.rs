//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, operator rates, run length, archive size,
/// seeding, and parallelism. Operator *choice* (selection, crossover,
/// mutation) lives in [`Operators`](super::Operators), not here.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 50);
/// assert_eq!(config.seed, Some(42));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.2)
///     .with_hall_of_fame_size(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Constant across generations.
    pub population_size: usize,

    /// Probability of recombining a consecutive pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, both parents pass through unchanged.
    pub crossover_rate: f64,

    /// Probability of attempting mutation on an offspring (0.0–1.0).
    ///
    /// Per-gene flip probability is a property of the mutation operator.
    pub mutation_rate: f64,

    /// Number of generations after generation 0.
    pub max_generations: usize,

    /// Number of best-ever individuals kept by the hall of fame.
    pub hall_of_fame_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// either way since evaluation is pure and draws no random numbers.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            max_generations: 50,
            hall_of_fame_size: 1,
            seed: Some(42),
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the hall of fame capacity.
    pub fn with_hall_of_fame_size(mut self, n: usize) -> Self {
        self.hall_of_fame_size = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws the seed from the operating system on every run.
    pub fn with_random_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Rates are not clamped by the builders, so out-of-range values
    /// (including NaN) surface here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.hall_of_fame_size == 0 {
            return Err(ConfigError::EmptyHallOfFame);
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

/// Rejects NaN and values outside `[0, 1]`.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
